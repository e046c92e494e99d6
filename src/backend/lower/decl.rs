//! Declaration lowering: type aliases, structs and enums.
//!
//! Struct and enum shapes follow serde's derive output for JSON. Enum members are built per representation:
//!
//! | repr       | unit        | newtype(T)          | tuple(A, B)             | struct { a: A }          |
//! |------------|-------------|---------------------|-------------------------|--------------------------|
//! | external   | `"V"`       | `{ V: T }`          | `{ V: [A, B] }`         | `{ V: { a: A } }`        |
//! | internal   | `{ t: "V" }`| `{ t: "V" } & T`    | error                   | `{ t: "V"; a: A }`       |
//! | adjacent   | `{ t: "V" }`| `{ t: "V"; c: T }`  | `{ t: "V"; c: [A, B] }` | `{ t: "V"; c: { a: A } }`|
//! | untagged   | `null`      | `T`                 | `[A, B]`                | `{ a: A }`               |

use syn::ext::IdentExt;
use syn::{Fields, FieldsNamed, FieldsUnnamed, GenericParam, Generics, ItemEnum, ItemStruct, ItemType};

use super::TypeLowering;
use super::types::{lower_type, span_of};
use crate::backend::config::EnumRepr;
use crate::backend::ir::{TsDecl, TsDeclKind, TsField, TsType};
use crate::frontend::attrs::{self, ContainerAttrs, RenameRule};
use crate::frontend::diagnostics::{CompileError, errors};

/// What a variant carries, before the enum representation is applied.
#[derive(Debug, Clone, PartialEq)]
enum VariantPayload {
    Unit,
    Newtype(TsType),
    Tuple(Vec<TsType>),
    /// An object type (or an intersection when fields are flattened)
    Struct(TsType),
}

impl TypeLowering<'_> {
    /// `type Name<T> = ...;`
    pub(super) fn lower_alias(&self, item: &ItemType) -> Result<TsDecl, CompileError> {
        Ok(TsDecl {
            name: item.ident.unraw().to_string(),
            generics: lower_generics(&item.generics)?,
            docs: attrs::docs(&item.attrs),
            kind: TsDeclKind::Alias(lower_type(&item.ty)?),
        })
    }

    /// Structs become interfaces when they serialize as JSON objects, aliases otherwise.
    pub(super) fn lower_struct(&self, item: &ItemStruct) -> Result<TsDecl, CompileError> {
        let generics = lower_generics(&item.generics)?;
        let container = attrs::container_attrs(&item.attrs)?;

        let kind = match &item.fields {
            Fields::Named(named) if container.transparent => {
                let inner = first_serialized_field(named)?.ok_or_else(|| {
                    CompileError::attribute("transparent struct has no serialized field", span_of(&item.ident))
                })?;
                TsDeclKind::Alias(lower_type(&inner.ty)?)
            }
            Fields::Named(named) => {
                let (fields, flattened) = lower_named_fields(named, container.rename_all)?;
                if flattened.is_empty() {
                    TsDeclKind::Interface(fields)
                } else {
                    TsDeclKind::Alias(object_type(fields, flattened))
                }
            }
            Fields::Unnamed(unnamed) => TsDeclKind::Alias(match lower_unnamed_fields(unnamed)? {
                VariantPayload::Newtype(inner) => inner,
                VariantPayload::Tuple(elems) => TsType::Tuple(elems),
                _ => TsType::Null,
            }),
            Fields::Unit => TsDeclKind::Alias(TsType::Null),
        };

        Ok(TsDecl {
            name: item.ident.unraw().to_string(),
            generics,
            docs: attrs::docs(&item.attrs),
            kind,
        })
    }

    /// Enums become unions, one member per serialized variant.
    pub(super) fn lower_enum(&self, item: &ItemEnum) -> Result<TsDecl, CompileError> {
        let generics = lower_generics(&item.generics)?;
        let container = attrs::container_attrs(&item.attrs)?;
        let repr = self.enum_repr(&container, item)?;
        let enum_name = item.ident.unraw().to_string();

        let mut members = Vec::with_capacity(item.variants.len());
        for variant in &item.variants {
            let variant_attrs = attrs::variant_attrs(&variant.attrs)?;
            if variant_attrs.skip {
                continue;
            }

            let ident = variant.ident.unraw().to_string();
            let serialized = match (&variant_attrs.rename, container.rename_all) {
                (Some(rename), _) => rename.clone(),
                (None, Some(rule)) => rule.apply_to_variant(&ident),
                (None, None) => ident.clone(),
            };
            let field_rule = variant_attrs.rename_all.or(container.rename_all_fields);

            let payload = match &variant.fields {
                Fields::Unit => VariantPayload::Unit,
                Fields::Unnamed(unnamed) => lower_unnamed_fields(unnamed)?,
                Fields::Named(named) => {
                    let (fields, flattened) = lower_named_fields(named, field_rule)?;
                    VariantPayload::Struct(object_type(fields, flattened))
                }
            };

            let member = enum_member(&repr, serialized, payload).ok_or_else(|| {
                errors::internally_tagged_tuple(&enum_name, &ident, span_of(&variant.ident))
            })?;
            members.push(member);
        }

        Ok(TsDecl {
            name: enum_name,
            generics,
            docs: attrs::docs(&item.attrs),
            kind: TsDeclKind::Union(members),
        })
    }

    fn enum_repr(&self, container: &ContainerAttrs, item: &ItemEnum) -> Result<EnumRepr, CompileError> {
        match (container.untagged, &container.tag, &container.content) {
            (true, _, _) => Ok(EnumRepr::Untagged),
            (false, Some(tag), Some(content)) => Ok(EnumRepr::adjacent(tag, content)),
            (false, Some(tag), None) => Ok(EnumRepr::Internal { tag: tag.clone() }),
            (false, None, Some(_)) => Err(CompileError::attribute(
                format!("enum `{}` sets `content` without `tag`", item.ident),
                container.span.unwrap_or_else(|| span_of(&item.ident)),
            )
            .with_hint("adjacent tagging needs both: #[serde(tag = \"t\", content = \"c\")]")),
            (false, None, None) => Ok(self.config.default_enum_repr.clone()),
        }
    }
}

/// Build one union member. Returns `None` for the one combination serde rejects (internal tag + tuple variant).
fn enum_member(repr: &EnumRepr, name: String, payload: VariantPayload) -> Option<TsType> {
    let member = match repr {
        EnumRepr::External => match payload {
            VariantPayload::Unit => TsType::StringLiteral(name),
            VariantPayload::Newtype(inner) | VariantPayload::Struct(inner) => {
                TsType::Object(vec![TsField::new(name, inner)])
            }
            VariantPayload::Tuple(elems) => TsType::Object(vec![TsField::new(name, TsType::Tuple(elems))]),
        },
        EnumRepr::Internal { tag } => {
            let tag_field = TsField::new(tag.clone(), TsType::StringLiteral(name));
            match payload {
                VariantPayload::Unit => TsType::Object(vec![tag_field]),
                VariantPayload::Struct(TsType::Object(fields)) => {
                    TsType::Object(std::iter::once(tag_field).chain(fields).collect())
                }
                VariantPayload::Newtype(inner) | VariantPayload::Struct(inner) => {
                    TsType::Intersection(vec![TsType::Object(vec![tag_field]), inner])
                }
                VariantPayload::Tuple(_) => return None,
            }
        }
        EnumRepr::Adjacent { tag, content } => {
            let tag_field = TsField::new(tag.clone(), TsType::StringLiteral(name));
            let content_ty = match payload {
                VariantPayload::Unit => return Some(TsType::Object(vec![tag_field])),
                VariantPayload::Newtype(inner) | VariantPayload::Struct(inner) => inner,
                VariantPayload::Tuple(elems) => TsType::Tuple(elems),
            };
            TsType::Object(vec![tag_field, TsField::new(content.clone(), content_ty)])
        }
        EnumRepr::Untagged => match payload {
            VariantPayload::Unit => TsType::Null,
            VariantPayload::Newtype(inner) | VariantPayload::Struct(inner) => inner,
            VariantPayload::Tuple(elems) => TsType::Tuple(elems),
        },
    };
    Some(member)
}

/// Lower named fields, returning regular fields and the types of `#[serde(flatten)]` fields separately.
fn lower_named_fields(
    named: &FieldsNamed,
    rule: Option<RenameRule>,
) -> Result<(Vec<TsField>, Vec<TsType>), CompileError> {
    let mut fields = Vec::with_capacity(named.named.len());
    let mut flattened = Vec::new();

    for field in &named.named {
        let field_attrs = attrs::field_attrs(&field.attrs)?;
        if field_attrs.skip {
            continue;
        }

        let ty = lower_type(&field.ty)?;
        if field_attrs.flatten {
            flattened.push(ty);
            continue;
        }

        let ident = field.ident.as_ref().map(|i| i.unraw().to_string()).unwrap_or_default();
        let name = match (field_attrs.rename, rule) {
            (Some(rename), _) => rename,
            (None, Some(rule)) => rule.apply_to_field(&ident),
            (None, None) => ident,
        };

        fields.push(TsField {
            name,
            ty,
            optional: field_attrs.optional,
            docs: attrs::docs(&field.attrs),
        });
    }
    Ok((fields, flattened))
}

/// A single unnamed field is a newtype; anything else serializes as a tuple of the non-skipped fields.
fn lower_unnamed_fields(unnamed: &FieldsUnnamed) -> Result<VariantPayload, CompileError> {
    if unnamed.unnamed.len() == 1 {
        return Ok(VariantPayload::Newtype(lower_type(&unnamed.unnamed[0].ty)?));
    }

    let mut elems = Vec::with_capacity(unnamed.unnamed.len());
    for field in &unnamed.unnamed {
        if attrs::field_attrs(&field.attrs)?.skip {
            continue;
        }
        elems.push(lower_type(&field.ty)?);
    }
    Ok(VariantPayload::Tuple(elems))
}

fn first_serialized_field(named: &FieldsNamed) -> Result<Option<&syn::Field>, CompileError> {
    for field in &named.named {
        if !attrs::field_attrs(&field.attrs)?.skip {
            return Ok(Some(field));
        }
    }
    Ok(None)
}

fn object_type(fields: Vec<TsField>, flattened: Vec<TsType>) -> TsType {
    if flattened.is_empty() {
        TsType::Object(fields)
    } else {
        TsType::Intersection(std::iter::once(TsType::Object(fields)).chain(flattened).collect())
    }
}

/// Type parameter names. Lifetimes are dropped; const generics have no TypeScript counterpart.
fn lower_generics(generics: &Generics) -> Result<Vec<String>, CompileError> {
    let mut names = Vec::new();
    for param in &generics.params {
        match param {
            GenericParam::Type(ty) => names.push(ty.ident.unraw().to_string()),
            GenericParam::Lifetime(_) => {}
            GenericParam::Const(c) => {
                return Err(errors::const_generic(&c.ident.to_string(), span_of(&c.ident)));
            }
        }
    }
    Ok(names)
}
