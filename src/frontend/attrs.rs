//! Attribute reading for serde-aware conversion
//!
//! Only the subset of `#[serde(...)]` that changes the JSON *shape* of a type is interpreted. Everything else (e.g.
//! `default`, `with`, `bound`, `deny_unknown_fields`) is parsed and ignored so that real-world attribute lists never
//! fail conversion.

use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, Lit, LitStr, Token};

use super::diagnostics::{CompileError, Span, errors};

/// A serde `rename_all` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    LowerCase,
    UpperCase,
    PascalCase,
    CamelCase,
    SnakeCase,
    ScreamingSnakeCase,
    KebabCase,
    ScreamingKebabCase,
}

impl RenameRule {
    /// Parse the rule name used in `#[serde(rename_all = "...")]`.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "lowercase" => RenameRule::LowerCase,
            "UPPERCASE" => RenameRule::UpperCase,
            "PascalCase" => RenameRule::PascalCase,
            "camelCase" => RenameRule::CamelCase,
            "snake_case" => RenameRule::SnakeCase,
            "SCREAMING_SNAKE_CASE" => RenameRule::ScreamingSnakeCase,
            "kebab-case" => RenameRule::KebabCase,
            "SCREAMING-KEBAB-CASE" => RenameRule::ScreamingKebabCase,
            _ => return None,
        })
    }

    /// Apply to a variant name, assumed to be PascalCase.
    pub fn apply_to_variant(self, variant: &str) -> String {
        match self {
            RenameRule::PascalCase => variant.to_string(),
            RenameRule::LowerCase => variant.to_ascii_lowercase(),
            RenameRule::UpperCase => variant.to_ascii_uppercase(),
            RenameRule::CamelCase => lowercase_first(variant),
            RenameRule::SnakeCase => {
                let mut snake = String::with_capacity(variant.len() + 4);
                for (i, ch) in variant.char_indices() {
                    if i > 0 && ch.is_uppercase() {
                        snake.push('_');
                    }
                    snake.push(ch.to_ascii_lowercase());
                }
                snake
            }
            RenameRule::ScreamingSnakeCase => RenameRule::SnakeCase.apply_to_variant(variant).to_ascii_uppercase(),
            RenameRule::KebabCase => RenameRule::SnakeCase.apply_to_variant(variant).replace('_', "-"),
            RenameRule::ScreamingKebabCase => {
                RenameRule::ScreamingSnakeCase.apply_to_variant(variant).replace('_', "-")
            }
        }
    }

    /// Apply to a field name, assumed to be snake_case.
    pub fn apply_to_field(self, field: &str) -> String {
        match self {
            RenameRule::LowerCase | RenameRule::SnakeCase => field.to_string(),
            RenameRule::UpperCase | RenameRule::ScreamingSnakeCase => field.to_ascii_uppercase(),
            RenameRule::PascalCase => {
                let mut pascal = String::with_capacity(field.len());
                let mut capitalize = true;
                for ch in field.chars() {
                    if ch == '_' {
                        capitalize = true;
                    } else if capitalize {
                        pascal.push(ch.to_ascii_uppercase());
                        capitalize = false;
                    } else {
                        pascal.push(ch);
                    }
                }
                pascal
            }
            RenameRule::CamelCase => lowercase_first(&RenameRule::PascalCase.apply_to_field(field)),
            RenameRule::KebabCase => field.replace('_', "-"),
            RenameRule::ScreamingKebabCase => field.to_ascii_uppercase().replace('_', "-"),
        }
    }
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Serde attributes on a struct or enum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerAttrs {
    pub tag: Option<String>,
    pub content: Option<String>,
    pub untagged: bool,
    pub transparent: bool,
    pub rename_all: Option<RenameRule>,
    pub rename_all_fields: Option<RenameRule>,
    /// Span of the first `#[serde]` attribute, for error reporting
    pub span: Option<Span>,
}

/// Serde attributes on a named or unnamed field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAttrs {
    pub rename: Option<String>,
    /// `skip` or `skip_serializing`: the field never appears in JSON output
    pub skip: bool,
    /// `skip_serializing_if`: the field may be absent
    pub optional: bool,
    pub flatten: bool,
}

/// Serde attributes on an enum variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantAttrs {
    pub rename: Option<String>,
    pub skip: bool,
    /// Applies to the fields of a struct variant
    pub rename_all: Option<RenameRule>,
}

/// Parse container-level serde attributes.
pub fn container_attrs(attrs: &[Attribute]) -> Result<ContainerAttrs, CompileError> {
    let mut out = ContainerAttrs::default();
    let mut rules: Vec<(RuleTarget, LitStr)> = Vec::new();

    for attr in serde_attrs(attrs) {
        out.span.get_or_insert_with(|| Span::from_proc_macro(attr.span()));
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("tag") {
                out.tag = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("content") {
                out.content = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("untagged") {
                out.untagged = true;
            } else if meta.path.is_ident("transparent") {
                out.transparent = true;
            } else if meta.path.is_ident("rename_all") {
                if let Some(lit) = serialize_side(&meta)? {
                    rules.push((RuleTarget::All, lit));
                }
            } else if meta.path.is_ident("rename_all_fields") {
                if let Some(lit) = serialize_side(&meta)? {
                    rules.push((RuleTarget::Fields, lit));
                }
            } else {
                skip_value(&meta)?;
            }
            Ok(())
        })
        .map_err(syn_error)?;
    }

    for (target, lit) in rules {
        let rule = parse_rule(&lit)?;
        match target {
            RuleTarget::All => out.rename_all = Some(rule),
            RuleTarget::Fields => out.rename_all_fields = Some(rule),
        }
    }
    Ok(out)
}

/// Parse field-level serde attributes.
pub fn field_attrs(attrs: &[Attribute]) -> Result<FieldAttrs, CompileError> {
    let mut out = FieldAttrs::default();

    for attr in serde_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if let Some(lit) = serialize_side(&meta)? {
                    out.rename = Some(lit.value());
                }
            } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
                out.skip = true;
            } else if meta.path.is_ident("skip_serializing_if") {
                out.optional = true;
                skip_value(&meta)?;
            } else if meta.path.is_ident("flatten") {
                out.flatten = true;
            } else {
                skip_value(&meta)?;
            }
            Ok(())
        })
        .map_err(syn_error)?;
    }
    Ok(out)
}

/// Parse variant-level serde attributes.
pub fn variant_attrs(attrs: &[Attribute]) -> Result<VariantAttrs, CompileError> {
    let mut out = VariantAttrs::default();
    let mut rule: Option<LitStr> = None;

    for attr in serde_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if let Some(lit) = serialize_side(&meta)? {
                    out.rename = Some(lit.value());
                }
            } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
                out.skip = true;
            } else if meta.path.is_ident("rename_all") {
                rule = serialize_side(&meta)?;
            } else {
                skip_value(&meta)?;
            }
            Ok(())
        })
        .map_err(syn_error)?;
    }

    if let Some(lit) = rule {
        out.rename_all = Some(parse_rule(&lit)?);
    }
    Ok(out)
}

/// Collect `///` and `/** */` documentation into a single string.
///
/// One leading space is stripped from every line; leading and trailing blank lines are dropped. Lines of a
/// multi-line `/** */` block also lose their leading ` * ` gutter.
pub fn docs(attrs: &[Attribute]) -> Option<String> {
    let mut lines = Vec::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident("doc")) {
        let syn::Meta::NameValue(nv) = &attr.meta else {
            continue;
        };
        let Expr::Lit(expr) = &nv.value else {
            continue;
        };
        let Lit::Str(s) = &expr.lit else {
            continue;
        };
        let value = s.value();
        let block = value.contains('\n');
        for line in value.split('\n') {
            let line = if block { strip_gutter(line) } else { line };
            lines.push(line.strip_prefix(' ').unwrap_or(line).trim_end().to_string());
        }
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let first = lines.iter().position(|l| !l.is_empty())?;
    Some(lines[first..].join("\n"))
}

/// `   * text` -> ` text`
fn strip_gutter(line: &str) -> &str {
    let trimmed = line.trim_start();
    match trimmed.strip_prefix('*') {
        Some(rest) => rest,
        None => line,
    }
}

/// Whether the item is compiled only for tests (`#[cfg(test)]`).
pub fn is_cfg_test(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|a| a.path().is_ident("cfg"))
        .any(|a| a.parse_args::<syn::Ident>().is_ok_and(|ident| ident == "test"))
}

enum RuleTarget {
    All,
    Fields,
}

fn serde_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|a| a.path().is_ident("serde"))
}

fn parse_rule(lit: &LitStr) -> Result<RenameRule, CompileError> {
    let name = lit.value();
    RenameRule::from_name(&name).ok_or_else(|| errors::unknown_rename_rule(&name, Span::from_proc_macro(lit.span())))
}

fn syn_error(e: syn::Error) -> CompileError {
    CompileError::attribute(e.to_string(), Span::from_proc_macro(e.span()))
}

/// Read `key = "value"` or the `serialize` half of `key(serialize = "a", deserialize = "b")`.
fn serialize_side(meta: &ParseNestedMeta) -> syn::Result<Option<LitStr>> {
    if meta.input.peek(Token![=]) {
        return Ok(Some(meta.value()?.parse()?));
    }

    let mut name = None;
    meta.parse_nested_meta(|inner| {
        if inner.path.is_ident("serialize") {
            name = Some(inner.value()?.parse()?);
        } else {
            skip_value(&inner)?;
        }
        Ok(())
    })?;
    Ok(name)
}

/// Consume whatever follows an attribute key we do not interpret.
fn skip_value(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|inner| skip_value(&inner))?;
    }
    Ok(())
}
