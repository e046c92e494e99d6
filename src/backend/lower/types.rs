//! Type lowering: `syn::Type` to [`TsType`].
//!
//! Types are resolved the way serde serializes them to JSON:
//! - numeric primitives become `number`, `str`/`String`/`char` become `string`
//! - smart pointers and references are transparent
//! - ordered/indexed collections collapse onto the prelude names (`HashMap`, `HashSet`, `Vec`)
//! - fixed-size arrays become tuples

use quote::ToTokens;
use syn::spanned::Spanned;
use syn::{Expr, GenericArgument, Lit, PathArguments, Type};

use crate::backend::ir::TsType;
use crate::frontend::diagnostics::{CompileError, Span, errors};

/// Arrays longer than this lower to `Vec<T>` instead of a tuple.
pub const MAX_ARRAY_TUPLE: usize = 32;

/// Lower a Rust type.
pub fn lower_type(ty: &Type) -> Result<TsType, CompileError> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => lower_path(&type_path.path, ty),
        Type::Reference(r) => lower_type(&r.elem),
        Type::Paren(p) => lower_type(&p.elem),
        Type::Group(g) => lower_type(&g.elem),
        Type::Tuple(t) if t.elems.is_empty() => Ok(TsType::Null),
        Type::Tuple(t) => Ok(TsType::Tuple(t.elems.iter().map(lower_type).collect::<Result<_, _>>()?)),
        Type::Array(a) => {
            let elem = lower_type(&a.elem)?;
            let len = array_len(&a.len).ok_or_else(|| errors::array_length(span_of(&a.len)))?;
            if len > MAX_ARRAY_TUPLE {
                Ok(TsType::reference("Vec", vec![elem]))
            } else {
                Ok(TsType::Tuple(vec![elem; len]))
            }
        }
        Type::Slice(s) => Ok(TsType::reference("Vec", vec![lower_type(&s.elem)?])),
        Type::Never(_) => Ok(TsType::Never),
        other => Err(unsupported(other)),
    }
}

fn lower_path(path: &syn::Path, ty: &Type) -> Result<TsType, CompileError> {
    let Some(segment) = path.segments.last() else {
        return Err(unsupported(ty));
    };
    let name = segment.ident.to_string();
    let mut args = lower_generic_args(&segment.arguments, ty)?;

    if args.is_empty() {
        if let Some(primitive) = TsType::primitive(&name) {
            return Ok(primitive);
        }
    }

    let ts = match name.as_str() {
        // Serialized as their contents; `Cow<'a, T>` keeps only the type argument
        "Box" | "Rc" | "Arc" | "Cow" => return args.pop().ok_or_else(|| unsupported(ty)),
        "BTreeMap" | "IndexMap" => TsType::reference("HashMap", args),
        "BTreeSet" | "IndexSet" => TsType::reference("HashSet", args),
        "VecDeque" | "LinkedList" | "BinaryHeap" => TsType::reference("Vec", args),
        _ => TsType::reference(name, args),
    };
    Ok(ts)
}

fn lower_generic_args(arguments: &PathArguments, ty: &Type) -> Result<Vec<TsType>, CompileError> {
    match arguments {
        PathArguments::None => Ok(Vec::new()),
        PathArguments::AngleBracketed(angle) => {
            let mut args = Vec::with_capacity(angle.args.len());
            for arg in &angle.args {
                match arg {
                    GenericArgument::Type(inner) => args.push(lower_type(inner)?),
                    GenericArgument::Lifetime(_) => {}
                    _ => return Err(unsupported(ty)),
                }
            }
            Ok(args)
        }
        // `Fn(A) -> B` style sugar
        PathArguments::Parenthesized(_) => Err(unsupported(ty)),
    }
}

fn array_len(len: &Expr) -> Option<usize> {
    match len {
        Expr::Lit(expr) => match &expr.lit {
            Lit::Int(int) => int.base10_parse().ok(),
            _ => None,
        },
        Expr::Group(group) => array_len(&group.expr),
        Expr::Paren(paren) => array_len(&paren.expr),
        _ => None,
    }
}

fn unsupported(ty: &Type) -> CompileError {
    errors::unsupported_type(&ty.to_token_stream().to_string(), span_of(ty))
}

pub(super) fn span_of<T: Spanned>(node: &T) -> Span {
    Span::from_proc_macro(node.span())
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn lower(ty: Type) -> TsType {
        lower_type(&ty).unwrap()
    }

    #[test]
    fn test_primitives() {
        assert_eq!(lower(parse_quote!(i32)), TsType::Number);
        assert_eq!(lower(parse_quote!(u128)), TsType::Number);
        assert_eq!(lower(parse_quote!(f64)), TsType::Number);
        assert_eq!(lower(parse_quote!(String)), TsType::String);
        assert_eq!(lower(parse_quote!(&'static str)), TsType::String);
        assert_eq!(lower(parse_quote!(char)), TsType::String);
        assert_eq!(lower(parse_quote!(bool)), TsType::Boolean);
        assert_eq!(lower(parse_quote!(())), TsType::Null);
        assert_eq!(lower(parse_quote!(!)), TsType::Never);
    }

    #[test]
    fn test_qualified_path_uses_last_segment() {
        assert_eq!(lower(parse_quote!(std::string::String)), TsType::String);
        assert_eq!(
            lower(parse_quote!(std::collections::HashMap<String, Colour>)),
            TsType::reference("HashMap", vec![TsType::String, TsType::named("Colour")])
        );
    }

    #[test]
    fn test_containers() {
        assert_eq!(
            lower(parse_quote!(Vec<String>)),
            TsType::reference("Vec", vec![TsType::String])
        );
        assert_eq!(
            lower(parse_quote!(Option<Person>)),
            TsType::reference("Option", vec![TsType::named("Person")])
        );
        assert_eq!(
            lower(parse_quote!(Result<u8, String>)),
            TsType::reference("Result", vec![TsType::Number, TsType::String])
        );
    }

    #[test]
    fn test_collection_aliases() {
        assert_eq!(
            lower(parse_quote!(BTreeMap<String, u8>)),
            TsType::reference("HashMap", vec![TsType::String, TsType::Number])
        );
        assert_eq!(
            lower(parse_quote!(BTreeSet<u8>)),
            TsType::reference("HashSet", vec![TsType::Number])
        );
        assert_eq!(
            lower(parse_quote!(VecDeque<u8>)),
            TsType::reference("Vec", vec![TsType::Number])
        );
        assert_eq!(lower(parse_quote!([u8])), TsType::reference("Vec", vec![TsType::Number]));
    }

    #[test]
    fn test_transparent_wrappers() {
        assert_eq!(lower(parse_quote!(Box<Person>)), TsType::named("Person"));
        assert_eq!(lower(parse_quote!(Arc<str>)), TsType::String);
        assert_eq!(lower(parse_quote!(Cow<'a, str>)), TsType::String);
        assert_eq!(lower(parse_quote!(&mut (u8))), TsType::Number);
    }

    #[test]
    fn test_tuples_and_arrays() {
        assert_eq!(
            lower(parse_quote!((i32, String))),
            TsType::Tuple(vec![TsType::Number, TsType::String])
        );
        assert_eq!(
            lower(parse_quote!([f64; 3])),
            TsType::Tuple(vec![TsType::Number, TsType::Number, TsType::Number])
        );
        assert_eq!(lower(parse_quote!([u8; 64])), TsType::reference("Vec", vec![TsType::Number]));
    }

    #[test]
    fn test_generic_parameter_is_reference() {
        assert_eq!(lower(parse_quote!(T)), TsType::named("T"));
    }

    #[test]
    fn test_unsupported_types() {
        let fn_ptr: Type = parse_quote!(fn(u8) -> u8);
        let err = lower_type(&fn_ptr).unwrap_err();
        assert!(err.message.starts_with("unsupported type `fn"), "{}", err.message);

        let dyn_trait: Type = parse_quote!(Box<dyn Fn()>);
        assert!(lower_type(&dyn_trait).is_err());

        let qself: Type = parse_quote!(<T as Trait>::Output);
        assert!(lower_type(&qself).is_err());

        let inferred: Type = parse_quote!(_);
        assert!(lower_type(&inferred).is_err());
    }

    #[test]
    fn test_array_length_must_be_literal() {
        let ty: Type = parse_quote!([u8; N]);
        let err = lower_type(&ty).unwrap_err();
        assert_eq!(err.message, "array length must be an integer literal");
    }

    #[test]
    fn test_long_arrays_become_vec() {
        let at_cap = lower(parse_quote!([f64; 32]));
        assert_eq!(at_cap, TsType::Tuple(vec![TsType::Number; MAX_ARRAY_TUPLE]));

        let over_cap = lower(parse_quote!([f64; 33]));
        assert_eq!(over_cap.to_string(), "Vec<number>");
    }
}
