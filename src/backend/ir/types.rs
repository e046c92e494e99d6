//! IR type definitions
//!
//! These types represent TypeScript types after Rust types have been resolved through serde's JSON data model.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// IR type representation
///
/// `Display` renders the TypeScript syntax for the type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TsType {
    // Primitives
    Number,
    String,
    Boolean,
    Null,
    Never,
    #[default]
    Unknown,

    /// A string literal type such as `"Red"` (enum tags)
    StringLiteral(String),

    /// Fixed-arity tuple `[A, B]`
    Tuple(Vec<TsType>),

    /// Named type with optional type arguments, e.g. `HashMap<string, Colour>` or a type parameter `T`
    Reference { name: String, args: Vec<TsType> },

    /// Inline object type `{ a: A; b?: B }`
    Object(Vec<TsField>),

    /// `A & B`
    Intersection(Vec<TsType>),
}

impl TsType {
    /// A named reference without type arguments.
    pub fn named(name: impl Into<String>) -> Self {
        TsType::Reference {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// A named reference with type arguments.
    pub fn reference(name: impl Into<String>, args: Vec<TsType>) -> Self {
        TsType::Reference {
            name: name.into(),
            args,
        }
    }

    /// Map a Rust primitive type name to its JSON-compatible TypeScript type.
    pub fn primitive(rust_name: &str) -> Option<Self> {
        match rust_name {
            "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64" | "u128" | "usize"
            | "f32" | "f64" => Some(TsType::Number),
            "str" | "String" | "char" => Some(TsType::String),
            "bool" => Some(TsType::Boolean),
            _ => None,
        }
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TsType::Number => write!(f, "number"),
            TsType::String => write!(f, "string"),
            TsType::Boolean => write!(f, "boolean"),
            TsType::Null => write!(f, "null"),
            TsType::Never => write!(f, "never"),
            TsType::Unknown => write!(f, "unknown"),
            TsType::StringLiteral(s) => write!(f, "{}", string_literal(s)),
            TsType::Tuple(elems) => {
                write!(f, "[")?;
                write_joined(f, elems, ", ")?;
                write!(f, "]")
            }
            TsType::Reference { name, args } => {
                write!(f, "{name}")?;
                if !args.is_empty() {
                    write!(f, "<")?;
                    write_joined(f, args, ", ")?;
                    write!(f, ">")?;
                }
                Ok(())
            }
            TsType::Object(fields) if fields.is_empty() => write!(f, "{{}}"),
            TsType::Object(fields) => {
                write!(f, "{{ ")?;
                write_joined(f, fields, "; ")?;
                write!(f, " }}")
            }
            TsType::Intersection(parts) => write_joined(f, parts, " & "),
        }
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "{sep}")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// A property of an interface or inline object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TsField {
    /// Serialized name (after serde renames)
    pub name: String,
    pub ty: TsType,
    /// Rendered as `name?: T`
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

impl TsField {
    pub fn new(name: impl Into<String>, ty: TsType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            docs: None,
        }
    }
}

impl fmt::Display for TsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.optional { "?" } else { "" };
        write!(f, "{}{}: {}", property_name(&self.name), marker, self.ty)
    }
}

/// Render a property key, quoting it when it is not a valid identifier.
pub fn property_name(name: &str) -> Cow<'_, str> {
    if is_identifier(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(string_literal(name))
    }
}

/// Whether `name` can be written unquoted as a TypeScript property key.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Quote a string using JSON escaping, which is also valid TypeScript.
pub fn string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s.escape_default()))
}
