//! Code generation configuration for typester

/// Tag field of the default enum representation
pub const DEFAULT_TAG: &str = "t";
/// Content field of the default enum representation
pub const DEFAULT_CONTENT: &str = "c";

/// How an enum is laid out in JSON, following serde's enum representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumRepr {
    /// `{ "Variant": payload }` (serde's default)
    External,
    /// `{ "<tag>": "Variant", ...fields }`
    Internal { tag: String },
    /// `{ "<tag>": "Variant", "<content>": payload }`
    Adjacent { tag: String, content: String },
    /// The payload alone
    Untagged,
}

impl EnumRepr {
    pub fn adjacent(tag: impl Into<String>, content: impl Into<String>) -> Self {
        EnumRepr::Adjacent {
            tag: tag.into(),
            content: content.into(),
        }
    }
}

impl Default for EnumRepr {
    fn default() -> Self {
        EnumRepr::adjacent(DEFAULT_TAG, DEFAULT_CONTENT)
    }
}

/// Code generation configuration
#[derive(Debug, Clone)]
pub struct CodegenConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Emit the "generated file" header comment
    pub header: bool,
    /// Emit TypeScript aliases for Rust container names (`Vec`, `HashMap`, ...)
    pub prelude: bool,
    /// Emit doc comments as JSDoc
    pub docs: bool,
    /// Convert only `pub` items
    pub public_only: bool,
    /// Representation for enums with no `tag`/`content`/`untagged` attribute
    pub default_enum_repr: EnumRepr,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            header: true,
            prelude: true,
            docs: true,
            public_only: false,
            default_enum_repr: EnumRepr::default(),
        }
    }
}

impl CodegenConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn with_prelude(mut self, prelude: bool) -> Self {
        self.prelude = prelude;
        self
    }

    pub fn with_docs(mut self, docs: bool) -> Self {
        self.docs = docs;
        self
    }

    pub fn with_public_only(mut self, public_only: bool) -> Self {
        self.public_only = public_only;
        self
    }

    /// Set the representation used for enums without serde tagging attributes
    pub fn with_default_enum_repr(mut self, repr: EnumRepr) -> Self {
        self.default_enum_repr = repr;
        self
    }

    /// Bare declarations only: no header, prelude or docs.
    pub fn bare() -> Self {
        Self::default().with_header(false).with_prelude(false).with_docs(false)
    }
}
