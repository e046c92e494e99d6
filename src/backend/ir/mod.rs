//! TypeScript intermediate representation
//!
//! Lowering produces these nodes from `syn` items; emission renders them as text. Keeping the two apart lets the CLI
//! dump the IR (`--ir`) and lets tests assert on structure instead of strings.

pub mod decl;
pub mod types;

pub use decl::{TsDecl, TsDeclKind};
pub use types::{TsField, TsType, is_identifier, property_name, string_literal};
