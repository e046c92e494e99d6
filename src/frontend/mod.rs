//! typester frontend
//!
//! This module turns Rust source text into something the backend can lower:
//! - `parse_source`: parse a whole file with `syn`
//! - `attrs`: read `#[serde(...)]` and doc attributes off items, fields and variants
//! - `diagnostics`: error reporting with source spans

pub mod attrs;
pub mod diagnostics;

use diagnostics::{CompileError, Span};

/// Parse a Rust source file.
///
/// ## Errors
///
/// Returns a `Syntax` error located at the first token `syn` rejected.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_source(source: &str) -> Result<syn::File, CompileError> {
    syn::parse_file(source).map_err(|e| CompileError::syntax(e.to_string(), Span::from_proc_macro(e.span())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::diagnostics::{ErrorKind, Position};

    #[test]
    fn test_parse_source_items() {
        let file = parse_source("type A = u8;\nstruct B;\nenum C {}\n").unwrap();
        assert_eq!(file.items.len(), 3);
    }

    #[test]
    fn test_parse_source_empty() {
        let file = parse_source("").unwrap();
        assert!(file.items.is_empty());
    }

    #[test]
    fn test_parse_source_syntax_error_location() {
        let err = parse_source("type A = u8;\nstruct B {\n    x: u8\n    y: u8,\n}\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.span.start.line, 4);
        assert_eq!(err.span.start, Position { line: 4, column: 4 });
    }
}
