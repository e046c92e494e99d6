//! TypeScript code generation facade
//!
//! `TsCodegen` wires the pipeline together:
//!
//! ```text
//! source → parse_source (syn) → lower_file → Vec<TsDecl> → TsEmitter → TypeScript
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use typester::backend::TsCodegen;
//!
//! let ts = TsCodegen::new().try_generate("type NumberAlias = i32;").unwrap();
//! assert!(ts.ends_with("export type NumberAlias = number;\n"));
//! ```
//!
//! ## Error Handling
//!
//! `try_generate` and `lower_source` return `Result<_, GenerationError>`. `generate` is a convenience wrapper that
//! returns an error comment on failure (useful for debugging, not for writing files).

use thiserror::Error;

use super::config::CodegenConfig;
use super::emit::TsEmitter;
use super::ir::TsDecl;
use super::lower::{self, LoweringErrors};
use crate::frontend::diagnostics::CompileError;
use crate::frontend::parse_source;

/// Error during TypeScript generation.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The input is not valid Rust
    #[error("{0}")]
    Parse(#[from] CompileError),
    /// One or more items could not be converted
    #[error("{0}")]
    Lowering(#[from] LoweringErrors),
}

impl GenerationError {
    /// Every underlying error, in source order.
    pub fn diagnostics(&self) -> Vec<&CompileError> {
        match self {
            GenerationError::Parse(err) => vec![err],
            GenerationError::Lowering(errs) => errs.iter().collect(),
        }
    }
}

/// Rust → TypeScript generator
#[derive(Debug, Clone, Default)]
pub struct TsCodegen {
    config: CodegenConfig,
}

impl TsCodegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodegenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Parse and lower `source` without emitting.
    ///
    /// ## Errors
    ///
    /// `GenerationError::Parse` for a syntax error, `GenerationError::Lowering` with every conversion error otherwise.
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn lower_source(&self, source: &str) -> Result<Vec<TsDecl>, GenerationError> {
        let file = parse_source(source)?;
        Ok(lower::lower_file(&file, &self.config)?)
    }

    /// Generate the TypeScript declaration file for `source`.
    ///
    /// ## Errors
    ///
    /// See [`lower_source`](Self::lower_source); emission itself cannot fail.
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn try_generate(&self, source: &str) -> Result<String, GenerationError> {
        let decls = self.lower_source(source)?;
        Ok(TsEmitter::new(&self.config).emit(&decls))
    }

    /// Like [`try_generate`](Self::try_generate), but renders errors as a comment.
    pub fn generate(&self, source: &str) -> String {
        match self.try_generate(source) {
            Ok(code) => code,
            Err(e) => {
                let mut out = String::new();
                for (i, line) in e.to_string().lines().enumerate() {
                    if i == 0 {
                        out.push_str("// Generation error: ");
                    } else {
                        out.push_str("// ");
                    }
                    out.push_str(line);
                    out.push('\n');
                }
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::diagnostics::ErrorKind;

    #[test]
    fn test_try_generate_bare() {
        let codegen = TsCodegen::with_config(CodegenConfig::bare());
        let out = codegen
            .try_generate("type NumberAlias = i32;\nstruct Person { name: String, age: u32 }\n")
            .unwrap();
        assert_eq!(
            out,
            "export type NumberAlias = number;\n\nexport interface Person {\n  name: string;\n  age: number;\n}\n"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = TsCodegen::new().try_generate("struct {").unwrap_err();
        assert!(matches!(err, GenerationError::Parse(_)));
        let diags = err.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, ErrorKind::Syntax);
    }

    #[test]
    fn test_lowering_errors_are_all_reported() {
        let err = TsCodegen::new()
            .lower_source("type A = fn();\ntype B = dyn Send;\n")
            .unwrap_err();
        assert!(matches!(err, GenerationError::Lowering(_)));
        assert_eq!(err.diagnostics().len(), 2);
    }

    #[test]
    fn test_generate_renders_error_comment() {
        let out = TsCodegen::new().generate("type A = fn();");
        assert!(out.starts_with("// Generation error: "), "{out}");
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_generate_comments_out_every_error_line() {
        let out = TsCodegen::new().generate("type A = fn();\ntype B = dyn Send;\n");
        assert!(out.lines().count() > 2, "{out}");
        for line in out.lines() {
            assert!(line.starts_with("//"), "uncommented line {line:?} in {out}");
        }
        assert!(out.starts_with("// Generation error: 2 lowering errors:\n"), "{out}");
    }

    #[test]
    fn test_empty_source_bare_is_empty() {
        assert_eq!(TsCodegen::with_config(CodegenConfig::bare()).generate(""), "");
    }
}
