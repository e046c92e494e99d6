//! Error types for Rust item to IR lowering.
//!
//! Lowering keeps going after a failing item so that one run reports every problem in a file. The collected
//! diagnostics are returned as a [`LoweringErrors`].

use thiserror::Error;

use crate::frontend::diagnostics::CompileError;

/// Collection of lowering errors, in source order.
///
/// # Examples
///
/// ```rust,ignore
/// use typester::backend::lower::lower_file;
///
/// match lower_file(&file, &config) {
///     Ok(decls) => { /* emit */ }
///     Err(errors) => {
///         for err in errors.iter() {
///             eprintln!("{}", err);
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", summarize(.0))]
pub struct LoweringErrors(pub Vec<CompileError>);

impl LoweringErrors {
    /// Create from a vector of errors.
    ///
    /// Returns `None` if the vector is empty.
    pub fn from_vec(errors: Vec<CompileError>) -> Option<Self> {
        if errors.is_empty() { None } else { Some(Self(errors)) }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompileError> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&CompileError> {
        self.0.first()
    }
}

/// One error prints as itself; several print as a numbered list, one per line.
fn summarize(errors: &[CompileError]) -> String {
    match errors {
        [only] => only.to_string(),
        _ => {
            let mut out = format!("{} lowering errors:", errors.len());
            for (i, err) in errors.iter().enumerate() {
                out.push_str(&format!("\n  {}: {}", i + 1, err));
            }
            out
        }
    }
}
