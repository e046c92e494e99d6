//! Diagnostics and error reporting for typester
//!
//! Errors carry line/column spans taken from `proc-macro2` (1-based lines, 0-based character columns). Rendering goes
//! through `miette`, which needs byte offsets, so spans are converted against the original source text at report time.

use std::fmt;

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, NamedSource, SourceSpan};
use thiserror::Error;

/// A line/column position in Rust source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord)]
pub struct Position {
    /// 1-based line number (0 when unknown)
    pub line: usize,
    /// 0-based column, counted in characters
    pub column: usize,
}

/// Source region of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Capture the location of a token span produced by `syn`.
    pub fn from_proc_macro(span: proc_macro2::Span) -> Self {
        let start = span.start();
        let end = span.end();
        Self {
            start: Position {
                line: start.line,
                column: start.column,
            },
            end: Position {
                line: end.line,
                column: end.column,
            },
        }
    }

    /// Byte range of this span inside `source`, as `(offset, length)`.
    pub fn byte_range(&self, source: &str) -> (usize, usize) {
        let start = byte_offset(source, self.start);
        let end = byte_offset(source, self.end).max(start);
        (start, end - start)
    }
}

/// Convert a line/column position to a byte offset, clamping to the source length.
fn byte_offset(source: &str, pos: Position) -> usize {
    let mut line_start = 0;
    for _ in 1..pos.line {
        match source[line_start..].find('\n') {
            Some(i) => line_start += i + 1,
            None => return source.len(),
        }
    }

    let rest = &source[line_start..];
    let line_end = rest.find('\n').unwrap_or(rest.len());
    rest[..line_end]
        .char_indices()
        .nth(pos.column)
        .map(|(i, _)| line_start + i)
        .unwrap_or(line_start + line_end)
}

/// A conversion error with location information
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(message: impl Into<String>, span: Span, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self::new(message, span, ErrorKind::Syntax)
    }

    pub fn unsupported(message: impl Into<String>, span: Span) -> Self {
        Self::new(message, span, ErrorKind::Unsupported)
    }

    pub fn attribute(message: impl Into<String>, span: Span) -> Self {
        Self::new(message, span, ErrorKind::Attribute)
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Attach source text so the error can be rendered by `miette`.
    pub fn to_diagnostic(&self, file_name: &str, source: &str) -> SourceDiagnostic {
        let help = self
            .notes
            .iter()
            .map(|n| format!("note: {n}"))
            .chain(self.hints.iter().map(|h| format!("hint: {h}")))
            .collect::<Vec<_>>();

        SourceDiagnostic {
            kind: self.kind,
            message: self.message.clone(),
            src: NamedSource::new(file_name, source.to_string()),
            span: self.span.byte_range(source).into(),
            help: if help.is_empty() { None } else { Some(help.join("\n")) },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is not valid Rust
    Syntax,
    /// A Rust construct with no TypeScript counterpart
    Unsupported,
    /// A malformed or contradictory `#[serde(...)]` attribute
    Attribute,
    /// Conflicting declarations
    Declaration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Unsupported => write!(f, "unsupported"),
            ErrorKind::Attribute => write!(f, "attribute error"),
            ErrorKind::Declaration => write!(f, "declaration error"),
        }
    }
}

/// A [`CompileError`] bundled with its source, ready for `miette` rendering.
#[derive(Debug, Error, Diagnostic)]
#[error("{kind}: {message}")]
#[diagnostic(code(typester::convert))]
pub struct SourceDiagnostic {
    kind: ErrorKind,
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("here")]
    span: SourceSpan,
    #[help]
    help: Option<String>,
}

/// Render an error with source context, without colors.
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    render(file_name, source, error, GraphicalTheme::unicode_nocolor())
}

/// Render a list of errors, one block per error.
pub fn format_errors(file_name: &str, source: &str, errors: &[CompileError], colored: bool) -> String {
    let mut out = String::new();
    for error in errors {
        let theme = if colored {
            GraphicalTheme::unicode()
        } else {
            GraphicalTheme::unicode_nocolor()
        };
        out.push_str(&render(file_name, source, error, theme));
        out.push('\n');
    }
    out
}

fn render(file_name: &str, source: &str, error: &CompileError, theme: GraphicalTheme) -> String {
    let diagnostic = error.to_diagnostic(file_name, source);
    let handler = GraphicalReportHandler::new_themed(theme);
    let mut out = String::new();
    match handler.render_report(&mut out, &diagnostic) {
        Ok(()) => out,
        // Fall back to the one-line form if the report cannot be laid out
        Err(_) => format!("{}:{}:{}: {}\n", file_name, error.span.start.line, error.span.start.column + 1, error),
    }
}

// ============================================================================
// Error catalog
// ============================================================================

/// Constructors for the errors the lowering pass reports
pub mod errors {
    use super::*;

    pub fn unsupported_type(rendered: &str, span: Span) -> CompileError {
        CompileError::unsupported(format!("unsupported type `{rendered}`"), span)
            .with_hint("only plain paths, references, tuples, arrays and slices have TypeScript equivalents")
    }

    pub fn duplicate_declaration(name: &str, span: Span, first: Span) -> CompileError {
        CompileError::new(format!("duplicate declaration `{name}`"), span, ErrorKind::Declaration)
            .with_note(format!("`{name}` was first declared on line {}", first.start.line))
            .with_hint("rename one of the types or move it into a separate file")
    }

    pub fn internally_tagged_tuple(enum_name: &str, variant: &str, span: Span) -> CompileError {
        CompileError::unsupported(
            format!("internally tagged enum `{enum_name}` cannot contain tuple variant `{variant}`"),
            span,
        )
        .with_hint("use an adjacently tagged representation: #[serde(tag = \"...\", content = \"...\")]")
    }

    pub fn array_length(span: Span) -> CompileError {
        CompileError::unsupported("array length must be an integer literal", span)
    }

    pub fn const_generic(name: &str, span: Span) -> CompileError {
        CompileError::unsupported(format!("const generic parameter `{name}` has no TypeScript equivalent"), span)
    }

    pub fn unknown_rename_rule(rule: &str, span: Span) -> CompileError {
        CompileError::attribute(format!("unknown rename rule `{rule}`"), span).with_hint(
            "expected one of: lowercase, UPPERCASE, PascalCase, camelCase, snake_case, SCREAMING_SNAKE_CASE, \
             kebab-case, SCREAMING-KEBAB-CASE",
        )
    }
}
