//! CLI module for typester
//!
//! This module provides the command-line interface for the generator.
//!
//! ## Commands
//!
//! - `-i <file> [-o <file>]` - Convert a Rust file (stdout when `-o` is omitted)
//! - `generate <file> [-o <file>] [--check]` - Same, with a check mode for CI
//! - `check <file>` - Report whether every declaration converts
//! - `--ir <file>` - Dump the lowered IR as JSON (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::backend::config::{DEFAULT_CONTENT, DEFAULT_TAG};
use crate::backend::{CodegenConfig, EnumRepr};
use crate::version::TYPESTER_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate TypeScript declarations from Rust types
#[derive(Parser, Debug)]
#[command(name = "typester")]
#[command(version = TYPESTER_VERSION)]
#[command(about = "Generate TypeScript declarations from Rust types", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Rust source file to convert
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// TypeScript file to write (default: stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE", requires = "input")]
    pub output: Option<PathBuf>,

    /// Dump the lowered declarations as JSON (debug)
    #[arg(long = "ir", value_name = "FILE", conflicts_with = "input")]
    pub ir_file: Option<PathBuf>,

    #[command(flatten)]
    pub emit: EmitArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a Rust file to TypeScript declarations
    Generate {
        /// Rust source file
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// TypeScript file to write (default: stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
        /// Fail if OUTPUT is not up to date instead of writing it
        #[arg(long, requires = "output")]
        check: bool,
    },

    /// Check that every declaration in a Rust file converts
    Check {
        /// Rust source file
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

/// Output options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct EmitArgs {
    /// Omit the "generated file" header comment
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Omit the `Vec`/`HashMap`/`Option`/... aliases
    #[arg(long, global = true)]
    pub no_prelude: bool,

    /// Do not turn doc comments into JSDoc
    #[arg(long, global = true)]
    pub no_docs: bool,

    /// Only convert `pub` items
    #[arg(long, global = true)]
    pub public_only: bool,

    /// Spaces per indentation level
    #[arg(long, global = true, value_name = "N", default_value_t = 2)]
    pub indent: usize,

    /// Tag field for enums without a serde representation attribute
    #[arg(long, global = true, value_name = "NAME", conflicts_with = "externally_tagged")]
    pub tag: Option<String>,

    /// Content field for enums without a serde representation attribute
    #[arg(long, global = true, value_name = "NAME", conflicts_with = "externally_tagged")]
    pub content: Option<String>,

    /// Treat enums without a serde representation attribute as externally tagged
    #[arg(long, global = true)]
    pub externally_tagged: bool,
}

impl EmitArgs {
    /// Build the generator configuration these flags describe.
    pub fn to_config(&self) -> CodegenConfig {
        let repr = if self.externally_tagged {
            EnumRepr::External
        } else {
            EnumRepr::adjacent(
                self.tag.as_deref().unwrap_or(DEFAULT_TAG),
                self.content.as_deref().unwrap_or(DEFAULT_CONTENT),
            )
        };

        CodegenConfig::new()
            .with_header(!self.no_header)
            .with_prelude(!self.no_prelude)
            .with_docs(!self.no_docs)
            .with_public_only(self.public_only)
            .with_indent_width(self.indent)
            .with_default_enum_repr(repr)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.emit.to_config();

    // Handle debug flags first
    if let Some(file) = cli.ir_file {
        return commands::dump_ir(&file, &config);
    }

    match cli.command {
        Some(Command::Generate { input, output, check }) => match (output, check) {
            (Some(output), true) => commands::check_output(&input, &output, &config),
            (output, _) => commands::generate_file(&input, output.as_deref(), &config),
        },
        Some(Command::Check { input }) => commands::check_file(&input, &config),
        None => {
            if let Some(input) = cli.input {
                commands::generate_file(&input, cli.output.as_deref(), &config)
            } else {
                Err(CliError::failure(
                    "Error: no input file (try `typester -i <FILE>` or `typester --help`)",
                ))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
