//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::IsTerminal;
use std::path::Path;

use crate::backend::ir::TsDecl;
use crate::backend::{CodegenConfig, GenerationError, TsCodegen};
use crate::frontend::diagnostics;

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path.display(), e)))
}

/// Render every diagnostic of a failed generation against the source.
fn render_errors(file_path: &Path, source: &str, err: &GenerationError) -> CliError {
    let errors: Vec<_> = err.diagnostics().into_iter().cloned().collect();
    let colored = std::io::stderr().is_terminal();
    let msg = diagnostics::format_errors(&file_path.display().to_string(), source, &errors, colored);
    CliError::failure(msg.trim_end())
}

/// Read and convert `input`, rendering any errors.
fn convert(input: &Path, config: &CodegenConfig) -> CliResult<String> {
    let source = read_source(input)?;
    TsCodegen::with_config(config.clone())
        .try_generate(&source)
        .map_err(|e| render_errors(input, &source, &e))
}

/// Read and lower `input` without emitting, rendering any errors.
fn lower(input: &Path, config: &CodegenConfig) -> CliResult<Vec<TsDecl>> {
    let source = read_source(input)?;
    TsCodegen::with_config(config.clone())
        .lower_source(&source)
        .map_err(|e| render_errors(input, &source, &e))
}

/// Convert a Rust file and write the TypeScript to `output` (stdout when `None`).
#[tracing::instrument(skip(config))]
pub fn generate_file(input: &Path, output: Option<&Path>, config: &CodegenConfig) -> CliResult<ExitCode> {
    let ts = convert(input, config)?;

    let Some(output) = output else {
        print!("{}", ts);
        return Ok(ExitCode::SUCCESS);
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            CliError::failure(format!("Error creating directory '{}': {}", parent.display(), e))
        })?;
    }
    fs::write(output, ts)
        .map_err(|e| CliError::failure(format!("Error writing file '{}': {}", output.display(), e)))?;

    println!("✓ Wrote {}", output.display());
    Ok(ExitCode::SUCCESS)
}

/// Verify that `output` holds exactly what `input` generates. Writes nothing.
#[tracing::instrument(skip(config))]
pub fn check_output(input: &Path, output: &Path, config: &CodegenConfig) -> CliResult<ExitCode> {
    let expected = convert(input, config)?;

    let up_to_date = match fs::read_to_string(output) {
        Ok(existing) => existing == expected,
        Err(e) => {
            tracing::debug!(error = %e, "output not readable, treating as out of date");
            false
        }
    };

    if up_to_date {
        println!("✓ {} is up to date", output.display());
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(format!(
            "{} is out of date. Run `typester generate {} -o {}` to update it.",
            output.display(),
            input.display(),
            output.display()
        )))
    }
}

/// Report whether every declaration in `input` converts.
#[tracing::instrument(skip(config))]
pub fn check_file(input: &Path, config: &CodegenConfig) -> CliResult<ExitCode> {
    let decls = lower(input, config)?;
    let noun = if decls.len() == 1 { "declaration" } else { "declarations" };
    println!("✓ {} {} convert cleanly", decls.len(), noun);
    Ok(ExitCode::SUCCESS)
}

/// Dump the lowered declarations as pretty JSON (debug).
pub fn dump_ir(input: &Path, config: &CodegenConfig) -> CliResult<ExitCode> {
    let decls = lower(input, config)?;
    let json = serde_json::to_string_pretty(&decls)
        .map_err(|e| CliError::failure(format!("Error serializing IR: {}", e)))?;
    println!("{}", json);
    Ok(ExitCode::SUCCESS)
}
