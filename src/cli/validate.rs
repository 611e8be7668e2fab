//! Validate command implementation.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::{ColourFile, DEFAULT_FILE};
use crate::error::{Result, TintError};
use crate::output::{plural, Printer};
use crate::validation::{validate_colour_file, ValidationResult};

/// Validate a colour file
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Colour file to validate (default: --colours, then ./tint.yaml)
    pub file: Option<PathBuf>,
}

pub fn run(args: ValidateArgs, colours: Option<&PathBuf>, printer: &Printer) -> Result<()> {
    let path = args
        .file
        .or_else(|| colours.cloned())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE));

    let file = ColourFile::load(&path)?;
    let result = validate_colour_file(&file);
    print_diagnostics(&path, &result, printer);

    if result.has_errors() {
        return Err(TintError::Validation {
            message: format!(
                "{} has {}",
                path.display(),
                plural(result.error_count(), "error", "errors")
            ),
            help: Some("Hex values need 3, 4, 5, 6 or 8 digits after '#'".to_string()),
        });
    }
    Ok(())
}

fn print_diagnostics(path: &Path, result: &ValidationResult, printer: &Printer) {
    for d in result.sorted() {
        let label = printer.severity(&d.severity.to_string(), d.is_error());
        match &d.colour {
            Some(name) => eprintln!("  {label}[{}] {name}: {}", d.code, d.message),
            None => eprintln!("  {label}[{}]: {}", d.code, d.message),
        }
        if let Some(help) = &d.help {
            eprintln!("    {} {help}", printer.dim("help:"));
        }
    }

    let warnings = plural(result.warning_count(), "warning", "warnings");
    if result.has_errors() {
        printer.error(
            "Failed",
            &format!(
                "{}: {}, {warnings}",
                path.display(),
                plural(result.error_count(), "error", "errors")
            ),
        );
    } else if result.has_warnings() {
        printer.warning("Passed", &format!("{} ({warnings})", path.display()));
    } else {
        printer.status("Passed", &path.display().to_string());
    }
}
