//! Validation of user colour files.
//!
//! Runs a suite of checks against a colour file and reports errors and
//! warnings. Used by `tint validate`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::config::ColourFile;

/// Run all validation checks against a colour file.
pub fn validate_colour_file(file: &ColourFile) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_hex_lengths(file));
    result.merge(checks::check_hex_digits(file));
    result.merge(checks::check_shadowed_builtins(file));

    result
}
