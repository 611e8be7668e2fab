//! Validation checks for colour files.
//!
//! Each check takes a `&ColourFile` and returns a `ValidationResult`.

use crate::codec::try_hex_to_rgb;
use crate::config::{ColourFile, QUOTE_HEX_HELP};
use crate::registry::ColourTable;
use crate::types::Colour;

use super::warning::{Diagnostic, ValidationResult};

/// Check for values `Colour::from_hex` rejects outright.
pub fn check_hex_lengths(file: &ColourFile) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (name, hex) in &file.colours {
        if Colour::from_hex(hex).is_err() {
            let help = if hex.trim().is_empty() {
                QUOTE_HEX_HELP
            } else {
                "Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format"
            };
            result.push(
                Diagnostic::error(
                    "tint::validate::invalid-length",
                    format!("Colour '{}' has an unusable value '{}'", name, hex),
                )
                .for_colour(name.as_str())
                .with_help(help),
            );
        }
    }

    result
}

/// Check for values of a usable length whose digits are not hex; these
/// silently decode to white.
pub fn check_hex_digits(file: &ColourFile) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (name, hex) in &file.colours {
        if Colour::from_hex(hex).is_err() {
            // Reported by check_hex_lengths
            continue;
        }
        let body = hex.trim().trim_start_matches('#');
        let rgb_digits: String = match body.chars().count() {
            4 => body.chars().take(3).collect(),
            8 => body.chars().take(6).collect(),
            _ => body.to_string(),
        };
        if try_hex_to_rgb(&rgb_digits).is_err() {
            result.push(
                Diagnostic::warning(
                    "tint::validate::invalid-digits",
                    format!("Colour '{}' has non-hex digits in '{}'", name, hex),
                )
                .for_colour(name.as_str())
                .with_help("This colour will render as white"),
            );
        }
    }

    result
}

/// Check for names that replace a built-in colour.
pub fn check_shadowed_builtins(file: &ColourFile) -> ValidationResult {
    let mut result = ValidationResult::new();

    for name in file.colours.keys() {
        if ColourTable::is_builtin_name(name) {
            result.push(
                Diagnostic::warning(
                    "tint::validate::shadowed-builtin",
                    format!("Colour '{}' overrides the built-in colour of the same name", name),
                )
                .for_colour(name.as_str())
                .with_help("Rename the colour to keep the built-in value"),
            );
        }
    }

    result
}
