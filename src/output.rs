//! Terminal output formatting for the tint CLI.
//!
//! Provides Cargo-style status output with right-aligned coloured verbs,
//! plus truecolour swatches for previewing colours.
//! All status output goes to stderr; stdout is reserved for results.

use std::io::{self, IsTerminal, Write};

use crate::types::Colour;

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Width of a colour swatch, in cells.
const SWATCH_WIDTH: usize = 4;

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal. Swatches are only drawn
/// when stdout is a terminal, so piped output stays plain.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
    swatches: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            swatches: io::stdout().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            color: false,
            swatches: false,
        }
    }

    /// Print a status line with a green bold verb.
    /// e.g. "    Resolved red -> #FF0000"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Print an error line with a red bold verb.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Format a string as bold.
    pub fn bold(&self, text: &str) -> String {
        if self.color {
            format!("{BOLD}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// A block of the colour drawn with a truecolour background, or an
    /// empty string when swatches are disabled.
    pub fn swatch(&self, colour: &Colour) -> String {
        if !self.swatches {
            return String::new();
        }
        let rgb = colour.rgb();
        format!(
            "\x1b[48;2;{};{};{}m{:width$}{RESET} ",
            rgb.r,
            rgb.g,
            rgb.b,
            "",
            width = SWATCH_WIDTH
        )
    }

    /// Format a diagnostic severity label with colour.
    pub fn severity(&self, label: &str, is_error: bool) -> String {
        let color = if is_error { RED } else { YELLOW };
        if self.color {
            format!("{BOLD}{color}{label}{RESET}")
        } else {
            label.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(
                stderr,
                "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"
            );
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pluralize a count: `plural(1, "colour", "colours")` -> "1 colour".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_singular() {
        assert_eq!(plural(1, "colour", "colours"), "1 colour");
    }

    #[test]
    fn test_plural_zero() {
        assert_eq!(plural(0, "colour", "colours"), "0 colours");
    }

    #[test]
    fn test_plural_many() {
        assert_eq!(plural(5, "warning", "warnings"), "5 warnings");
    }

    #[test]
    fn test_plain_printer_has_no_escapes() {
        let printer = Printer::plain();
        assert_eq!(printer.swatch(&Colour::WHITE), "");
        assert_eq!(printer.bold("x"), "x");
        assert_eq!(printer.severity("error", true), "error");
    }

    #[test]
    fn test_swatch_uses_truecolour_background() {
        let printer = Printer {
            color: true,
            swatches: true,
        };
        let swatch = printer.swatch(&Colour::from_rgb(255, 0, 16));
        assert!(swatch.starts_with("\x1b[48;2;255;0;16m"));
        assert!(swatch.ends_with("\x1b[0m "));
    }
}
