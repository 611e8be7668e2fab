//! tint - colour values and the algebra around them
//!
//! A library for decoding hex, RGB and HSL colours into a single value
//! type, deriving new colours from it (lighter, rotated, sepia, harmonies)
//! and resolving CSS colour names.

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod registry;
pub mod types;
pub mod validation;

pub use codec::{
    hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, try_hex_to_rgb, Hsl,
    Rgb,
};
pub use config::ColourFile;
pub use error::{Result, TintError};
pub use registry::{builtin_table, ColourTable};
pub use types::{Colour, ColourInput, Hsla, Rgba, ACCESSIBLE_RATIO};
pub use validation::{validate_colour_file, Diagnostic, Severity, ValidationResult};
