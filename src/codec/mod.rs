//! Conversions between hex strings, RGB triples and HSL triples.
//!
//! The RGB leg round-trips exactly. The HSL leg rounds hue, saturation and
//! lightness to whole numbers, so hex -> HSL -> hex may drift by a step.

mod hsl;
mod rgb;

pub use hsl::{hex_to_hsl, hsl_to_hex, hsl_to_rgb, rgb_to_hsl, Hsl};
pub use rgb::{hex_to_rgb, rgb_to_hex, try_hex_to_rgb, Rgb};

/// Round to the nearest integer, with halves going up (towards +inf).
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Convert a fractional channel value to a byte: rounded half-up, clamped
/// into [0, 255]. NaN becomes 0.
pub(crate) fn channel(value: f64) -> u8 {
    round_half_up(value).clamp(0.0, 255.0) as u8
}
