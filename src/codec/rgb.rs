//! RGB triple and its hex encoding.

use std::fmt;

use log::warn;
use serde::Serialize;

use crate::error::{Result, TintError};

/// An 8-bit-per-channel RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// White, the decoder's fallback value.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from fractional channels, rounding half-up and clamping each
    /// into [0, 255].
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self::new(super::channel(r), super::channel(g), super::channel(b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Decode a hex string strictly.
///
/// Accepts an optional leading `#`, expands 3-digit shorthand and
/// right-pads shorter bodies with `0` up to 6 digits. Anything that is not
/// then exactly six hex digits is rejected.
pub fn try_hex_to_rgb(hex: &str) -> Result<Rgb> {
    let body = hex.strip_prefix('#').unwrap_or(hex);
    let body = normalise_body(body);

    if body.len() != 6 || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(TintError::invalid_format(hex));
    }

    let byte = |i: usize| {
        u8::from_str_radix(&body[i..i + 2], 16).map_err(|_| TintError::invalid_format(hex))
    };
    Ok(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
}

/// Decode a hex string, falling back to white.
///
/// Never fails: a malformed body logs a warning and yields [`Rgb::WHITE`].
pub fn hex_to_rgb(hex: &str) -> Rgb {
    match try_hex_to_rgb(hex) {
        Ok(rgb) => rgb,
        Err(_) => {
            warn!(target: "tint::codec", "Invalid hex colour: {hex}, using white");
            Rgb::WHITE
        }
    }
}

/// Encode as `#RRGGBB` with uppercase digits.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

fn normalise_body(body: &str) -> String {
    if body.len() == 3 && body.bytes().all(|b| b.is_ascii_hexdigit()) {
        // RGB -> RRGGBB
        body.chars().flat_map(|c| [c, c]).collect()
    } else {
        format!("{body:0<6}")
    }
}
