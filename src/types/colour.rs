//! Colour type: construction, derived views and string renderings.

use std::fmt;
use std::str::FromStr;

use log::warn;
use rand::Rng;
use serde::Serialize;

use crate::codec::{self, Hsl, Rgb};
use crate::error::{Result, TintError};
use crate::registry;

use super::ColourInput;

/// A colour value: an RGB body plus a separate alpha channel.
///
/// Every manipulation returns a new `Colour`. `alpha` is public and may be
/// assigned in place; the RGB body can only be replaced by building a new
/// value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    rgb: Rgb,
    /// Opacity in [0, 1].
    pub alpha: f64,
}

/// RGB channels plus alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

/// HSL components plus alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsla {
    pub h: u16,
    pub s: u8,
    pub l: u8,
    pub a: f64,
}

impl Colour {
    /// Opaque white. Also the value `resolve` falls back to.
    pub const WHITE: Self = Self::new(Rgb::WHITE, 1.0);

    /// Opaque black.
    pub const BLACK: Self = Self::new(Rgb::BLACK, 1.0);

    /// Create a colour from an RGB body and alpha.
    pub const fn new(rgb: Rgb, alpha: f64) -> Self {
        Self { rgb, alpha }
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats (leading `#` optional):
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, alpha is `nibble / 15`)
    /// - `#RRGGBB` (6 digits; 5 digits are right-padded with `0`)
    /// - `#RRGGBBAA` (8 digits, alpha is `byte / 255`)
    ///
    /// Any other length is an error. A body of the right length but with
    /// non-hex digits decodes to white with a logged warning.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        let digits: Vec<char> = hex.chars().collect();

        let (body, alpha) = match digits.len() {
            3 => (hex.to_string(), 1.0),
            4 => {
                let body: String = digits[..3].iter().collect();
                let nibble: String = digits[3..].iter().collect();
                (body, parse_alpha(&nibble, 15.0, s))
            }
            5 | 6 => (hex.to_string(), 1.0),
            8 => {
                let body: String = digits[..6].iter().collect();
                let byte: String = digits[6..].iter().collect();
                (body, parse_alpha(&byte, 255.0, s))
            }
            _ => return Err(TintError::invalid_format(s)),
        };

        Ok(Self::new(codec::hex_to_rgb(&body), alpha))
    }

    /// Create an opaque colour from HSL components.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        Self::from_hsla(h, s, l, 1.0)
    }

    /// Create a colour from HSL components and alpha.
    pub fn from_hsla(h: f64, s: f64, l: f64, alpha: f64) -> Self {
        Self::new(codec::hsl_to_rgb(h, s, l), alpha)
    }

    /// Create an opaque colour from RGB channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(Rgb::new(r, g, b), 1.0)
    }

    /// Create a colour from RGB channels and alpha.
    pub const fn from_rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self::new(Rgb::new(r, g, b), alpha)
    }

    /// A uniformly random opaque colour.
    ///
    /// Every call yields a different colour; use [`Colour::seeded_random`]
    /// where the colour must stay stable (e.g. across UI redraws).
    pub fn random() -> Self {
        warn!(
            target: "tint::random",
            "random() yields a new colour on every call; use seeded_random for a stable colour"
        );
        let value: u32 = rand::rng().random_range(0..=0xFF_FFFF);
        let [_, r, g, b] = value.to_be_bytes();
        Self::from_rgb(r, g, b)
    }

    /// A deterministic colour derived from a seed string.
    ///
    /// Only the first UTF-16 code unit of the seed is used:
    /// `floor(|sin(code)| * 0xFFFFFF)`, written as unpadded hex and then
    /// right-padded with `0`. An empty seed uses code 0 (black).
    pub fn seeded_random(seed: &str) -> Self {
        let code = seed.encode_utf16().next().map_or(0, u32::from);
        let value = (f64::from(code).sin() * 16_777_215.0).abs().floor() as u32;
        let hex = format!("#{value:x}");
        Self::new(codec::hex_to_rgb(&format!("{hex:0<7}")), 1.0)
    }

    /// Look up a name in the built-in colour table.
    pub fn named(name: &str) -> Result<Self> {
        registry::builtin_table().named(name)
    }

    /// Resolve a string or colour against the built-in colour table.
    ///
    /// Never fails: anything unresolvable becomes opaque white.
    pub fn resolve(input: impl Into<ColourInput>) -> Self {
        registry::builtin_table().resolve(input)
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        codec::rgb_to_hsl(self.rgb)
    }

    pub fn rgba(&self) -> Rgba {
        Rgba {
            r: self.rgb.r,
            g: self.rgb.g,
            b: self.rgb.b,
            a: self.alpha,
        }
    }

    pub fn hsla(&self) -> Hsla {
        let Hsl { h, s, l } = self.hsl();
        Hsla {
            h,
            s,
            l,
            a: self.alpha,
        }
    }

    /// The 6-digit body, `#RRGGBB`.
    pub fn hex(&self) -> String {
        codec::rgb_to_hex(self.rgb)
    }

    /// `rgb(r, g, b)`
    pub fn rgb_string(&self) -> String {
        self.rgb.to_string()
    }

    /// `rgba(r, g, b, a)`
    pub fn rgba_string(&self) -> String {
        let Rgb { r, g, b } = self.rgb;
        format!("rgba({}, {}, {}, {})", r, g, b, self.alpha)
    }

    /// `hsl(h, s%, l%)`
    pub fn hsl_string(&self) -> String {
        self.hsl().to_string()
    }

    /// `hsla(h, s%, l%, a)`, with the hue multiplied by 255.
    ///
    /// The scaled hue is kept for output compatibility with existing
    /// consumers of this format.
    pub fn hsla_string(&self) -> String {
        let Hsl { h, s, l } = self.hsl();
        format!("hsla({}, {}%, {}%, {})", u32::from(h) * 255, s, l, self.alpha)
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when alpha is below 1.
    pub fn hex_string(&self) -> String {
        if self.alpha < 1.0 {
            format!("{}{:02X}", self.hex(), codec::channel(self.alpha * 255.0))
        } else {
            self.hex()
        }
    }

    /// Always `#RRGGBB`.
    pub fn hex_string_no_alpha(&self) -> String {
        self.hex()
    }

    /// `RRGGBB` without the leading `#`.
    pub fn hex_string_no_pound(&self) -> String {
        let Rgb { r, g, b } = self.rgb;
        format!("{r:02X}{g:02X}{b:02X}")
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Colour {
    type Err = TintError;

    /// Strict resolution against the built-in table: unlike
    /// [`Colour::resolve`], failures are reported.
    fn from_str(s: &str) -> Result<Self> {
        registry::builtin_table().try_resolve(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex_string())
    }
}

impl From<Rgb> for Colour {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb, 1.0)
    }
}

impl From<palette::Srgb<u8>> for Colour {
    fn from(c: palette::Srgb<u8>) -> Self {
        Self::from_rgb(c.red, c.green, c.blue)
    }
}

impl From<palette::Srgba<u8>> for Colour {
    fn from(c: palette::Srgba<u8>) -> Self {
        Self::from_rgba(c.red, c.green, c.blue, f64::from(c.alpha) / 255.0)
    }
}

impl From<Colour> for palette::Srgba<u8> {
    fn from(c: Colour) -> Self {
        let Rgb { r, g, b } = c.rgb;
        palette::Srgba::new(r, g, b, codec::channel(c.alpha * 255.0))
    }
}

/// Parse alpha hex digits and normalise by `max`. Unreadable digits log a
/// warning and leave the colour opaque.
fn parse_alpha(digits: &str, max: f64, input: &str) -> f64 {
    let parsed = digits
        .bytes()
        .all(|b| b.is_ascii_hexdigit())
        .then(|| u8::from_str_radix(digits, 16).ok())
        .flatten();

    match parsed {
        Some(value) => f64::from(value) / max,
        None => {
            warn!(target: "tint::codec", "Invalid alpha digits in {input}, using 1");
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::from_rgb(255, 0, 0));
        assert_eq!(c.hex(), "#FF0000");

        let c = Colour::from_hex("#1a1a2e").unwrap();
        assert_eq!(c.hex(), "#1A1A2E");
    }

    #[test]
    fn test_from_hex_3digit() {
        assert_eq!(Colour::from_hex("#FFF").unwrap().hex(), "#FFFFFF");
        assert_eq!(Colour::from_hex("#FF0").unwrap().hex(), "#FFFF00");
        assert_eq!(Colour::from_hex("abc").unwrap().hex(), "#AABBCC");
    }

    #[test]
    fn test_from_hex_4digit() {
        let c = Colour::from_hex("#FFFF").unwrap();
        assert_eq!(c.hex(), "#FFFFFF");
        assert_eq!(c.alpha, 1.0);

        let c = Colour::from_hex("#F008").unwrap();
        assert_eq!(c.hex(), "#FF0000");
        assert!((c.alpha - 8.0 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_hex_5digit_pads() {
        assert_eq!(Colour::from_hex("#12345").unwrap().hex(), "#123450");
    }

    #[test]
    fn test_from_hex_8digit() {
        let c = Colour::from_hex("#FF000080").unwrap();
        assert_eq!(c.hex(), "#FF0000");
        assert_eq!(c.alpha, 128.0 / 255.0);
        assert_eq!(c.hex_string(), "#FF000080");
    }

    #[test]
    fn test_from_hex_invalid_length() {
        assert!(matches!(
            Colour::from_hex(""),
            Err(TintError::InvalidFormat { .. })
        ));
        assert!(Colour::from_hex("#12").is_err());
        assert!(Colour::from_hex("#1234567").is_err());
        assert!(Colour::from_hex("#123456789").is_err());
    }

    #[test]
    fn test_from_hex_bad_digits_is_white() {
        assert_eq!(Colour::from_hex("#GGGGGG").unwrap(), Colour::WHITE);
    }

    #[test]
    fn test_from_hex_bad_alpha_is_opaque() {
        let c = Colour::from_hex("#FF0000ZZ").unwrap();
        assert_eq!(c.hex(), "#FF0000");
        assert_eq!(c.alpha, 1.0);
    }

    #[test]
    fn test_from_hsl_and_rgb() {
        assert_eq!(Colour::from_hsl(0.0, 100.0, 50.0).hex(), "#FF0000");
        assert_eq!(Colour::from_hsl(60.0, 100.0, 50.0).hex(), "#FFFF00");
        assert_eq!(Colour::from_rgb(255, 255, 0).hex(), "#FFFF00");
        assert_eq!(Colour::from_rgba(0, 0, 0, 0.25).alpha, 0.25);
    }

    #[test]
    fn test_seeded_random_is_deterministic() {
        let a = Colour::seeded_random("apple");
        let b = Colour::seeded_random("avocado");
        assert_eq!(a, b);
        assert_eq!(a.hex(), "#612DF8");
        assert_eq!(Colour::seeded_random("banana").hex(), "#92C926");
        assert_eq!(Colour::seeded_random(""), Colour::BLACK);
    }

    #[test]
    fn test_seeded_random_uses_first_utf16_unit() {
        // High surrogate 0xD83D, not the full code point
        assert_eq!(Colour::seeded_random("\u{1F600}").hex(), "#D7FD12");
        assert_eq!(
            Colour::seeded_random("\u{1F600}"),
            Colour::seeded_random("\u{1F4A9}")
        );
    }

    #[test]
    fn test_random_is_opaque() {
        let c = Colour::random();
        assert!(c.is_opaque());
        assert_eq!(c.hex().len(), 7);
    }

    #[test]
    fn test_string_renderings() {
        let mut c = Colour::from_rgb(255, 0, 0);
        assert_eq!(c.rgb_string(), "rgb(255, 0, 0)");
        assert_eq!(c.rgba_string(), "rgba(255, 0, 0, 1)");
        assert_eq!(c.hsl_string(), "hsl(0, 100%, 50%)");
        assert_eq!(c.hsla_string(), "hsla(0, 100%, 50%, 1)");
        assert_eq!(c.hex_string(), "#FF0000");
        assert_eq!(c.hex_string_no_pound(), "FF0000");

        c.alpha = 0.5;
        assert_eq!(c.hex_string(), "#FF000080");
        assert_eq!(c.hex_string_no_alpha(), "#FF0000");
        assert_eq!(c.rgba_string(), "rgba(255, 0, 0, 0.5)");
        assert_eq!(c.hsla_string(), "hsla(0, 100%, 50%, 0.5)");
    }

    #[test]
    fn test_hsla_string_scales_hue() {
        let c = Colour::from_hsl(120.0, 100.0, 50.0);
        assert_eq!(c.hsla_string(), "hsla(30600, 100%, 50%, 1)");
    }

    #[test]
    fn test_alpha_suffix_is_two_digits() {
        let c = Colour::from_rgba(0, 0, 0, 0.02);
        assert_eq!(c.hex_string(), "#00000005");
    }

    #[test]
    fn test_views() {
        let c = Colour::from_rgba(255, 0, 255, 0.5);
        assert_eq!(c.rgb(), Rgb::new(255, 0, 255));
        assert_eq!(c.hsl(), Hsl::new(300, 100, 50));
        assert_eq!(c.rgba(), Rgba { r: 255, g: 0, b: 255, a: 0.5 });
        assert_eq!(c.hsla(), Hsla { h: 300, s: 100, l: 50, a: 0.5 });
    }

    #[test]
    fn test_display_and_from_str() {
        let c: Colour = "#FF000080".parse().unwrap();
        assert_eq!(c.to_string(), "#FF000080");
        assert!("illegal".parse::<Colour>().is_err());
    }

    #[test]
    fn test_palette_interop() {
        let c = Colour::from_rgba(10, 20, 30, 0.5);
        let srgba: palette::Srgba<u8> = c.into();
        assert_eq!(srgba, palette::Srgba::new(10, 20, 30, 128));
        let back = Colour::from(palette::Srgb::new(10u8, 20, 30));
        assert_eq!(back.hex(), "#0A141E");
    }
}
