//! HSL triple and its conversions to and from RGB.

use std::fmt;

use serde::Serialize;

use super::rgb::{hex_to_rgb, rgb_to_hex, Rgb};
use super::{channel, round_half_up};

/// Hue in degrees, saturation and lightness in percent, all rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Convert an RGB triple to HSL, rounding each component.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        // achromatic
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Hsl {
        h: round_half_up(h * 360.0) as u16,
        s: round_half_up(s * 100.0) as u8,
        l: round_half_up(l * 100.0) as u8,
    }
}

/// Convert HSL to an RGB triple.
///
/// Hue wraps through the modulo, so any real value is accepted. Saturation
/// and lightness are not validated; each output channel is clamped into
/// [0, 255].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let l = l / 100.0;
    let a = s * l.min(1.0 - l) / 100.0;

    let f = |n: f64| {
        let k = (n + h / 30.0).rem_euclid(12.0);
        let c = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        channel(255.0 * c)
    };

    Rgb::new(f(0.0), f(8.0), f(4.0))
}

/// Convert HSL to `#RRGGBB`.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    rgb_to_hex(hsl_to_rgb(h, s, l))
}

/// Decode a hex string (permissively) and convert it to HSL.
pub fn hex_to_hsl(hex: &str) -> Hsl {
    rgb_to_hsl(hex_to_rgb(hex))
}
