//! Colour algebra: matrix, linear and HSL adjustments.
//!
//! Every operation returns a new colour and carries the source alpha over
//! unchanged (except [`Colour::opacity`], which replaces it). Fractional
//! channel results are rounded and clamped into [0, 255].

use crate::codec::{Hsl, Rgb};

use super::Colour;

/// Sepia tone matrix, row-major.
const SEPIA: [f64; 9] = [
    0.393, 0.769, 0.189, //
    0.349, 0.686, 0.168, //
    0.272, 0.534, 0.131,
];

impl Colour {
    /// Apply a row-major 3x3 matrix to the RGB channels.
    pub fn multiply(&self, matrix: &[f64; 9]) -> Self {
        let (r, g, b) = self.channels_f64();
        let rgb = Rgb::from_f64(
            r * matrix[0] + g * matrix[1] + b * matrix[2],
            r * matrix[3] + g * matrix[4] + b * matrix[5],
            r * matrix[6] + g * matrix[7] + b * matrix[8],
        );
        Self::new(rgb, self.alpha)
    }

    /// Invert each channel. `1.0` is a full inversion, `0.0` the identity.
    pub fn invert(&self, value: f64) -> Self {
        self.map_channels(|c| (value + c / 255.0 * (1.0 - 2.0 * value)) * 255.0)
    }

    /// `c * slope + intercept * 255` per channel.
    pub fn linear(&self, slope: f64, intercept: f64) -> Self {
        self.map_channels(|c| c * slope + intercept * 255.0)
    }

    /// Scale contrast around mid-grey. `1.0` is the identity.
    pub fn linear_contrast(&self, value: f64) -> Self {
        self.linear(value, -(0.5 * value) + 0.5)
    }

    /// Scale brightness. `1.0` is the identity.
    pub fn linear_brightness(&self, value: f64) -> Self {
        self.linear(value, 0.0)
    }

    /// Sepia tone. `1.0` is full sepia, `0.0` the identity.
    pub fn sepia(&self, value: f64) -> Self {
        let rest = 1.0 - value;
        let matrix = [
            SEPIA[0] + (1.0 - SEPIA[0]) * rest,
            SEPIA[1] - SEPIA[1] * rest,
            SEPIA[2] - SEPIA[2] * rest,
            SEPIA[3] - SEPIA[3] * rest,
            SEPIA[4] + (1.0 - SEPIA[4]) * rest,
            SEPIA[5] - SEPIA[5] * rest,
            SEPIA[6] - SEPIA[6] * rest,
            SEPIA[7] - SEPIA[7] * rest,
            SEPIA[8] + (1.0 - SEPIA[8]) * rest,
        ];
        self.multiply(&matrix)
    }

    /// Same RGB body with alpha set to `percent / 100`.
    pub fn opacity(&self, percent: f64) -> Self {
        Self::new(self.rgb(), percent / 100.0)
    }

    /// Reduce lightness by `points` (absolute HSL points, not a ratio).
    pub fn darker(&self, points: f64) -> Self {
        self.map_hsl(|h, s, l| (h, s, (l - points).clamp(0.0, 100.0)))
    }

    /// Increase lightness by `points` (absolute HSL points, not a ratio).
    pub fn lighter(&self, points: f64) -> Self {
        self.map_hsl(|h, s, l| (h, s, (l + points).clamp(0.0, 100.0)))
    }

    /// Drop saturation to zero, keeping hue and lightness.
    pub fn grayscale(&self) -> Self {
        self.map_hsl(|h, _, l| (h, 0.0, l))
    }

    /// Rotate the hue by `degrees`, wrapping into [0, 360).
    pub fn rotate(&self, degrees: f64) -> Self {
        self.map_hsl(|h, s, l| ((h + degrees).rem_euclid(360.0), s, l))
    }

    /// Increase saturation by `points`, capped at 100.
    pub fn saturate(&self, points: f64) -> Self {
        self.map_hsl(|h, s, l| (h, (s + points).clamp(0.0, 100.0), l))
    }

    /// Decrease saturation by `points`, floored at 0.
    pub fn desaturate(&self, points: f64) -> Self {
        self.map_hsl(|h, s, l| (h, (s - points).clamp(0.0, 100.0), l))
    }

    /// Add a delta to each channel, clamping into [0, 255].
    pub fn shift_rgb_values(&self, dr: i32, dg: i32, db: i32) -> Self {
        let Rgb { r, g, b } = self.rgb();
        let shift = |c: u8, d: i32| (i32::from(c) + d).clamp(0, 255) as u8;
        Self::new(Rgb::new(shift(r, dr), shift(g, dg), shift(b, db)), self.alpha)
    }

    fn channels_f64(&self) -> (f64, f64, f64) {
        let Rgb { r, g, b } = self.rgb();
        (f64::from(r), f64::from(g), f64::from(b))
    }

    fn map_channels(&self, f: impl Fn(f64) -> f64) -> Self {
        let (r, g, b) = self.channels_f64();
        Self::new(Rgb::from_f64(f(r), f(g), f(b)), self.alpha)
    }

    /// Round-trip through the (rounded) HSL view.
    pub(super) fn map_hsl(&self, f: impl FnOnce(f64, f64, f64) -> (f64, f64, f64)) -> Self {
        let Hsl { h, s, l } = self.hsl();
        let (h, s, l) = f(f64::from(h), f64::from(s), f64::from(l));
        Self::from_hsla(h, s, l, self.alpha)
    }
}
