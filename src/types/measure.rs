//! Luminance, contrast and colour temperature measurements.

use super::Colour;

/// Minimum contrast ratio for [`Colour::check_accessible`].
pub const ACCESSIBLE_RATIO: f64 = 7.0;

impl Colour {
    /// WCAG relative luminance, scaled to [0, 100].
    pub fn contrast(&self) -> f64 {
        let rgb = self.rgb();
        0.2126 * relative_luminance(rgb.r)
            + 0.7152 * relative_luminance(rgb.g)
            + 0.0722 * relative_luminance(rgb.b)
    }

    /// Contrast ratio of `foreground` against `background`, in the
    /// `(L1 + 0.05) / (L2 + 0.05)` form. Not symmetric.
    pub fn contrast_ratio(foreground: Colour, background: Colour) -> f64 {
        (foreground.contrast() + 0.05) / (background.contrast() + 0.05)
    }

    /// Check whether `foreground` on `background` reaches a 7:1 ratio.
    ///
    /// Argument order matters: a light foreground on a dark background
    /// passes, the swapped call does not.
    pub fn check_accessible(foreground: Colour, background: Colour) -> bool {
        Self::contrast_ratio(foreground, background) >= ACCESSIBLE_RATIO
    }

    /// Rough colour temperature: `1_000_000 / mean(r, g, b)`, rounded.
    ///
    /// Not physically meaningful. `None` for black.
    pub fn kelvin(&self) -> Option<u32> {
        let rgb = self.rgb();
        let mean = (f64::from(rgb.r) + f64::from(rgb.g) + f64::from(rgb.b)) / 3.0;
        if mean == 0.0 {
            return None;
        }
        Some(crate::codec::round_half_up(1_000_000.0 / mean) as u32)
    }
}

/// sRGB channel to linear light, scaled by 100.
fn relative_luminance(channel: u8) -> f64 {
    let srgb = f64::from(channel) / 255.0;
    let linear = if srgb <= 0.03928 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    };
    linear * 100.0
}
