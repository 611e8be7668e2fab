//! Colour harmonies built from the HSL view.

use super::Colour;

/// Lightness steps for [`Colour::monochromatic`].
const MONOCHROME_STEPS: usize = 10;

impl Colour {
    /// The colour opposite on the hue wheel.
    pub fn complementary(&self) -> Self {
        self.rotate(180.0)
    }

    /// A lightness ramp in the colour's hue and saturation: lightness
    /// 0, 10, ..., 90.
    pub fn monochromatic(&self) -> Vec<Self> {
        (0..MONOCHROME_STEPS)
            .map(|i| {
                let lightness = (i * 10) as f64;
                self.map_hsl(|h, s, _| (h, s, lightness))
            })
            .collect()
    }

    /// Three colours 120 degrees apart, starting with this hue.
    ///
    /// The hue offsets are not wrapped; the HSL conversion wraps them.
    pub fn triadic(&self) -> Vec<Self> {
        [0.0, 120.0, 240.0]
            .into_iter()
            .map(|offset| self.map_hsl(|h, s, l| (h + offset, s, l)))
            .collect()
    }
}
