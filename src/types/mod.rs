//! Core domain types for tint.
//!
//! This module contains the colour value and everything derived from it:
//! - `Colour` - hex body + alpha, constructors and string renderings
//! - `ColourInput` - a raw string or an already-resolved colour
//! - colour algebra (invert, sepia, darker, rotate, ...), harmonies and
//!   contrast measurements, as inherent methods on `Colour`

mod adjust;
mod colour;
mod harmony;
mod input;
mod measure;

pub use colour::{Colour, Hsla, Rgba};
pub use input::ColourInput;
pub use measure::ACCESSIBLE_RATIO;

pub(crate) use input::parse_raw;
