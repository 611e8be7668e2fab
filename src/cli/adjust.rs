//! Adjust command implementation.

use clap::{Args, ValueEnum};

use crate::error::Result;
use crate::output::Printer;
use crate::registry::ColourTable;
use crate::types::Colour;

/// Derive a new colour (darker, rotate, sepia, ...)
#[derive(Args, Debug)]
pub struct AdjustArgs {
    /// Colour to start from
    pub colour: String,

    /// Adjustment to apply
    #[arg(value_enum)]
    pub op: Adjustment,

    /// Amount (points, degrees, or a factor, depending on the adjustment)
    #[arg(allow_negative_numbers = true)]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Adjustment {
    /// Lightness down by N points (default 10)
    Darker,
    /// Lightness up by N points (default 10)
    Lighter,
    /// Hue rotated by N degrees (default 180)
    Rotate,
    /// Saturation up by N points (default 10)
    Saturate,
    /// Saturation down by N points (default 10)
    Desaturate,
    /// Saturation dropped to zero
    Grayscale,
    /// Channels inverted by factor N (default 1)
    Invert,
    /// Sepia tone by factor N (default 1)
    Sepia,
    /// Linear contrast factor N (default 1)
    Contrast,
    /// Linear brightness factor N (default 1)
    Brightness,
    /// Alpha set to N percent (default 100)
    Opacity,
    /// Hue rotated by 180 degrees
    Complementary,
}

impl Adjustment {
    fn default_amount(self) -> f64 {
        match self {
            Adjustment::Darker
            | Adjustment::Lighter
            | Adjustment::Saturate
            | Adjustment::Desaturate => 10.0,
            Adjustment::Rotate | Adjustment::Complementary => 180.0,
            Adjustment::Opacity => 100.0,
            Adjustment::Grayscale
            | Adjustment::Invert
            | Adjustment::Sepia
            | Adjustment::Contrast
            | Adjustment::Brightness => 1.0,
        }
    }

    /// Apply to a colour; `None` uses the adjustment's default amount.
    pub fn apply(self, colour: &Colour, amount: Option<f64>) -> Colour {
        let n = amount.unwrap_or_else(|| self.default_amount());
        match self {
            Adjustment::Darker => colour.darker(n),
            Adjustment::Lighter => colour.lighter(n),
            Adjustment::Rotate => colour.rotate(n),
            Adjustment::Saturate => colour.saturate(n),
            Adjustment::Desaturate => colour.desaturate(n),
            Adjustment::Grayscale => colour.grayscale(),
            Adjustment::Invert => colour.invert(n),
            Adjustment::Sepia => colour.sepia(n),
            Adjustment::Contrast => colour.linear_contrast(n),
            Adjustment::Brightness => colour.linear_brightness(n),
            Adjustment::Opacity => colour.opacity(n),
            Adjustment::Complementary => colour.complementary(),
        }
    }
}

pub fn run(args: AdjustArgs, table: &ColourTable, printer: &Printer) -> Result<()> {
    let colour = table.try_resolve(args.colour.as_str())?;
    let adjusted = args.op.apply(&colour, args.amount);

    printer.info(
        "Adjusted",
        &format!("{} {} {}", colour.hex_string(), printer.dim("->"), adjusted.hex_string()),
    );
    println!("{}{}", printer.swatch(&adjusted), adjusted.hex_string());
    Ok(())
}
