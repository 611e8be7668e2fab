//! Harmony command implementation.

use clap::{Args, ValueEnum};

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::registry::ColourTable;
use crate::types::Colour;

/// Generate a colour harmony
#[derive(Args, Debug)]
pub struct HarmonyArgs {
    /// Base colour
    pub colour: String,

    /// Kind of harmony
    #[arg(long, short, value_enum, default_value = "triadic")]
    pub kind: HarmonyKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HarmonyKind {
    /// The colour and its opposite
    Complementary,
    /// A lightness ramp in one hue
    Monochromatic,
    /// Three hues 120 degrees apart
    Triadic,
}

impl HarmonyKind {
    pub fn generate(self, colour: &Colour) -> Vec<Colour> {
        match self {
            HarmonyKind::Complementary => vec![*colour, colour.complementary()],
            HarmonyKind::Monochromatic => colour.monochromatic(),
            HarmonyKind::Triadic => colour.triadic(),
        }
    }
}

pub fn run(args: HarmonyArgs, table: &ColourTable, printer: &Printer) -> Result<()> {
    let colour = table.try_resolve(args.colour.as_str())?;
    let colours = args.kind.generate(&colour);

    printer.status(
        "Generated",
        &format!("{} from {}", plural(colours.len(), "colour", "colours"), colour.hex_string()),
    );
    for c in &colours {
        println!("{}{}", printer.swatch(c), c.hex_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate() {
        let pink = Colour::from_rgb(0xFE, 0x09, 0xF0);
        assert_eq!(HarmonyKind::Monochromatic.generate(&pink).len(), 10);
        assert_eq!(HarmonyKind::Triadic.generate(&pink).len(), 3);

        let pair = HarmonyKind::Complementary.generate(&pink);
        assert_eq!(pair[0], pink);
        assert_eq!(pair[1].hex(), "#0BFE18");
    }
}
