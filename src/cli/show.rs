//! Show command implementation.
//!
//! Resolves a colour and prints every representation of it.

use clap::Args;
use serde::Serialize;

use crate::codec::{Hsl, Rgb};
use crate::error::{Result, TintError};
use crate::output::Printer;
use crate::registry::ColourTable;
use crate::types::{Colour, Hsla, Rgba};

/// Show every representation of a colour
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Colour to show: hex, rgb(), rgba(), hsl(), hsla() or a name
    pub colour: String,

    /// Print a JSON object instead of text
    #[arg(long)]
    pub json: bool,
}

/// All derived views of a colour, for JSON output.
#[derive(Debug, Serialize)]
pub struct Views {
    pub hex: String,
    pub hex_string: String,
    pub rgb: Rgb,
    pub rgba: Rgba,
    pub hsl: Hsl,
    pub hsla: Hsla,
    pub contrast: f64,
    pub kelvin: Option<u32>,
}

impl Views {
    pub fn of(colour: &Colour) -> Self {
        Self {
            hex: colour.hex(),
            hex_string: colour.hex_string(),
            rgb: colour.rgb(),
            rgba: colour.rgba(),
            hsl: colour.hsl(),
            hsla: colour.hsla(),
            contrast: colour.contrast(),
            kelvin: colour.kelvin(),
        }
    }
}

pub fn run(args: ShowArgs, table: &ColourTable, printer: &Printer) -> Result<()> {
    let colour = table.try_resolve(args.colour.as_str())?;

    if args.json {
        let json = serde_json::to_string_pretty(&Views::of(&colour)).map_err(|e| TintError::Parse {
            message: format!("Failed to serialise colour: {}", e),
            help: None,
        })?;
        println!("{json}");
        return Ok(());
    }

    println!("{}{}", printer.swatch(&colour), printer.bold(&colour.hex_string()));
    print!("{}", render_views(&colour));
    Ok(())
}

/// Text table of a colour's string renderings and measurements.
pub fn render_views(colour: &Colour) -> String {
    let kelvin = colour
        .kelvin()
        .map_or_else(|| "-".to_string(), |k| format!("{k}K"));
    let rows = [
        ("hex", colour.hex_string()),
        ("rgb", colour.rgb_string()),
        ("rgba", colour.rgba_string()),
        ("hsl", colour.hsl_string()),
        ("hsla", colour.hsla_string()),
        ("luminance", format!("{:.2}", colour.contrast())),
        ("kelvin", kelvin),
    ];

    rows.iter()
        .map(|(label, value)| format!("{label:<10}{value}\n"))
        .collect()
}
