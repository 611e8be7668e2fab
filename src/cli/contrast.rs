//! Contrast command implementation.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::registry::ColourTable;
use crate::types::{Colour, ACCESSIBLE_RATIO};

/// Check the contrast of a foreground/background pair
#[derive(Args, Debug)]
pub struct ContrastArgs {
    /// Foreground (text) colour
    pub foreground: String,

    /// Background colour
    pub background: String,
}

pub fn run(args: ContrastArgs, table: &ColourTable, printer: &Printer) -> Result<()> {
    let fg = table.try_resolve(args.foreground.as_str())?;
    let bg = table.try_resolve(args.background.as_str())?;

    println!("{}", report(fg, bg));

    if Colour::check_accessible(fg, bg) {
        printer.status("Passes", &format!("ratio is at least {ACCESSIBLE_RATIO}:1"));
    } else {
        printer.warning("Fails", &format!("ratio is below {ACCESSIBLE_RATIO}:1"));
    }
    Ok(())
}

/// One-line summary: luminances and the ratio.
pub fn report(fg: Colour, bg: Colour) -> String {
    format!(
        "{} ({:.2}) on {} ({:.2}): {:.2}:1",
        fg.hex_string(),
        fg.contrast(),
        bg.hex_string(),
        bg.contrast(),
        Colour::contrast_ratio(fg, bg)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report() {
        let pink = Colour::from_rgb(0xFE, 0x09, 0xF0);
        assert_eq!(
            report(pink, Colour::WHITE),
            "#FE09F0 (27.56) on #FFFFFF (100.00): 0.28:1"
        );
    }
}
