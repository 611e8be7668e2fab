//! Random command implementation.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::types::Colour;

/// Generate random colours
#[derive(Args, Debug)]
pub struct RandomArgs {
    /// Derive the colour from a seed instead (only its first character counts)
    #[arg(long)]
    pub seed: Option<String>,

    /// Number of colours to generate
    #[arg(long, short = 'n', default_value = "1")]
    pub count: usize,
}

pub fn run(args: RandomArgs, printer: &Printer) -> Result<()> {
    for _ in 0..args.count {
        let colour = match &args.seed {
            Some(seed) => Colour::seeded_random(seed),
            None => Colour::random(),
        };
        println!("{}{}", printer.swatch(&colour), colour.hex_string());
    }
    Ok(())
}
