pub mod adjust;
pub mod completions;
pub mod contrast;
pub mod harmony;
pub mod list;
pub mod random;
pub mod show;
pub mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config;
use crate::error::Result;
use crate::output::Printer;

/// tint - colour conversion and manipulation
#[derive(Parser, Debug)]
#[command(name = "tint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Colour file with extra named colours (default: ./tint.yaml if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub colours: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every representation of a colour
    Show(show::ShowArgs),

    /// Derive a new colour (darker, rotate, sepia, ...)
    Adjust(adjust::AdjustArgs),

    /// Generate a colour harmony
    Harmony(harmony::HarmonyArgs),

    /// Check the contrast of a foreground/background pair
    Contrast(contrast::ContrastArgs),

    /// Generate random colours
    Random(random::RandomArgs),

    /// List named colours
    List(list::ListArgs),

    /// Validate a colour file
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Run a parsed command line.
pub fn run(cli: Cli, printer: &Printer) -> Result<()> {
    let colours = cli.colours.as_ref();

    match cli.command {
        Commands::Show(args) => show::run(args, &config::load_table(colours)?, printer),
        Commands::Adjust(args) => adjust::run(args, &config::load_table(colours)?, printer),
        Commands::Harmony(args) => harmony::run(args, &config::load_table(colours)?, printer),
        Commands::Contrast(args) => contrast::run(args, &config::load_table(colours)?, printer),
        Commands::Random(args) => random::run(args, printer),
        Commands::List(args) => list::run(args, &config::load_table(colours)?, printer),
        Commands::Validate(args) => validate::run(args, colours, printer),
        Commands::Completions(args) => completions::run(args),
    }
}
