use clap::Parser;
use miette::Result;
use tint::cli::Cli;
use tint::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    tint::logging::init(printer, cli.verbose);
    tint::cli::run(cli, &printer)?;

    Ok(())
}
