//! CLI entry point for the crossword filler

use clap::Parser;
use crossfill::io::cli::{Cli, SolveCommand};

// The filled grid is the program's output
#[allow(clippy::print_stdout)]
fn main() -> crossfill::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let output = SolveCommand::new(cli).execute()?;
    print!("{output}");
    Ok(())
}
