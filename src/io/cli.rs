//! Command-line interface for filling a crossword structure from a word list

use crate::algorithm::executor::{PropagationMode, SearchOutcome, Solver, SolverConfig};
use crate::algorithm::selection::{FirstCandidate, RandomSelector, TieBreaker};
use crate::io::configuration::{CELL_SIZE, DEFAULT_SEED};
use crate::io::display::render_text;
use crate::io::error::Result;
use crate::io::image::{export_solution_as_png, glyph_scale};
use crate::io::loader::load_puzzle;
use crate::io::progress::SearchProgress;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "crossfill")]
#[command(
    author,
    version,
    about = "Fill a crossword structure with words using arc consistency and backtracking"
)]
/// Command-line arguments for the crossword filler
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Structure file: one row per line, `_` for open cells
    #[arg(value_name = "STRUCTURE")]
    pub structure: PathBuf,

    /// Word list file: one word per line
    #[arg(value_name = "WORDS")]
    pub words: PathBuf,

    /// Optional PNG file to draw the solution into
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Random seed for reproducible tie-breaking
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Break ties by slot and word order instead of randomly
    #[arg(short, long)]
    pub deterministic: bool,

    /// Give up after this many tentative word placements
    #[arg(short, long)]
    pub max_steps: Option<usize>,

    /// Re-run arc consistency over every arc after each placement
    #[arg(short, long)]
    pub full_propagation: bool,

    /// Forbid using the same word in two slots
    #[arg(short = 'u', long)]
    pub distinct: bool,

    /// Cell size in pixels for the PNG output
    #[arg(short, long, default_value_t = CELL_SIZE)]
    pub cell_size: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Solver parameters selected by the flags
    pub const fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            propagation: if self.full_propagation {
                PropagationMode::Full
            } else {
                PropagationMode::Incremental
            },
            max_steps: self.max_steps,
            distinct_words: self.distinct,
        }
    }

    /// Tie-breaking source selected by the flags
    pub fn tie_breaker(&self) -> Box<dyn TieBreaker> {
        if self.deterministic {
            Box::new(FirstCandidate)
        } else {
            Box::new(RandomSelector::new(self.seed))
        }
    }
}

/// Loads the puzzle, runs the solver and writes the optional image
pub struct SolveCommand {
    cli: Cli,
}

impl SolveCommand {
    /// Create a command from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Solve and return the text to print
    ///
    /// The text is the filled grid, `No solution.` or `Step budget exhausted.`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input files cannot be loaded or the image
    /// cannot be written
    pub fn execute(&self) -> Result<String> {
        if self.cli.output.is_some() {
            // Fail on a bad cell size before spending time on the search
            glyph_scale(self.cli.cell_size)?;
        }

        let puzzle = load_puzzle(&self.cli.structure, &self.cli.words)?;

        let progress = if self.cli.should_show_progress() {
            SearchProgress::new(puzzle.slot_count())
        } else {
            SearchProgress::hidden(puzzle.slot_count())
        };

        let mut solver = Solver::with_tie_breaker(&puzzle, self.cli.tie_breaker())
            .with_config(self.cli.solver_config())
            .with_progress(progress);

        match solver.run() {
            SearchOutcome::Solved(assignment) => {
                if let Some(output) = &self.cli.output {
                    export_solution_as_png(&puzzle, &assignment, self.cli.cell_size, output)?;
                }
                Ok(render_text(&puzzle, &assignment))
            }
            SearchOutcome::Unsatisfiable => Ok(String::from("No solution.\n")),
            SearchOutcome::BudgetExhausted => Ok(String::from("Step budget exhausted.\n")),
        }
    }
}
