mod error;
mod functions;
mod input;
mod logging;
mod pipeline;

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::pipeline::{Reducer, Stage};

/// Apply higher-order sequence functions to a list of integers.
///
/// Stages run in the order given. Without --reduce the resulting sequence is
/// printed on one line.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input values. When absent they are read from --infile or stdin.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,
    /// File with whitespace-separated input values (default stdin)
    #[arg(long)]
    infile: Option<PathBuf>,
    /// Sequence stage (can be repeated): map:<fn>, filter:<pred>, reverse,
    /// sort[:asc|:desc].
    /// Functions: double, square, negate, increment, decrement, abs.
    /// Predicates: even, odd, positive, negative, zero, lt=N, gt=N, eq=N.
    #[arg(long)]
    stage: Vec<Stage>,
    /// Final reduction: foldl:<fn>, foldr:<fn>, all:<pred>, any:<pred>,
    /// first:<pred>.
    /// Fold functions: sum, product, max, min, sub.
    #[arg(long)]
    reduce: Option<Reducer>,
    /// Starting value for foldl/foldr. Defaults to the fold function's
    /// identity.
    #[arg(long, allow_negative_numbers = true, requires = "reduce")]
    init: Option<i64>,
}

impl Cli {
    fn run(&self) -> anyhow::Result<()> {
        let values = if self.values.is_empty() {
            input::read_values(self.infile.as_deref())?
        } else {
            self.values.clone()
        };
        debug!(len = values.len(), stages = self.stage.len(), "read input");
        let outcome = pipeline::run(&self.stage, self.reduce, self.init, values)?;
        println!("{outcome}");
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    cli.run()
}
