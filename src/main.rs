//! Riffle Binary
//!
//! Runs the mixing experiment and reports divergence from uniform for each
//! shuffle count, as terminal charts, JSON, or CSV.

use clap::Parser;
use riffle::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "How many riffle shuffles until a deck is random?", long_about = None)]
struct Args {
    /// cards in the deck
    #[arg(long, default_value_t = DECK_SIZE)]
    cards: usize,
    /// shuffled decks tallied per shuffle count
    #[arg(long, default_value_t = NUM_TRIALS)]
    trials: usize,
    /// smallest shuffle count to try
    #[arg(long, default_value_t = 1)]
    min: usize,
    /// largest shuffle count to try, inclusive
    #[arg(long, default_value_t = MAX_SHUFFLES)]
    max: usize,
    /// root seed; drawn at random and logged if omitted
    #[arg(long)]
    seed: Option<u64>,
    /// cut and drop rules
    #[arg(long, value_enum, default_value_t = Variant::Reference)]
    variant: Variant,
    /// worker threads; one per logical CPU if omitted
    #[arg(long)]
    threads: Option<usize>,
    /// print results as JSON instead of charts
    #[arg(long, conflicts_with = "csv")]
    json: bool,
    /// print results as CSV instead of charts
    #[arg(long)]
    csv: bool,
    /// also write DEBUG logs to a timestamped file in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> ExperimentConfig {
        let mut config = ExperimentConfig::new(self.cards, self.trials, (self.min..=self.max).collect())
            .with_variant(self.variant);
        config.seed = self.seed;
        config.threads = self.threads;
        config
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.log_dir.as_deref())?;
    let report = Report::from(Experiment::run(args.config())?);
    match (args.json, args.csv) {
        (true, _) => println!("{}", report.json()?),
        (_, true) => println!("{}", report.csv()),
        _ => print!("{}", report),
    }
    Ok(())
}
