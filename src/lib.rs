//! Gilbert–Shannon–Reeds riffle shuffles and an empirical study of how many
//! of them it takes before a deck looks uniformly random.
//!
//! The crate is split into the shuffle itself ([`shuffle`]), the seedable
//! randomness it draws from ([`random`]), the Monte Carlo pipeline that
//! measures mixing ([`experiment`]), and a thin terminal [`report`]er.
pub mod experiment;
pub mod random;
pub mod report;
pub mod shuffle;

pub use experiment::*;
pub use random::*;
pub use report::*;
pub use shuffle::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Canonical card identity, 0..n-1.
pub type Token = usize;
/// Observed tallies of (position, token) pairs.
pub type Count = u64;
/// Relative frequencies and reference densities.
pub type Probability = f64;
/// Relative entropy and other information-theoretic measures.
pub type Entropy = f64;
/// Squared distances and test statistics.
pub type Energy = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a random instance from the given source.
    fn random<R: RandomSource>(rng: &mut R) -> Self;
}

// ============================================================================
// EXPERIMENT DEFAULTS
// The setup under which seven riffles is the folklore answer.
// ============================================================================
/// A standard deck.
pub const DECK_SIZE: usize = 52;
/// Independently shuffled decks tallied per shuffle count.
pub const NUM_TRIALS: usize = 10000;
/// Largest shuffle count tried by default, starting from 1.
pub const MAX_SHUFFLES: usize = 20;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize logging to the terminal at INFO, and optionally to a
/// timestamped DEBUG file under `dir`.
#[cfg(feature = "cli")]
pub fn log(dir: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    ) as Box<dyn simplelog::SharedLogger>;
    let mut loggers = vec![term];
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir)?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs();
        let file = std::fs::File::create(dir.join(format!("{}.log", time)))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}
