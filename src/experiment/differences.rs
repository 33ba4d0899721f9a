use super::config::ExperimentConfig;
use super::error::Result;
use super::frequency::FrequencyTable;
use super::metrics::DivergenceMetrics;
use crate::Deck;
use crate::Seeded;
use rayon::prelude::*;

/// Divergence from uniform after `k` riffles, estimated from
/// `num_trials` independently shuffled copies of one random deck.
///
/// reads `config` and nothing else, so any number of workers may call
/// this concurrently. the reference deck draws from a stream derived
/// from (seed, k) and every trial from (seed, k, trial), so the result
/// is fixed by the seed no matter how trials are scheduled.
pub fn calculate_differences(config: &ExperimentConfig, k: usize) -> Result<DivergenceMetrics> {
    config.validate()?;
    let n = config.deck_size;
    let seed = config.seed.unwrap_or_else(rand::random);
    log::debug!("{:<32}{:<16}{:<16}", "computing differences", k, seed);
    let ref reference = Deck::shuffled(n, &mut Seeded::derive(seed, &k));
    let table = (0..config.num_trials)
        .into_par_iter()
        .map(|trial| Seeded::derive(seed, &(k, trial)))
        .map(|ref mut rng| config.variant.shuffle_n(reference, k, rng))
        .try_fold(
            || FrequencyTable::new(n),
            |mut table, deck| {
                deck.map(|ref deck| {
                    table.tally(deck);
                    table
                })
            },
        )
        .try_reduce(
            || FrequencyTable::new(n),
            |mut a, b| {
                a.absorb(&b);
                Ok(a)
            },
        )?;
    let metrics = DivergenceMetrics::from(&table.relative(reference));
    log::info!("{:<32}{:<16}{}", "computed differences", k, metrics);
    Ok(metrics)
}
