use super::config::ExperimentConfig;
use super::error::Result;
use super::metrics::DivergenceMetrics;
use super::pool::Pool;

/// The full mixing study: divergence from uniform for every requested
/// shuffle count.
pub struct Experiment {
    config: ExperimentConfig,
    pool: Pool,
}

impl Experiment {
    /// validates the config and fixes a seed if none was given, so that
    /// every shuffle count in the run shares one reproducible root.
    pub fn new(mut config: ExperimentConfig) -> Result<Self> {
        config.validate()?;
        let seed = *config.seed.get_or_insert_with(rand::random);
        log::info!("{:<32}{}", "configured experiment", config);
        log::info!("{:<32}{}", "seeded experiment", seed);
        let pool = Pool::new(config.threads)?;
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// every shuffle count with its own outcome. one count failing
    /// leaves the others intact.
    pub fn each(&self) -> Vec<(usize, Result<DivergenceMetrics>)> {
        self.pool.map(&self.config, &self.config.shuffle_counts)
    }

    /// all shuffle counts, in request order, or the first failure
    pub fn collect(&self) -> Result<Vec<(usize, DivergenceMetrics)>> {
        self.each()
            .into_iter()
            .map(|(k, metrics)| metrics.map(|m| (k, m)))
            .collect()
    }

    pub fn run(config: ExperimentConfig) -> Result<Vec<(usize, DivergenceMetrics)>> {
        Self::new(config)?.collect()
    }
}
