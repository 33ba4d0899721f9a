use super::config::ExperimentConfig;
use super::differences::calculate_differences;
use super::error::Result;
use super::metrics::DivergenceMetrics;
use rayon::prelude::*;

/// Fixed-size set of worker threads that fans the per-shuffle-count
/// computation out across shuffle counts. each count is owned by one
/// worker end to end, and results come back in the order requested.
pub struct Pool(rayon::ThreadPool);

impl Pool {
    /// `None` sizes the pool to the number of logical CPUs
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let threads = threads.unwrap_or_else(num_cpus::get);
        log::debug!("{:<32}{:<16}", "spawning worker pool", threads);
        Ok(Self(
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("riffle-{}", i))
                .build()?,
        ))
    }
    pub fn threads(&self) -> usize {
        self.0.current_num_threads()
    }
    /// one result per shuffle count, failures kept per count
    pub fn map(
        &self,
        config: &ExperimentConfig,
        counts: &[usize],
    ) -> Vec<(usize, Result<DivergenceMetrics>)> {
        self.0.install(|| {
            counts
                .par_iter()
                .map(|&k| (k, calculate_differences(config, k)))
                .collect()
        })
    }
}
