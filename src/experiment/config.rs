use super::error::ExperimentError;
use super::error::Result;
use crate::Variant;
use serde::Deserialize;
use serde::Serialize;

/// Everything one run of the mixing experiment depends on.
///
/// nothing here is global: two configs in the same process never
/// influence each other, and a config with a seed fully determines
/// its results regardless of how many threads compute them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub deck_size: usize,
    pub num_trials: usize,
    pub shuffle_counts: Vec<usize>,
    pub seed: Option<u64>,
    pub variant: Variant,
    /// degree of parallelism; None means one thread per logical CPU
    pub threads: Option<usize>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self::new(
            crate::DECK_SIZE,
            crate::NUM_TRIALS,
            (1..=crate::MAX_SHUFFLES).collect(),
        )
    }
}

impl ExperimentConfig {
    pub fn new(deck_size: usize, num_trials: usize, shuffle_counts: Vec<usize>) -> Self {
        Self {
            deck_size,
            num_trials,
            shuffle_counts,
            seed: None,
            variant: Variant::default(),
            threads: None,
        }
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.deck_size == 0 {
            return Err(ExperimentError::InvalidConfig("deck_size must be positive".into()));
        }
        if self.num_trials == 0 {
            return Err(ExperimentError::InvalidConfig("num_trials must be positive".into()));
        }
        if self.shuffle_counts.is_empty() {
            return Err(ExperimentError::InvalidConfig("shuffle_counts is empty".into()));
        }
        if self.threads == Some(0) {
            return Err(ExperimentError::InvalidConfig("threads must be positive".into()));
        }
        Ok(())
    }
}

impl std::fmt::Display for ExperimentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} cards x {} trials, {} shuffle counts, {} riffle",
            self.deck_size,
            self.num_trials,
            self.shuffle_counts.len(),
            self.variant
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_classic_setup() {
        let config = ExperimentConfig::default();
        assert!(config.deck_size == 52);
        assert!(config.num_trials == 10000);
        assert!(config.shuffle_counts == (1..=20).collect::<Vec<_>>());
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_deck() {
        let config = ExperimentConfig::new(0, 10, vec![1]);
        assert!(matches!(config.validate(), Err(ExperimentError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_trials() {
        let config = ExperimentConfig::new(52, 0, vec![1]);
        assert!(matches!(config.validate(), Err(ExperimentError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_no_shuffle_counts() {
        let config = ExperimentConfig::new(52, 10, vec![]);
        assert!(matches!(config.validate(), Err(ExperimentError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_threads() {
        let config = ExperimentConfig::new(52, 10, vec![1]).with_threads(0);
        assert!(matches!(config.validate(), Err(ExperimentError::InvalidConfig(_))));
    }

    #[test]
    fn accepts_zero_shuffles() {
        assert!(ExperimentConfig::new(1, 1, vec![0]).validate().is_ok());
    }

    #[test]
    fn json_roundtrip_keeps_variant_name() {
        let config = ExperimentConfig::default().with_variant(Variant::Textbook);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"textbook\""));
        assert!(serde_json::from_str::<ExperimentConfig>(&json).unwrap() == config);
    }
}
