use super::source::RandomSource;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::hash::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

/// RandomSource backed by `rand`'s SmallRng (Xoshiro256++ on 64-bit targets).
///
/// equal seeds give equal streams. streams are *not* bit-compatible with
/// any other generator family; only the distribution of draws matters here.
#[derive(Debug, Clone)]
pub struct Seeded(SmallRng);

impl Seeded {
    pub fn new(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
    /// seeded from the operating system
    pub fn entropy() -> Self {
        Self(SmallRng::from_os_rng())
    }
    /// independent child stream for some labelled unit of work,
    /// e.g. a shuffle count or a (shuffle count, trial) pair.
    pub fn derive<H: Hash>(seed: u64, label: &H) -> Self {
        let ref mut hasher = DefaultHasher::default();
        seed.hash(hasher);
        label.hash(hasher);
        Self::new(hasher.finish())
    }
}

impl RandomSource for Seeded {
    fn next_uniform_int(&mut self, low: usize, high: usize) -> usize {
        assert!(low < high, "empty range {}..{}", low, high);
        self.0.random_range(low..high)
    }
}
