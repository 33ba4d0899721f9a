use super::error::Result;
use super::error::ShuffleError;
use crate::RandomSource;

/// Decides, card by card, which packet drops next during a riffle.
///
/// when either packet is empty the answer is forced and no randomness is
/// consumed. asking with both packets empty is a driver bug.
pub trait Merge {
    /// the choice when both packets still hold cards
    fn choose<R: RandomSource>(&self, n_left: usize, n_right: usize, rng: &mut R) -> bool;

    fn should_take_from_right<R: RandomSource>(
        &self,
        n_left: usize,
        n_right: usize,
        rng: &mut R,
    ) -> Result<bool> {
        match (n_left, n_right) {
            (0, 0) => Err(ShuffleError::InvalidMergeState),
            (0, _) => Ok(true),
            (_, 0) => Ok(false),
            (l, r) => Ok(self.choose(l, r, rng)),
        }
    }
}

/// Fair coin regardless of packet sizes. reproduces the reference
/// experiment, which departs from the textbook GSR drop rule here.
#[derive(Debug, Default, Clone, Copy)]
pub struct FairMerge;

impl Merge for FairMerge {
    fn choose<R: RandomSource>(&self, _: usize, _: usize, rng: &mut R) -> bool {
        rng.coin()
    }
}

/// Drop from the right with probability n_right / (n_left + n_right),
/// the textbook GSR rule.
#[derive(Debug, Default, Clone, Copy)]
pub struct WeightedMerge;

impl Merge for WeightedMerge {
    fn choose<R: RandomSource>(&self, n_left: usize, n_right: usize, rng: &mut R) -> bool {
        rng.next_uniform_int(0, n_left + n_right) < n_right
    }
}
