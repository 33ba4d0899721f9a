use super::error::Result;
use super::error::ShuffleError;
use crate::RandomSource;

/// How a deck of n cards is cut: the number of cards that go to the
/// right-hand packet (the top `r` cards). the left packet takes the rest.
pub trait Split {
    fn split_point<R: RandomSource>(&self, n: usize, rng: &mut R) -> Result<usize>;
}

/// Cut uniformly at one of 1..n-1, so neither packet is ever empty.
/// this is the cut the reference experiment uses.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformSplit;

impl Split for UniformSplit {
    fn split_point<R: RandomSource>(&self, n: usize, rng: &mut R) -> Result<usize> {
        match n {
            0 | 1 => Err(ShuffleError::InvalidSplitSize(n)),
            _ => Ok(rng.next_uniform_int(1, n)),
        }
    }
}

/// Cut at Binomial(n, 1/2) by sending each card right on a fair coin,
/// as in the textbook GSR model. either packet may come out empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct BinomialSplit;

impl Split for BinomialSplit {
    fn split_point<R: RandomSource>(&self, n: usize, rng: &mut R) -> Result<usize> {
        match n {
            0 | 1 => Err(ShuffleError::InvalidSplitSize(n)),
            _ => Ok((0..n).filter(|_| rng.coin()).count()),
        }
    }
}
