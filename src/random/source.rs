/// The only door through which randomness enters a shuffle.
///
/// every stochastic step takes its generator explicitly, so two runs
/// handed equal sources make equal draws, and parallel workers never
/// share state unless they are given the same source.
pub trait RandomSource {
    /// uniform draw from `low..high`. panics if the range is empty.
    fn next_uniform_int(&mut self, low: usize, high: usize) -> usize;

    /// fair coin, true with probability exactly 1/2
    fn coin(&mut self) -> bool {
        self.next_uniform_int(0, 2) == 0
    }
}

impl<R> RandomSource for &mut R
where
    R: RandomSource + ?Sized,
{
    fn next_uniform_int(&mut self, low: usize, high: usize) -> usize {
        (**self).next_uniform_int(low, high)
    }
    fn coin(&mut self) -> bool {
        (**self).coin()
    }
}
