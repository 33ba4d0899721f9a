use crate::Count;
use crate::Deck;
use crate::Probability;
use crate::Token;

/// Tally of which token landed in which position, over many decks.
///
/// rows are positions, columns are tokens, both indexed 0..n-1.
/// every row sums to the number of decks tallied.
/// tallying is commutative and associative, so tables built on
/// different threads can be merged in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    n: usize,
    trials: usize,
    counts: Vec<Count>,
}

impl FrequencyTable {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            trials: 0,
            counts: vec![0; n * n],
        }
    }
    /// tally every deck in the iterator
    pub fn collect<'d, I>(n: usize, decks: I) -> Self
    where
        I: IntoIterator<Item = &'d Deck<Token>>,
    {
        decks.into_iter().fold(Self::new(n), |mut table, deck| {
            table.tally(deck);
            table
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }
    pub fn trials(&self) -> usize {
        self.trials
    }
    pub fn count(&self, position: usize, token: Token) -> Count {
        self.counts[position * self.n + token]
    }
    pub fn row_sum(&self, position: usize) -> Count {
        self.counts[position * self.n..(position + 1) * self.n]
            .iter()
            .sum()
    }

    /// record one observed deck. tokens must be canonical, 0..n-1.
    pub fn tally(&mut self, deck: &Deck<Token>) {
        assert!(deck.len() == self.n, "deck of {} in table of {}", deck.len(), self.n);
        deck.iter()
            .enumerate()
            .for_each(|(position, &token)| self.counts[position * self.n + token] += 1);
        self.trials += 1;
    }

    /// fold another table's tallies into this one
    pub fn absorb(&mut self, other: &Self) {
        assert!(self.n == other.n);
        self.trials += other.trials;
        self.counts
            .iter_mut()
            .zip(other.counts.iter())
            .for_each(|(a, b)| *a += b);
    }

    /// relative frequencies, count / trials, per (position, token).
    ///
    /// the reference deck is tallied once more into every position so each
    /// token is witnessed at least once per row, and that padding is then
    /// taken back out before normalizing. no cell is ever left undefined,
    /// and the result is exactly the observed frequency.
    pub fn relative(&self, reference: &Deck<Token>) -> RelativeFrequencies {
        assert!(reference.len() == self.n);
        assert!(self.trials > 0, "no decks tallied");
        let mut padded = self.counts.clone();
        for position in 0..self.n {
            for &token in reference.iter() {
                padded[position * self.n + token] += 1;
            }
        }
        debug_assert!(padded.iter().all(|&c| c >= 1));
        let values = padded
            .into_iter()
            .map(|c| c - 1)
            .map(|c| c as Probability / self.trials as Probability)
            .collect();
        RelativeFrequencies { n: self.n, values }
    }
}

/// Row-major n×n table of observed probabilities that token t sits at
/// position p. each row sums to one.
#[derive(Debug, Clone, PartialEq)]
pub struct RelativeFrequencies {
    n: usize,
    values: Vec<Probability>,
}

impl RelativeFrequencies {
    pub fn n(&self) -> usize {
        self.n
    }
    pub fn get(&self, position: usize, token: Token) -> Probability {
        self.values[position * self.n + token]
    }
    pub fn flatten(&self) -> &[Probability] {
        &self.values
    }
    /// the density every cell has under a perfectly uniform shuffle
    pub fn uniform(&self) -> Probability {
        1. / self.n as Probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Riffle;
    use crate::Seeded;

    fn decks(n: usize, trials: usize, k: usize, seed: u64) -> (Deck, Vec<Deck>) {
        let ref mut rng = Seeded::new(seed);
        let reference = Deck::shuffled(n, rng);
        let decks = (0..trials)
            .map(|_| Riffle::reference().shuffle_n(&reference, k, rng).unwrap())
            .collect();
        (reference, decks)
    }

    #[test]
    fn rows_sum_to_trials() {
        let (_, ref decks) = decks(13, 500, 3, 0);
        let table = FrequencyTable::collect(13, decks);
        assert!(table.trials() == 500);
        assert!((0..13).all(|p| table.row_sum(p) == 500));
    }

    #[test]
    fn columns_sum_to_trials() {
        let (_, ref decks) = decks(13, 500, 3, 1);
        let table = FrequencyTable::collect(13, decks);
        assert!((0..13).all(|t| (0..13).map(|p| table.count(p, t)).sum::<Count>() == 500));
    }

    #[test]
    fn tallies_positions() {
        let deck = Deck::try_from(vec![2, 0, 1]).unwrap();
        let table = FrequencyTable::collect(3, [&deck, &deck]);
        assert!(table.count(0, 2) == 2);
        assert!(table.count(1, 0) == 2);
        assert!(table.count(2, 1) == 2);
        assert!(table.count(0, 0) == 0);
    }

    #[test]
    fn absorb_matches_single_pass() {
        let (_, ref decks) = decks(10, 300, 2, 2);
        let whole = FrequencyTable::collect(10, decks);
        let mut left = FrequencyTable::collect(10, &decks[..120]);
        let right = FrequencyTable::collect(10, &decks[120..]);
        left.absorb(&right);
        assert!(left == whole);
    }

    #[test]
    fn order_of_tallying_is_irrelevant() {
        let (_, ref decks) = decks(10, 300, 2, 3);
        let forward = FrequencyTable::collect(10, decks);
        let backward = FrequencyTable::collect(10, decks.iter().rev());
        assert!(forward == backward);
    }

    #[test]
    fn relative_rows_sum_to_one() {
        let (ref reference, ref decks) = decks(13, 400, 4, 4);
        let freqs = FrequencyTable::collect(13, decks).relative(reference);
        for p in 0..13 {
            let sum = (0..13).map(|t| freqs.get(p, t)).sum::<Probability>();
            assert!((sum - 1.).abs() < 1e-12);
        }
    }

    #[test]
    fn relative_undoes_padding() {
        let deck = Deck::try_from(vec![1, 0]).unwrap();
        let freqs = FrequencyTable::collect(2, [&deck, &deck, &Deck::canonical(2)])
            .relative(&Deck::canonical(2));
        assert!((freqs.get(0, 1) - 2. / 3.).abs() < 1e-12);
        assert!((freqs.get(0, 0) - 1. / 3.).abs() < 1e-12);
        assert!((freqs.get(1, 0) - 2. / 3.).abs() < 1e-12);
    }

    #[test]
    fn unshuffled_decks_are_point_masses() {
        let reference = Deck::try_from(vec![2, 0, 1]).unwrap();
        let freqs = FrequencyTable::collect(3, [&reference; 5]).relative(&reference);
        assert!(freqs.get(0, 2) == 1.);
        assert!(freqs.get(0, 0) == 0.);
        assert!(freqs.uniform() == 1. / 3.);
    }
}
