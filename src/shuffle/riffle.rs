use super::deck::Deck;
use super::error::Result;
use super::error::ShuffleError;
use super::merge::FairMerge;
use super::merge::Merge;
use super::merge::WeightedMerge;
use super::split::BinomialSplit;
use super::split::Split;
use super::split::UniformSplit;
use super::subdeck::SubDeck;
use crate::RandomSource;
use serde::Deserialize;
use serde::Serialize;

/// A Gilbert–Shannon–Reeds riffle shuffle, parameterized by how the deck
/// is cut and how the two packets are dropped back together.
///
/// 1. cut the top `r` cards into the right packet, the rest into the left
/// 2. repeatedly drop the *bottom* card of one packet onto the output
/// 3. the output, in drop order, is the shuffled deck
#[derive(Debug, Default, Clone, Copy)]
pub struct Riffle<S = UniformSplit, M = FairMerge> {
    split: S,
    merge: M,
}

impl Riffle<UniformSplit, FairMerge> {
    /// uniform cut with fair-coin drops, as in the reference experiment
    pub fn reference() -> Self {
        Self {
            split: UniformSplit,
            merge: FairMerge,
        }
    }
}

impl Riffle<BinomialSplit, WeightedMerge> {
    /// binomial cut with size-weighted drops, as the model is usually stated
    pub fn textbook() -> Self {
        Self {
            split: BinomialSplit,
            merge: WeightedMerge,
        }
    }
}

impl<S, M> Riffle<S, M>
where
    S: Split,
    M: Merge,
{
    pub fn new(split: S, merge: M) -> Self {
        Self { split, merge }
    }

    /// one riffle. a single card has nothing to cut and comes back as is,
    /// without consuming any randomness.
    pub fn shuffle<T, R>(&self, deck: &Deck<T>, rng: &mut R) -> Result<Deck<T>>
    where
        T: Clone,
        R: RandomSource,
    {
        let n = deck.len();
        if n < 2 {
            return Ok(deck.clone());
        }
        let r = self.split.split_point(n, rng)?;
        let (right, left) = deck.tokens().split_at(r);
        let ref mut right = SubDeck::from(right);
        let ref mut left = SubDeck::from(left);
        let mut shuffled = Vec::with_capacity(n);
        while right.remaining() + left.remaining() > 0 {
            let packet = match self
                .merge
                .should_take_from_right(left.remaining(), right.remaining(), rng)?
            {
                true => &mut *right,
                false => &mut *left,
            };
            let card = packet.take_bottom().ok_or(ShuffleError::InvalidMergeState)?;
            shuffled.push(card.clone());
        }
        Ok(Deck::permuted(shuffled))
    }

    /// k independent riffles in sequence. zero riffles is a copy.
    pub fn shuffle_n<T, R>(&self, deck: &Deck<T>, k: usize, rng: &mut R) -> Result<Deck<T>>
    where
        T: Clone,
        R: RandomSource,
    {
        (0..k).try_fold(deck.clone(), |deck, _| self.shuffle(&deck, rng))
    }
}

/// Which cut and drop rules a run uses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// uniform cut over 1..n-1, fair-coin drops
    #[default]
    Reference,
    /// binomial cut, size-weighted drops
    Textbook,
}

impl Variant {
    pub fn shuffle_n<T, R>(&self, deck: &Deck<T>, k: usize, rng: &mut R) -> Result<Deck<T>>
    where
        T: Clone,
        R: RandomSource,
    {
        match self {
            Self::Reference => Riffle::reference().shuffle_n(deck, k, rng),
            Self::Textbook => Riffle::textbook().shuffle_n(deck, k, rng),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Reference => write!(f, "reference"),
            Self::Textbook => write!(f, "textbook"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scripted;
    use crate::Seeded;

    fn sorted<T: Ord + Clone>(deck: &Deck<T>) -> Vec<T> {
        let mut tokens = deck.tokens().to_vec();
        tokens.sort();
        tokens
    }

    #[test]
    fn reproduces_documented_riffle() {
        // cut 5 to the right, then every coin says right
        let deck = Deck::try_from(vec![0, 7, 3, 8, 4, 9]).unwrap();
        let ref mut rng = Scripted::from(vec![5, 0, 0, 0, 0, 0]);
        let shuffled = Riffle::reference().shuffle(&deck, rng).unwrap();
        assert!(shuffled.tokens() == [4, 8, 3, 7, 0, 9]);
    }

    #[test]
    fn drops_from_the_bottom_of_each_packet() {
        // cut 2: right = [a b], left = [c d e]; drop L R L R L
        let deck = Deck::try_from(vec!['a', 'b', 'c', 'd', 'e']).unwrap();
        let ref mut rng = Scripted::from(vec![2, 1, 0, 1, 0, 1]);
        let shuffled = Riffle::reference().shuffle(&deck, rng).unwrap();
        assert!(shuffled.tokens() == ['e', 'b', 'd', 'a', 'c']);
    }

    #[test]
    fn is_a_permutation() {
        for seed in 0..64 {
            let ref mut rng = Seeded::new(seed);
            let deck = Deck::shuffled(1 + seed as usize, rng);
            let shuffled = Riffle::reference().shuffle(&deck, rng).unwrap();
            let textbook = Riffle::textbook().shuffle(&deck, rng).unwrap();
            assert!(sorted(&shuffled) == sorted(&deck));
            assert!(sorted(&textbook) == sorted(&deck));
        }
    }

    #[test]
    fn single_card_is_unchanged() {
        let deck = Deck::try_from(vec![42]).unwrap();
        let ref mut rng = Scripted::from(vec![0]);
        assert!(Riffle::reference().shuffle(&deck, rng).unwrap() == deck);
        assert!(Riffle::textbook().shuffle_n(&deck, 7, rng).unwrap() == deck);
        assert!(rng.consumed() == 0);
    }

    #[test]
    fn is_deterministic_per_seed() {
        let deck = Deck::canonical(52);
        let a = Riffle::reference().shuffle(&deck, &mut Seeded::new(0)).unwrap();
        let b = Riffle::reference().shuffle(&deck, &mut Seeded::new(0)).unwrap();
        assert!(a == b);
    }

    #[test]
    fn does_not_mutate_input() {
        let deck = Deck::canonical(10);
        let ref mut rng = Seeded::new(1);
        let _ = Riffle::reference().shuffle_n(&deck, 5, rng).unwrap();
        assert!(deck == Deck::canonical(10));
    }

    #[test]
    fn zero_shuffles_is_a_copy() {
        let deck = Deck::canonical(8);
        let ref mut rng = Scripted::from(vec![0]);
        assert!(Riffle::reference().shuffle_n(&deck, 0, rng).unwrap() == deck);
        assert!(rng.consumed() == 0);
    }

    #[test]
    fn empty_cut_reverses_the_deck() {
        // binomial cut of zero: every card drops off the bottom of the left
        let deck = Deck::canonical(4);
        let ref mut rng = Scripted::from(vec![1]);
        let shuffled = Riffle::textbook().shuffle(&deck, rng).unwrap();
        assert!(shuffled.tokens() == [3, 2, 1, 0]);
    }

    #[test]
    fn mixed_policies_compose() {
        let deck = Deck::canonical(30);
        let ref mut rng = Seeded::new(12);
        let shuffled = Riffle::new(UniformSplit, WeightedMerge)
            .shuffle_n(&deck, 4, rng)
            .unwrap();
        assert!(sorted(&shuffled) == sorted(&deck));
        assert!(shuffled != deck);
    }

    #[test]
    fn variants_dispatch() {
        let deck = Deck::canonical(20);
        let a = Variant::Reference.shuffle_n(&deck, 3, &mut Seeded::new(2)).unwrap();
        let b = Riffle::reference().shuffle_n(&deck, 3, &mut Seeded::new(2)).unwrap();
        let c = Variant::Textbook.shuffle_n(&deck, 3, &mut Seeded::new(2)).unwrap();
        let d = Riffle::textbook().shuffle_n(&deck, 3, &mut Seeded::new(2)).unwrap();
        assert!(a == b);
        assert!(c == d);
    }
}
