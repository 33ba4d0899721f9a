use super::error::Result;
use super::error::ShuffleError;
use crate::Arbitrary;
use crate::RandomSource;
use crate::Token;
use std::collections::HashSet;
use std::hash::Hash;

/// An ordered sequence of distinct tokens, index 0 being the top card.
///
/// shuffling never mutates a Deck in place; every shuffle hands back a new one.
/// the only way in from arbitrary data is `TryFrom<Vec<T>>`, which enforces
/// non-emptiness and distinctness.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck<T = Token>(Vec<T>);

impl<T> Deck<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn tokens(&self) -> &[T] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
    pub fn position_of(&self, token: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.0.iter().position(|t| t == token)
    }
    /// crate-internal constructor for sequences already known to be
    /// permutations of a valid deck, e.g. the output of a merge.
    pub(crate) fn permuted(tokens: Vec<T>) -> Self {
        Self(tokens)
    }
}

impl Deck<Token> {
    /// tokens 0..n-1 in order
    pub fn canonical(n: usize) -> Self {
        Self((0..n).collect())
    }
    /// uniformly random permutation of the canonical tokens (Fisher–Yates)
    pub fn shuffled<R: RandomSource>(n: usize, rng: &mut R) -> Self {
        let mut tokens = (0..n).collect::<Vec<Token>>();
        for i in (1..n).rev() {
            let j = rng.next_uniform_int(0, i + 1);
            tokens.swap(i, j);
        }
        Self(tokens)
    }
}

impl<T> TryFrom<Vec<T>> for Deck<T>
where
    T: Eq + Hash,
{
    type Error = ShuffleError;
    fn try_from(tokens: Vec<T>) -> Result<Self> {
        if tokens.is_empty() {
            return Err(ShuffleError::EmptyDeck);
        }
        let mut seen = HashSet::with_capacity(tokens.len());
        match tokens.iter().position(|t| !seen.insert(t)) {
            Some(i) => Err(ShuffleError::DuplicateToken(i)),
            None => Ok(Self(tokens)),
        }
    }
}

impl<T> From<Deck<T>> for Vec<T> {
    fn from(deck: Deck<T>) -> Self {
        deck.0
    }
}

impl Arbitrary for Deck<Token> {
    fn random<R: RandomSource>(rng: &mut R) -> Self {
        Self::shuffled(crate::DECK_SIZE, rng)
    }
}

impl<T> std::fmt::Display for Deck<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, token) in self.0.iter().enumerate() {
            match i {
                0 => write!(f, "{}", token)?,
                _ => write!(f, " {}", token)?,
            }
        }
        write!(f, "]")
    }
}
