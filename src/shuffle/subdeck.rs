/// A borrowed packet cut from a Deck. cards leave only from the bottom
/// (the last remaining index), and the view shrinks until it is empty.
#[derive(Debug, Clone, Copy)]
pub struct SubDeck<'a, T> {
    cards: &'a [T],
    remaining: usize,
}

impl<'a, T> From<&'a [T]> for SubDeck<'a, T> {
    fn from(cards: &'a [T]) -> Self {
        Self {
            cards,
            remaining: cards.len(),
        }
    }
}

impl<'a, T> SubDeck<'a, T> {
    pub fn remaining(&self) -> usize {
        self.remaining
    }
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }
    /// remove and return the bottom card, if any
    pub fn take_bottom(&mut self) -> Option<&'a T> {
        match self.remaining {
            0 => None,
            n => {
                self.remaining = n - 1;
                self.cards.get(n - 1)
            }
        }
    }
}
