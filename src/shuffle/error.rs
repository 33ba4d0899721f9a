use thiserror::Error;

/// Contract violations inside a single shuffle. None of these are
/// recoverable; each one means the caller drove the shuffle wrongly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShuffleError {
    #[error("either the left or the right sub-deck (or both) must be non-empty")]
    InvalidMergeState,
    #[error("cannot split a deck of {0} cards, need at least 2")]
    InvalidSplitSize(usize),
    #[error("a deck needs at least one card")]
    EmptyDeck,
    #[error("token at position {0} appears earlier in the deck")]
    DuplicateToken(usize),
}

pub type Result<T> = std::result::Result<T, ShuffleError>;
