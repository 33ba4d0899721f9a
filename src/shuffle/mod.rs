mod deck;
mod error;
mod merge;
mod riffle;
mod split;
mod subdeck;

pub use deck::*;
pub use error::ShuffleError;
pub use merge::*;
pub use riffle::*;
pub use split::*;
pub use subdeck::*;
