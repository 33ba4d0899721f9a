mod scripted;
mod seeded;
mod source;

pub use scripted::*;
pub use seeded::*;
pub use source::*;
