mod config;
mod differences;
mod error;
mod experiment;
mod frequency;
mod metrics;
mod pool;

pub use config::*;
pub use differences::*;
pub use error::ExperimentError;
pub use experiment::*;
pub use frequency::*;
pub use metrics::*;
pub use pool::*;
