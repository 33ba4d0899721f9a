mod chart;
mod report;

pub use chart::*;
pub use report::*;
