//! cashtrend-core: delta series, trend classification, and deficit findings

pub mod classifier;
pub mod model;
pub mod report;

pub use classifier::{classify, Scenario};
pub use model::{DayDelta, DeltaSeries};
pub use report::{analyze, deficit_finding, mixed_finding, surplus_finding, Finding, CURRENCY};
