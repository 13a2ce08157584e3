//! Serializable run summaries for tools and tests.

pub mod report;
pub mod timing;

pub use report::{AccumulatorSummary, DetectionReport};
pub use timing::{StageTiming, TimingBreakdown};
