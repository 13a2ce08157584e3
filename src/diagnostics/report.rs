use super::timing::TimingBreakdown;
use crate::hough::{DetectedLine, HoughGeometry, HoughParams, HoughSpace};
use serde::Serialize;

/// Shape and vote statistics of an accumulator.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulatorSummary {
    pub width: usize,
    pub height: usize,
    pub max_votes: u32,
    pub total_votes: u64,
}

impl AccumulatorSummary {
    pub fn from_space(space: &HoughSpace) -> Self {
        let acc = space.accumulator();
        Self {
            width: acc.width(),
            height: acc.height(),
            max_votes: acc.max_votes(),
            total_votes: acc.total_votes(),
        }
    }
}

/// Outcome of one transform + extraction pass.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub params: HoughParams,
    pub geometry: HoughGeometry,
    pub edge_pixels: usize,
    pub accumulator: AccumulatorSummary,
    pub lines: Vec<DetectedLine>,
    pub timing: TimingBreakdown,
}
