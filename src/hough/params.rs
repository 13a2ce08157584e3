use super::peaks::NmsWindow;
use super::transform::DEFAULT_PIXEL_MIN_VALUE;
use serde::{Deserialize, Serialize};

/// Tunables for one detection pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Pixels strictly brighter than this vote.
    pub pixel_min_value: u8,
    /// Minimum votes for a bin to become a line; 0 disables extraction.
    pub vote_threshold: u32,
    /// Local-maximum neighbourhood.
    pub nms_window: NmsWindow,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            pixel_min_value: DEFAULT_PIXEL_MIN_VALUE,
            vote_threshold: 100,
            nms_window: NmsWindow::default(),
        }
    }
}
