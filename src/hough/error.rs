use thiserror::Error;

/// Rejected edge-map input. The detector keeps its previous state on any of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoughError {
    #[error("edge image has no data")]
    EmptyImage,

    #[error("edge image has a zero dimension ({width}x{height})")]
    ZeroDimension { width: usize, height: usize },

    #[error("edge image stride {stride} is smaller than its width {width}")]
    InvalidStride { stride: usize, width: usize },

    #[error("edge image buffer too small: expected at least {expected} bytes, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },
}
