//! Straight-line detection on binary edge maps with the (r, θ) Hough transform.
//!
//! Feed an 8-bit edge map (bright pixels are edges) to
//! [`hough::hough_transform`] or a [`HoughLineDetector`], then extract line
//! segments whose accumulator bins pass a vote threshold and a local-maximum
//! test. [`edges::edge_mask`] turns an ordinary grayscale image into such an
//! edge map.

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod hough;
pub mod image;

// Supporting modules
pub mod angle;
pub mod config;
pub mod edges;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::HoughLineDetector;
pub use crate::diagnostics::DetectionReport;
pub use crate::hough::{
    hough_transform, Accumulator, HoughError, HoughParams, HoughSpace, LineSegment, NmsWindow,
};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use hough_lines::prelude::*;
///
/// # fn main() {
/// let (w, h) = (64usize, 64usize);
/// let edges = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &edges };
///
/// let mut det = HoughLineDetector::new();
/// if det.transform(&img, 250).is_ok() {
///     for line in det.lines(40) {
///         println!("{:?} -> {:?}", line.start, line.end);
///     }
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{HoughLineDetector, HoughParams, LineSegment};
}
