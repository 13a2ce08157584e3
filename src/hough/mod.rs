//! Straight-line detection by voting in (r, θ) space.
//!
//! The pipeline has two phases:
//!
//! - Accumulation ([`hough_transform`]): every edge pixel votes for each of
//!   the 360 integer-degree lines through it, using the normal form
//!   `r = x·cos θ + y·sin θ` with the integer image centre as origin. Pixels
//!   that share a line pile their votes into the same `(r, θ)` bin.
//! - Extraction ([`HoughSpace::lines`]): bins with enough votes that are not
//!   exceeded anywhere in a 9×9 neighbourhood are mapped back to two image
//!   points per line.
//!
//! Accumulation returns a value ([`HoughSpace`]) instead of mutating shared
//! state, so independent images can be processed concurrently without
//! coordination. [`crate::detector::HoughLineDetector`] wraps it for callers
//! that want a stateful transform-then-query interface.
//!
//! Notes
//! - Output order is the accumulator scan order (radius outer, θ inner), not
//!   vote strength.
//! - Broad peaks with equal neighbouring counts produce several near-duplicate
//!   lines; callers that need one line per peak must deduplicate.

mod accumulator;
mod error;
mod geometry;
mod lines;
mod params;
mod peaks;
mod space;
mod transform;

pub use accumulator::Accumulator;
pub use error::HoughError;
pub use geometry::HoughGeometry;
pub use lines::{DetectedLine, LineSegment};
pub use params::HoughParams;
pub use peaks::{HoughPeak, NmsWindow};
pub use space::HoughSpace;
pub use transform::{hough_transform, DEFAULT_PIXEL_MIN_VALUE};
