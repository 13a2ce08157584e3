use super::accumulator::Accumulator;
use super::error::HoughError;
use super::geometry::HoughGeometry;
use super::space::HoughSpace;
use crate::angle::DegreeTable;
use crate::image::{ImageU8, ImageView};
use log::debug;

/// Default intensity cutoff: pixels brighter than this are edge pixels.
pub const DEFAULT_PIXEL_MIN_VALUE: u8 = 250;

/// Vote every edge pixel of `edges` into a fresh (r, θ) accumulator.
///
/// A pixel is an edge pixel iff its intensity is strictly greater than
/// `pixel_min_value`. For each such pixel and every integer θ in [0°, 360°),
/// `r = (x - cx)·cos θ + (y - cy)·sin θ` is binned as
/// `round(r + hough_height)` (clamped to the grid) and that bin gains one vote.
///
/// Cost is O(edge pixels × 360); every angle is visited.
pub fn hough_transform(
    edges: &ImageU8<'_>,
    pixel_min_value: u8,
) -> Result<HoughSpace, HoughError> {
    edges.validate()?;

    let geometry = HoughGeometry::new(edges.w, edges.h);
    let trig = DegreeTable::new();
    let mut accumulator = Accumulator::new(geometry.theta_bins, geometry.rho_bins);
    let mut edge_pixels = 0usize;

    for (y, row) in edges.rows().enumerate() {
        for (x, &intensity) in row.iter().enumerate() {
            if intensity <= pixel_min_value {
                continue;
            }
            edge_pixels += 1;
            let (dx, dy) = geometry.offset(x, y);
            for (theta, cos_t, sin_t) in trig.iter() {
                let r = dx * cos_t + dy * sin_t;
                accumulator.increment(geometry.rho_bin(r), theta);
            }
        }
    }

    debug!(
        "Hough transform: {}x{} image, {} edge pixels, accumulator {}x{} (theta x rho)",
        edges.w, edges.h, edge_pixels, geometry.theta_bins, geometry.rho_bins
    );

    Ok(HoughSpace {
        geometry,
        accumulator,
        edge_pixels,
    })
}
