use super::accumulator::Accumulator;
use super::geometry::HoughGeometry;

/// Result of one accumulation pass: the vote grid plus the geometry needed
/// to map bins back into image coordinates.
///
/// A default-constructed space is empty (0×0 grid); extraction on it
/// yields no lines.
#[derive(Clone, Debug, Default)]
pub struct HoughSpace {
    pub(crate) geometry: HoughGeometry,
    pub(crate) accumulator: Accumulator,
    pub(crate) edge_pixels: usize,
}

impl HoughSpace {
    /// Assemble a space from a precomputed grid. Returns `None` when the grid
    /// dimensions disagree with `geometry`.
    pub fn from_parts(geometry: HoughGeometry, accumulator: Accumulator) -> Option<Self> {
        if accumulator.width() != geometry.theta_bins || accumulator.height() != geometry.rho_bins
        {
            return None;
        }
        Some(Self {
            geometry,
            accumulator,
            edge_pixels: 0,
        })
    }

    pub fn geometry(&self) -> &HoughGeometry {
        &self.geometry
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    /// Number of pixels that cast votes.
    pub fn edge_pixels(&self) -> usize {
        self.edge_pixels
    }

    pub fn is_empty(&self) -> bool {
        self.accumulator.is_empty()
    }
}
