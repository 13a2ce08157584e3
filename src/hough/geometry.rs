use crate::angle::THETA_BINS;
use serde::Serialize;

/// Image-derived dimensions of a Hough space.
///
/// The polar origin is the integer image centre. Radii span
/// `[-hough_height, +hough_height]` and map onto `rho_bins` rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoughGeometry {
    pub image_width: usize,
    pub image_height: usize,
    pub center_x: usize,
    pub center_y: usize,
    /// Largest possible |r| measured from the centre: `√(w² + h²) / 2`.
    pub hough_height: f64,
    /// Accumulator height: `round(2 · hough_height)`.
    pub rho_bins: usize,
    /// Accumulator width: always [`THETA_BINS`] for a non-empty space.
    pub theta_bins: usize,
}

impl HoughGeometry {
    pub fn new(image_width: usize, image_height: usize) -> Self {
        let hough_height = (image_width as f64).hypot(image_height as f64) / 2.0;
        Self {
            image_width,
            image_height,
            center_x: image_width / 2,
            center_y: image_height / 2,
            hough_height,
            rho_bins: (2.0 * hough_height).round() as usize,
            theta_bins: THETA_BINS,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rho_bins == 0 || self.theta_bins == 0
    }

    /// Row of the accumulator that radius `r` votes into.
    ///
    /// `round(r + hough_height)` can land exactly on `rho_bins` for pixels at
    /// the far corner; such votes are clamped into the last row.
    #[inline]
    pub fn rho_bin(&self, r: f64) -> usize {
        let idx = (r + self.hough_height).round();
        if idx <= 0.0 {
            0
        } else {
            (idx as usize).min(self.rho_bins.saturating_sub(1))
        }
    }

    /// Signed radius represented by accumulator row `bin`.
    #[inline]
    pub fn rho_of_bin(&self, bin: usize) -> f64 {
        bin as f64 - self.hough_height
    }

    /// Pixel offset from the polar origin.
    #[inline]
    pub fn offset(&self, x: usize, y: usize) -> (f64, f64) {
        (
            x as f64 - self.center_x as f64,
            y as f64 - self.center_y as f64,
        )
    }
}
