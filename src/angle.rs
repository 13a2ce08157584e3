//! Degree-binned angle utilities for the Hough parameter space.
//!
//! θ is discretized to one bin per integer degree over [0°, 360°). The table
//! caches `cos θ` and `sin θ` so that voting does not re-evaluate trig
//! functions per edge pixel.

/// Number of θ bins (one per integer degree).
pub const THETA_BINS: usize = 360;

pub const DEG2RAD: f64 = std::f64::consts::PI / 180.0;

/// Unit normal `(cos θ, sin θ)` for an integer-degree angle.
#[inline]
pub fn normal_direction(theta_deg: usize) -> (f64, f64) {
    let rad = theta_deg as f64 * DEG2RAD;
    (rad.cos(), rad.sin())
}

/// Precomputed `(cos θ, sin θ)` for every θ bin.
#[derive(Clone, Debug)]
pub struct DegreeTable {
    cos: [f64; THETA_BINS],
    sin: [f64; THETA_BINS],
}

impl Default for DegreeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DegreeTable {
    pub fn new() -> Self {
        let mut cos = [0.0; THETA_BINS];
        let mut sin = [0.0; THETA_BINS];
        for theta in 0..THETA_BINS {
            let (c, s) = normal_direction(theta);
            cos[theta] = c;
            sin[theta] = s;
        }
        Self { cos, sin }
    }

    /// `(cos θ, sin θ)` for `theta_deg` in `[0, THETA_BINS)`.
    #[inline]
    pub fn get(&self, theta_deg: usize) -> (f64, f64) {
        (self.cos[theta_deg], self.sin[theta_deg])
    }

    /// Iterate `(θ, cos θ, sin θ)` over all bins in ascending θ.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.cos
            .iter()
            .zip(self.sin.iter())
            .enumerate()
            .map(|(theta, (&c, &s))| (theta, c, s))
    }
}
