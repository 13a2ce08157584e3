//! Local-maximum suppression over the accumulator.
use super::space::HoughSpace;
use crate::image::ImageView;
use log::debug;
use serde::{Deserialize, Serialize};

/// Neighbourhood examined around a candidate bin, in bins per axis.
///
/// Each side extends `size / 2` (floored) bins from the candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NmsWindow {
    pub rho: usize,
    pub theta: usize,
}

impl Default for NmsWindow {
    fn default() -> Self {
        Self::square(9)
    }
}

impl NmsWindow {
    pub const fn square(size: usize) -> Self {
        Self {
            rho: size,
            theta: size,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.rho == 0 && self.theta == 0
    }
}

/// An accumulator bin that passed threshold and local-maximum tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoughPeak {
    pub rho_bin: usize,
    pub theta_deg: usize,
    pub votes: u32,
}

impl HoughSpace {
    /// True iff no bin in the window around `(rho, theta)` holds strictly more
    /// than `value` votes.
    ///
    /// The window is clipped to the grid; θ does not wrap around. Equal
    /// neighbours do not disqualify the candidate, so a flat peak can report
    /// several adjacent maxima. Returns `false` for an out-of-range position,
    /// an all-zero window, or an empty space.
    pub fn is_local_max(&self, value: u32, rho: usize, theta: usize, window: NmsWindow) -> bool {
        let acc = &self.accumulator;
        if window.is_zero() || rho >= acc.height() || theta >= acc.width() {
            return false;
        }

        let (dr, dt) = (window.rho / 2, window.theta / 2);
        let r_lo = rho.saturating_sub(dr);
        let r_hi = (rho + dr).min(acc.height() - 1);
        let t_lo = theta.saturating_sub(dt);
        let t_hi = (theta + dt).min(acc.width() - 1);

        for r in r_lo..=r_hi {
            if acc.row(r)[t_lo..=t_hi].iter().any(|&v| v > value) {
                return false;
            }
        }
        true
    }

    /// Bins with at least `threshold` votes that are local maxima within
    /// `window`, in row-major (radius outer, θ inner) scan order.
    ///
    /// A zero threshold yields no peaks.
    pub fn peaks(&self, threshold: u32, window: NmsWindow) -> Vec<HoughPeak> {
        if threshold == 0 || self.accumulator.is_empty() {
            return Vec::new();
        }

        let mut peaks = Vec::new();
        for (rho, row) in self.accumulator.rows().enumerate() {
            for (theta, &votes) in row.iter().enumerate() {
                if votes >= threshold && self.is_local_max(votes, rho, theta, window) {
                    peaks.push(HoughPeak {
                        rho_bin: rho,
                        theta_deg: theta,
                        votes,
                    });
                }
            }
        }

        debug!(
            "Hough peaks: {} above threshold {} (window {}x{})",
            peaks.len(),
            threshold,
            window.rho,
            window.theta
        );
        peaks
    }
}
