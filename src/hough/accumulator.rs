//! Dense vote grid indexed by `(rho_bin, theta_deg)`.
//!
//! Rows are radius bins, columns are θ bins, stored row-major. All accessors
//! are bounds-checked; out-of-range reads return `None` and out-of-range
//! writes are ignored.
use crate::image::ImageView;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accumulator {
    width: usize,
    height: usize,
    data: Vec<u32>,
}

impl Accumulator {
    /// Zeroed grid with `width` θ bins and `height` radius bins.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Wrap existing row-major vote counts. Returns `None` on a size mismatch.
    pub fn from_votes(width: usize, height: usize, data: Vec<u32>) -> Option<Self> {
        (width.checked_mul(height)? == data.len()).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Number of θ bins.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of radius bins.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn index(&self, rho: usize, theta: usize) -> Option<usize> {
        (rho < self.height && theta < self.width).then(|| rho * self.width + theta)
    }

    #[inline]
    pub fn get(&self, rho: usize, theta: usize) -> Option<u32> {
        self.index(rho, theta).map(|i| self.data[i])
    }

    /// Overwrite a bin; returns `false` when `(rho, theta)` is out of range.
    pub fn set(&mut self, rho: usize, theta: usize, votes: u32) -> bool {
        match self.index(rho, theta) {
            Some(i) => {
                self.data[i] = votes;
                true
            }
            None => false,
        }
    }

    /// Add one vote to a bin. Saturates at `u32::MAX`.
    #[inline]
    pub fn increment(&mut self, rho: usize, theta: usize) {
        if let Some(i) = self.index(rho, theta) {
            self.data[i] = self.data[i].saturating_add(1);
        }
    }

    /// Largest vote count in the grid (0 when empty).
    pub fn max_votes(&self) -> u32 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all votes.
    pub fn total_votes(&self) -> u64 {
        self.data.iter().map(|&v| u64::from(v)).sum()
    }
}

impl ImageView for Accumulator {
    type Pixel = u32;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.width
    }
    #[inline]
    fn row(&self, y: usize) -> &[u32] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_access_is_ignored() {
        let mut acc = Accumulator::new(4, 3);
        assert_eq!(acc.get(3, 0), None);
        assert_eq!(acc.get(0, 4), None);
        assert!(!acc.set(3, 0, 7));
        acc.increment(0, 4);
        assert_eq!(acc.total_votes(), 0);
    }

    #[test]
    fn rows_are_theta_major_within_radius() {
        let mut acc = Accumulator::new(4, 3);
        acc.increment(1, 2);
        acc.increment(1, 2);
        acc.set(2, 3, 5);
        assert_eq!(acc.row(1), &[0, 0, 2, 0]);
        assert_eq!(acc.get(2, 3), Some(5));
        assert_eq!(acc.max_votes(), 5);
        assert_eq!(acc.rows().count(), 3);
    }

    #[test]
    fn from_votes_checks_length() {
        assert!(Accumulator::from_votes(2, 2, vec![0; 3]).is_none());
        let acc = Accumulator::from_votes(2, 2, vec![1, 2, 3, 4]).expect("sizes match");
        assert_eq!(acc.get(1, 0), Some(3));
    }
}
