//! Stateful line detector built on [`hough_transform`].
//!
//! [`HoughLineDetector`] keeps the most recent successful [`HoughSpace`] so
//! callers can transform once and then query lines, local maxima, or the raw
//! accumulator. A failed transform leaves the previous space in place.
//!
//! The detector is not meant to be shared across threads while a transform
//! runs; give each concurrent caller its own instance, or call
//! [`hough_transform`] directly and keep the returned space.
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{AccumulatorSummary, DetectionReport, TimingBreakdown};
use crate::hough::{
    hough_transform, Accumulator, HoughError, HoughGeometry, HoughParams, HoughPeak, HoughSpace,
    LineSegment, NmsWindow,
};
use crate::image::ImageU8;
use log::{debug, warn};
use std::time::Instant;

#[derive(Clone, Debug, Default)]
pub struct HoughLineDetector {
    space: HoughSpace,
}

impl HoughLineDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the accumulator with the votes of `edges`.
    ///
    /// On error nothing changes: the previous accumulator and geometry stay
    /// queryable.
    pub fn transform(
        &mut self,
        edges: &ImageU8<'_>,
        pixel_min_value: u8,
    ) -> Result<(), HoughError> {
        match hough_transform(edges, pixel_min_value) {
            Ok(space) => {
                self.space = space;
                Ok(())
            }
            Err(err) => {
                warn!("HoughLineDetector::transform rejected input: {err}");
                Err(err)
            }
        }
    }

    /// Segments for every local maximum with at least `threshold` votes
    /// (9×9 window). Empty before the first successful transform.
    pub fn lines(&self, threshold: u32) -> Vec<LineSegment> {
        self.space.lines(threshold)
    }

    pub fn lines_with_window(&self, threshold: u32, window: NmsWindow) -> Vec<LineSegment> {
        self.space.lines_with_window(threshold, window)
    }

    pub fn peaks(&self, threshold: u32, window: NmsWindow) -> Vec<HoughPeak> {
        self.space.peaks(threshold, window)
    }

    /// See [`HoughSpace::is_local_max`]. `false` before any transform.
    pub fn is_local_max(&self, value: u32, rho: usize, theta: usize, window: NmsWindow) -> bool {
        self.space.is_local_max(value, rho, theta, window)
    }

    pub fn accumulator(&self) -> &Accumulator {
        self.space.accumulator()
    }

    pub fn geometry(&self) -> &HoughGeometry {
        self.space.geometry()
    }

    /// Polar origin `(width / 2, height / 2)` of the last transform.
    pub fn center(&self) -> (usize, usize) {
        let g = self.space.geometry();
        (g.center_x, g.center_y)
    }

    pub fn space(&self) -> &HoughSpace {
        &self.space
    }

    /// Take the current space, leaving the detector empty.
    pub fn take_space(&mut self) -> HoughSpace {
        std::mem::take(&mut self.space)
    }

    /// Transform `edges` and extract lines in one pass, with stage timings.
    pub fn process(
        &mut self,
        edges: &ImageU8<'_>,
        params: &HoughParams,
    ) -> Result<DetectionReport, HoughError> {
        let t0 = Instant::now();
        let mut timing = TimingBreakdown::default();

        timing.measure("accumulate", || self.transform(edges, params.pixel_min_value))?;
        let lines = timing.measure("extract", || {
            self.space.detect(params.vote_threshold, params.nms_window)
        });
        timing.total_ms = elapsed_ms(t0);

        debug!(
            "HoughLineDetector::process -> {} lines in {:.3} ms",
            lines.len(),
            timing.total_ms
        );

        Ok(DetectionReport {
            params: *params,
            geometry: *self.space.geometry(),
            edge_pixels: self.space.edge_pixels(),
            accumulator: AccumulatorSummary::from_space(&self.space),
            lines,
            timing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_detector_is_empty() {
        let det = HoughLineDetector::new();
        assert!(det.accumulator().is_empty());
        assert!(det.lines(1).is_empty());
        assert!(!det.is_local_max(0, 0, 0, NmsWindow::default()));
    }

    #[test]
    fn failed_transform_keeps_previous_state() {
        let mut det = HoughLineDetector::new();
        let data = vec![255u8; 16 * 8];
        det.transform(&ImageU8::new(16, 8, &data), 250)
            .expect("valid input");
        let before = det.accumulator().clone();

        let err = det.transform(&ImageU8::new(0, 0, &[]), 250).unwrap_err();
        assert_eq!(err, HoughError::EmptyImage);
        assert_eq!(det.accumulator(), &before);
        assert_eq!(det.center(), (8, 4));
    }

    #[test]
    fn take_space_resets_detector() {
        let mut det = HoughLineDetector::new();
        let data = vec![255u8; 4];
        det.transform(&ImageU8::new(2, 2, &data), 250)
            .expect("valid input");
        let space = det.take_space();
        assert_eq!(space.edge_pixels(), 4);
        assert!(det.accumulator().is_empty());
    }
}
