//! Conversion of accumulator peaks back into image-space segments.
use super::geometry::HoughGeometry;
use super::peaks::{HoughPeak, NmsWindow};
use super::space::HoughSpace;
use crate::angle::normal_direction;
use nalgebra::{Point2, Vector2};
use serde::Serialize;

/// Two integer endpoints in input-image coordinates.
///
/// Endpoints usually lie outside the frame; clipping is left to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LineSegment {
    pub start: Point2<i32>,
    pub end: Point2<i32>,
}

impl LineSegment {
    pub fn new(start: Point2<i32>, end: Point2<i32>) -> Self {
        Self { start, end }
    }

    /// Vector from `start` to `end`.
    pub fn delta(&self) -> Vector2<f64> {
        Vector2::new(
            f64::from(self.end.x - self.start.x),
            f64::from(self.end.y - self.start.y),
        )
    }

    /// Perpendicular distance from `p` to the infinite line through both
    /// endpoints. Falls back to the distance to `start` for a degenerate segment.
    pub fn distance_to_line(&self, p: Point2<f64>) -> f64 {
        let d = self.delta();
        let start = Point2::new(f64::from(self.start.x), f64::from(self.start.y));
        let rel = p - start;
        let len = d.norm();
        if len == 0.0 {
            return rel.norm();
        }
        (d.x * rel.y - d.y * rel.x).abs() / len
    }
}

/// A peak together with the segment reconstructed from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DetectedLine {
    pub peak: HoughPeak,
    pub segment: LineSegment,
}

impl HoughPeak {
    /// Reconstruct the line for this bin.
    ///
    /// `(x0, y0)` is the foot of the perpendicular from the image centre. The
    /// endpoints step along `(-sin θ, cos θ)` by the image width in x and the
    /// image height in y, then truncate toward zero.
    pub fn segment(&self, geometry: &HoughGeometry) -> LineSegment {
        let (a, b) = normal_direction(self.theta_deg);
        let rho = geometry.rho_of_bin(self.rho_bin);
        let x0 = a * rho + geometry.center_x as f64;
        let y0 = b * rho + geometry.center_y as f64;
        let w = geometry.image_width as f64;
        let h = geometry.image_height as f64;

        LineSegment {
            start: Point2::new((x0 + w * (-b)) as i32, (y0 + h * a) as i32),
            end: Point2::new((x0 - w * (-b)) as i32, (y0 - h * a) as i32),
        }
    }
}

impl HoughSpace {
    /// Segments for every peak with at least `threshold` votes, using the
    /// default 9×9 suppression window.
    pub fn lines(&self, threshold: u32) -> Vec<LineSegment> {
        self.lines_with_window(threshold, NmsWindow::default())
    }

    pub fn lines_with_window(&self, threshold: u32, window: NmsWindow) -> Vec<LineSegment> {
        self.peaks(threshold, window)
            .iter()
            .map(|peak| peak.segment(&self.geometry))
            .collect()
    }

    /// Peaks paired with their segments, in scan order.
    pub fn detect(&self, threshold: u32, window: NmsWindow) -> Vec<DetectedLine> {
        self.peaks(threshold, window)
            .into_iter()
            .map(|peak| DetectedLine {
                segment: peak.segment(&self.geometry),
                peak,
            })
            .collect()
    }
}
