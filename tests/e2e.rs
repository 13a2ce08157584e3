mod common;

use common::synthetic_image::{edge_map_with_pixels, line_pixels, rectangle_u8};
use hough_lines::edges::{edge_mask, EdgeParams};
use hough_lines::image::ImageU8;
use hough_lines::{HoughLineDetector, HoughParams, LineSegment, NmsWindow};
use nalgebra::Point2;

fn max_distance(segment: &LineSegment, pixels: &[(usize, usize)]) -> f64 {
    pixels
        .iter()
        .map(|&(x, y)| segment.distance_to_line(Point2::new(x as f64, y as f64)))
        .fold(0.0, f64::max)
}

#[test]
fn diagonal_run_is_recovered() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (width, height) = (100usize, 100usize);
    let pixels = line_pixels(width, height, 1, 5, 0..100);
    assert_eq!(pixels.len(), 95);
    let buffer = edge_map_with_pixels(width, height, &pixels);

    let mut detector = HoughLineDetector::new();
    detector
        .transform(&ImageU8::new(width, height, &buffer), 250)
        .expect("valid edge map");

    let threshold = pixels.len() as u32 - 1;
    let lines = detector.lines(threshold);
    assert!(!lines.is_empty(), "expected the drawn run to be detected");
    let best = lines
        .iter()
        .map(|l| max_distance(l, &pixels))
        .fold(f64::INFINITY, f64::min);
    assert!(
        best <= 1.5,
        "no detected line passes within 1.5 px of every drawn pixel (best {best:.3}): {lines:?}"
    );
}

#[test]
fn steep_run_with_fractional_normal_is_recovered() {
    let _ = env_logger::builder().is_test(true).try_init();
    // Normal of y = 2x + 5 lies near 153.4°, so votes split between
    // neighbouring θ bins and the peak falls short of the run length.
    let (width, height) = (100usize, 100usize);
    let pixels = line_pixels(width, height, 2, 5, 0..100);
    assert_eq!(pixels.len(), 48);
    let buffer = edge_map_with_pixels(width, height, &pixels);

    let mut detector = HoughLineDetector::new();
    detector
        .transform(&ImageU8::new(width, height, &buffer), 250)
        .expect("valid edge map");

    let run_len = pixels.len() as u32;
    assert!(detector.accumulator().max_votes() < run_len);
    assert!(detector.lines(run_len).is_empty());

    // Split votes cost up to 4 of the run's pixels in the strongest bin.
    let lines = detector.lines(run_len - 4);
    assert!(!lines.is_empty(), "expected the drawn run to be detected");
    let best = lines
        .iter()
        .map(|l| max_distance(l, &pixels))
        .fold(f64::INFINITY, f64::min);
    assert!(
        best <= 1.0,
        "no detected line passes within 1 px of every drawn pixel (best {best:.3}): {lines:?}"
    );
}

#[test]
fn vertical_run_is_recovered_in_wide_image() {
    let (width, height) = (80usize, 60usize);
    let pixels: Vec<_> = (0..height).map(|y| (30usize, y)).collect();
    let buffer = edge_map_with_pixels(width, height, &pixels);

    let mut detector = HoughLineDetector::new();
    detector
        .transform(&ImageU8::new(width, height, &buffer), 250)
        .expect("valid edge map");
    let peaks = detector.peaks(height as u32, NmsWindow::default());
    assert!(!peaks.is_empty());
    for peak in &peaks {
        assert!(
            peak.theta_deg == 0 || peak.theta_deg == 180,
            "unexpected orientation {peak:?}"
        );
    }

    let lines = detector.lines(height as u32);
    assert!(lines.iter().any(|l| max_distance(l, &pixels) <= 1.5));
}

#[test]
fn two_crossing_runs_give_two_orientations() {
    let (width, height) = (120usize, 120usize);
    let mut pixels: Vec<_> = (0..width).map(|x| (x, 40usize)).collect();
    pixels.extend((0..height).map(|y| (70usize, y)));
    let buffer = edge_map_with_pixels(width, height, &pixels);

    let mut detector = HoughLineDetector::new();
    detector
        .transform(&ImageU8::new(width, height, &buffer), 250)
        .expect("valid edge map");
    let mut thetas: Vec<usize> = detector
        .peaks(100, NmsWindow::default())
        .iter()
        .map(|p| p.theta_deg % 180)
        .collect();
    thetas.sort_unstable();
    thetas.dedup();
    assert_eq!(thetas, vec![0, 90]);
}

#[test]
fn rectangle_edges_yield_four_sides() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (width, height) = (96usize, 96usize);
    let gray = rectangle_u8(width, height, 20, 30, 76, 66);
    let mask = edge_mask(&ImageU8::new(width, height, &gray), &EdgeParams::default())
        .expect("valid grayscale input");

    let params = HoughParams {
        vote_threshold: 20,
        ..Default::default()
    };
    let mut detector = HoughLineDetector::new();
    let report = detector
        .process(&mask.as_view(), &params)
        .expect("valid edge map");

    assert!(report.edge_pixels > 0);
    let horizontal = report
        .lines
        .iter()
        .filter(|l| l.peak.theta_deg % 180 == 90)
        .count();
    let vertical = report
        .lines
        .iter()
        .filter(|l| l.peak.theta_deg % 180 == 0)
        .count();
    assert!(horizontal >= 2, "expected top and bottom sides: {:?}", report.lines);
    assert!(vertical >= 2, "expected left and right sides: {:?}", report.lines);
    assert!(report.timing.stage_ms("accumulate").is_some());
    assert!(report.timing.stage_ms("extract").is_some());
}
