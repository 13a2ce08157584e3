mod common;

use common::synthetic_image::{edge_map_with_pixels, line_pixels};
use hough_lines::image::ImageU8;
use hough_lines::{hough_transform, HoughError, HoughLineDetector, NmsWindow};
use std::collections::BTreeSet;

fn noisy_edge_map(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = line_pixels(width, height, 1, 3, 0..width);
    pixels.extend(line_pixels(width, height, -1, 70, 0..width));
    pixels.extend((0..width).step_by(3).map(|x| (x, 12usize)));
    // Deterministic scatter.
    let mut state = 0x2545_f491u32;
    for _ in 0..60 {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let x = state as usize % width;
        let y = (state >> 16) as usize % height;
        pixels.push((x, y));
    }
    edge_map_with_pixels(width, height, &pixels)
}

#[test]
fn repeated_runs_are_identical() {
    let (w, h) = (72usize, 64usize);
    let buffer = noisy_edge_map(w, h);
    let image = ImageU8::new(w, h, &buffer);

    let mut first = HoughLineDetector::new();
    first.transform(&image, 250).expect("valid edge map");
    let mut second = HoughLineDetector::new();
    second.transform(&image, 250).expect("valid edge map");

    assert_eq!(first.accumulator(), second.accumulator());
    assert_eq!(first.lines(20), second.lines(20));
    // Re-running on the same instance fully replaces the state.
    let before = first.lines(20);
    first.transform(&image, 250).expect("valid edge map");
    assert_eq!(first.lines(20), before);
}

#[test]
fn higher_threshold_selects_subset_of_bins() {
    let (w, h) = (72usize, 64usize);
    let buffer = noisy_edge_map(w, h);
    let space = hough_transform(&ImageU8::new(w, h, &buffer), 250).expect("valid edge map");

    let bins = |t: u32| -> BTreeSet<(usize, usize)> {
        space
            .peaks(t, NmsWindow::default())
            .iter()
            .map(|p| (p.rho_bin, p.theta_deg))
            .collect()
    };
    let mut previous = bins(1);
    assert!(!previous.is_empty());
    for t in [5u32, 10, 20, 40, 80] {
        let current = bins(t);
        assert!(
            current.is_subset(&previous),
            "threshold {t} produced bins outside the lower-threshold set"
        );
        previous = current;
    }
}

#[test]
fn empty_input_leaves_accumulator_empty() {
    let mut detector = HoughLineDetector::new();
    let err = detector
        .transform(&ImageU8::new(0, 0, &[]), 250)
        .unwrap_err();
    assert_eq!(err, HoughError::EmptyImage);
    assert!(detector.accumulator().is_empty());
    for threshold in [0u32, 1, 10, u32::MAX] {
        assert!(detector.lines(threshold).is_empty());
    }
}

#[test]
fn center_uses_integer_half_dimensions() {
    let (w, h) = (100usize, 50usize);
    let buffer = vec![0u8; w * h];
    let mut detector = HoughLineDetector::new();
    detector
        .transform(&ImageU8::new(w, h, &buffer), 250)
        .expect("valid edge map");
    assert_eq!(detector.center(), (50, 25));
}

#[test]
fn accumulator_dimensions_follow_image_diagonal() {
    for &(w, h) in &[(100usize, 50usize), (1, 1), (640, 480), (33, 17)] {
        let buffer = vec![0u8; w * h];
        let mut detector = HoughLineDetector::new();
        detector
            .transform(&ImageU8::new(w, h, &buffer), 250)
            .expect("valid edge map");
        let expected = ((w * w + h * h) as f64).sqrt().round() as usize;
        assert_eq!(detector.accumulator().width(), 360);
        assert_eq!(detector.accumulator().height(), expected, "{w}x{h}");
    }
}

#[test]
fn new_image_size_replaces_geometry() {
    let mut detector = HoughLineDetector::new();
    let small = vec![255u8; 10 * 10];
    detector
        .transform(&ImageU8::new(10, 10, &small), 250)
        .expect("valid edge map");
    let large = vec![0u8; 200 * 120];
    detector
        .transform(&ImageU8::new(200, 120, &large), 250)
        .expect("valid edge map");
    assert_eq!(detector.center(), (100, 60));
    assert_eq!(detector.accumulator().max_votes(), 0);
    assert_eq!(detector.space().edge_pixels(), 0);
}
