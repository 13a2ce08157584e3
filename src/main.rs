use hough_lines::image::ImageU8;
use hough_lines::{HoughLineDetector, HoughParams};

fn main() {
    env_logger::init();
    // Demo stub: draws one diagonal run into a blank edge map and detects it
    let w = 128usize;
    let h = 128usize;
    let mut edges = vec![0u8; w * h];
    for x in 10..100 {
        edges[(x + 8) * w + x] = 255;
    }
    let img = ImageU8::new(w, h, &edges);

    let params = HoughParams {
        vote_threshold: 80,
        ..Default::default()
    };
    let mut det = HoughLineDetector::new();
    match det.process(&img, &params) {
        Ok(report) => {
            println!(
                "accumulator={}x{} lines={} latency_ms={:.3}",
                report.accumulator.width,
                report.accumulator.height,
                report.lines.len(),
                report.timing.total_ms
            );
            for line in &report.lines {
                println!(
                    "theta={} rho_bin={} votes={} start=({}, {}) end=({}, {})",
                    line.peak.theta_deg,
                    line.peak.rho_bin,
                    line.peak.votes,
                    line.segment.start.x,
                    line.segment.start.y,
                    line.segment.end.x,
                    line.segment.end.y
                );
            }
        }
        Err(err) => eprintln!("Error: {err}"),
    }
}
