use hough_lines::config::lines::load_config;
use hough_lines::edges::edge_mask;
use hough_lines::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use hough_lines::HoughLineDetector;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let edges = if config.edges.enabled {
        edge_mask(&gray.as_view(), &config.edges).map_err(|e| e.to_string())?
    } else {
        gray
    };

    if let Some(path) = &config.output.edge_image {
        save_grayscale_u8(&edges, path)?;
        println!("Saved edge map to {}", path.display());
    }

    let mut detector = HoughLineDetector::new();
    let report = detector
        .process(&edges.as_view(), &config.hough)
        .map_err(|e| e.to_string())?;
    write_json_file(&config.output.report_json, &report)?;

    println!(
        "Detected {} lines from {} edge pixels ({}x{} accumulator, {:.3} ms)",
        report.lines.len(),
        report.edge_pixels,
        report.accumulator.width,
        report.accumulator.height,
        report.timing.total_ms
    );
    println!("Saved report to {}", config.output.report_json.display());

    Ok(())
}

fn usage() -> String {
    "Usage: detect_lines <config.json>".to_string()
}
