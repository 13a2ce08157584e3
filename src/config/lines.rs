use crate::edges::EdgeParams;
use crate::hough::HoughParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for `detect_lines`.
///
/// ```json
/// {
///   "input": "board.png",
///   "edges": { "enabled": true, "blur": true, "magnitude_threshold": 0.25 },
///   "hough": { "pixel_min_value": 250, "vote_threshold": 80,
///              "nms_window": { "rho": 9, "theta": 9 } },
///   "output": { "report_json": "out/lines.json", "edge_image": "out/edges.png" }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct LineToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub edges: EdgeParams,
    #[serde(default)]
    pub hough: HoughParams,
    pub output: LineOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct LineOutputConfig {
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
    /// Where to save the prepared edge map, if anywhere.
    #[serde(default)]
    pub edge_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<LineToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(json: &str) -> Result<LineToolConfig, serde_json::Error> {
    serde_json::from_str(json)
}
