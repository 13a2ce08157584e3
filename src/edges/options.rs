use serde::{Deserialize, Serialize};

/// Options for turning a grayscale image into a binary edge map.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    /// When false, the input is assumed to already be an edge map.
    pub enabled: bool,
    /// Apply the 5-tap Gaussian before gradients.
    pub blur: bool,
    /// Minimum Sobel magnitude on [0, 1]-normalised intensities.
    pub magnitude_threshold: f32,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            enabled: true,
            blur: true,
            magnitude_threshold: 0.25,
        }
    }
}
