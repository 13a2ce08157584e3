//! Edge-map preparation: smoothing, gradients and non-maximum suppression.
//!
//! The Hough stage consumes a binary edge map (bright = edge). This module
//! produces one from an ordinary grayscale image:
//!
//! - Optional separable 5-tap Gaussian blur to suppress pixel noise.
//! - Sobel gradients with replicate-border handling.
//! - Direction-aligned non-maximum suppression and a magnitude threshold,
//!   writing 255 on edges and 0 elsewhere, so the default Hough cutoff of
//!   250 selects exactly the surviving pixels.

pub mod blur;
pub mod grad;
pub mod nms;
mod options;

pub use blur::{blur_separable, SeparableFilter, StaticSeparableFilter, GAUSSIAN_5TAP};
pub use grad::{sobel_gradients, Grad};
pub use nms::{suppress_to_mask, EDGE_ON};
pub use options::EdgeParams;

use crate::hough::HoughError;
use crate::image::io::GrayImageU8;
use crate::image::{ImageF32, ImageU8};
use log::debug;

/// Build a 0/255 edge map from a grayscale view.
pub fn edge_mask(gray: &ImageU8<'_>, params: &EdgeParams) -> Result<GrayImageU8, HoughError> {
    gray.validate()?;
    let mut image = ImageF32::from_u8(gray);
    if params.blur {
        image = blur_separable(&image, &GAUSSIAN_5TAP);
    }
    let grad = sobel_gradients(&image);
    let mask = suppress_to_mask(&grad, params.magnitude_threshold);
    debug!(
        "edge_mask: {}x{} -> {} edge pixels (threshold {:.3})",
        gray.w,
        gray.h,
        mask.count_above(0),
        params.magnitude_threshold
    );
    Ok(mask)
}
