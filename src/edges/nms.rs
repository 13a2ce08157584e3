//! Non-maximum suppression on gradient magnitude with direction alignment.
//!
//! A pixel survives when its magnitude reaches the threshold and is strictly
//! greater than both neighbours along its quantized gradient direction
//! (0°, 45°, 90°, 135°). Survivors become bright pixels of a binary edge map.
//!
//! The outermost 1-pixel frame is never marked, which keeps neighbour lookup
//! in bounds and ignores the artificial response of a clamped border.
use super::grad::Grad;
use crate::image::io::GrayImageU8;
use crate::image::ImageView;

/// Intensity written for edge pixels in a mask.
pub const EDGE_ON: u8 = 255;

const TAN_22_5_DEG: f32 = 0.414_213_56;

/// Thin the gradient magnitude into a 0/255 edge mask.
pub fn suppress_to_mask(grad: &Grad, mag_thresh: f32) -> GrayImageU8 {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut mask = GrayImageU8::zeros(w, h);
    if w < 3 || h < 3 {
        return mask;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag < mag_thresh || mag <= 0.0 {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            let (neighbor1, neighbor2) = if abs_gy <= abs_gx * TAN_22_5_DEG {
                (mag_row[x - 1], mag_row[x + 1])
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x - 1], mag_next[x + 1])
            } else {
                (mag_prev[x + 1], mag_next[x - 1])
            };

            // On a two-pixel plateau only the later pixel in scan order survives.
            if mag < neighbor1 || mag <= neighbor2 {
                continue;
            }
            mask.put(x, y, EDGE_ON);
        }
    }

    mask
}
