//! Separable smoothing applied before gradient estimation.
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to be
    /// symmetric around its centre, but the implementation does not rely on it.
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl Default for StaticSeparableFilter {
    fn default() -> Self {
        GAUSSIAN_5TAP
    }
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Normalised 5-tap Gaussian filter `[1, 4, 6, 4, 1] / 16` (sigma ≈ 1).
pub const GAUSSIAN_5TAP: StaticSeparableFilter =
    StaticSeparableFilter::new(&[0.0625, 0.25, 0.375, 0.25, 0.0625]);

/// Convolve rows then columns with `filter`, replicating border pixels.
pub fn blur_separable<F: SeparableFilter>(input: &ImageF32, filter: &F) -> ImageF32 {
    let (w, h) = (input.w, input.h);
    let taps = filter.taps();
    if w == 0 || h == 0 || taps.is_empty() {
        return input.clone();
    }
    let radius = (taps.len() / 2) as isize;
    let clamp = |v: isize, n: usize| v.clamp(0, n as isize - 1) as usize;

    let mut horiz = ImageF32::new(w, h);
    for y in 0..h {
        let src = input.row(y);
        let dst = horiz.row_mut(y);
        for (x, d) in dst.iter_mut().enumerate() {
            *d = taps
                .iter()
                .enumerate()
                .map(|(k, &t)| t * src[clamp(x as isize + k as isize - radius, w)])
                .sum();
        }
    }

    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        for (k, &t) in taps.iter().enumerate() {
            let src = horiz.row(clamp(y as isize + k as isize - radius, h));
            let dst = &mut out.data[y * w..(y + 1) * w];
            for (d, &s) in dst.iter_mut().zip(src) {
                *d += t * s;
            }
        }
    }
    out
}
