use crate::hough::HoughError;

/// Borrowed 8-bit single-channel image, row-major with an explicit stride.
///
/// This is the edge-map input of the Hough transform: a pixel counts as an
/// edge when its intensity exceeds the caller's cutoff.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed view (`stride == w`).
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Minimum buffer length needed to address every pixel of the view.
    pub fn required_len(&self) -> usize {
        if self.w == 0 || self.h == 0 {
            return 0;
        }
        (self.h - 1)
            .saturating_mul(self.stride)
            .saturating_add(self.w)
    }

    /// Check that the view is non-empty and its buffer covers every row.
    pub fn validate(&self) -> Result<(), HoughError> {
        if self.data.is_empty() {
            return Err(HoughError::EmptyImage);
        }
        if self.w == 0 || self.h == 0 {
            return Err(HoughError::ZeroDimension {
                width: self.w,
                height: self.h,
            });
        }
        if self.stride < self.w {
            return Err(HoughError::InvalidStride {
                stride: self.stride,
                width: self.w,
            });
        }
        let expected = self.required_len();
        if self.data.len() < expected {
            return Err(HoughError::BufferTooSmall {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
