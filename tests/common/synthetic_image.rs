/// Blank edge map with the listed pixels set to 255.
pub fn edge_map_with_pixels(width: usize, height: usize, pixels: &[(usize, usize)]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = vec![0u8; width * height];
    for &(x, y) in pixels {
        img[y * width + x] = 255;
    }
    img
}

/// Pixels on `y = slope * x + offset` for `x` in `xs`, dropping those outside the image.
pub fn line_pixels(
    width: usize,
    height: usize,
    slope: i64,
    offset: i64,
    xs: std::ops::Range<usize>,
) -> Vec<(usize, usize)> {
    xs.filter_map(|x| {
        let y = slope * x as i64 + offset;
        (x < width && y >= 0 && (y as usize) < height).then_some((x, y as usize))
    })
    .collect()
}

/// Dark/bright rectangle on a flat background, for edge-preparation tests.
pub fn rectangle_u8(
    width: usize,
    height: usize,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
) -> Vec<u8> {
    let mut img = vec![40u8; width * height];
    for y in y0..y1 {
        img[y * width + x0..y * width + x1].fill(210);
    }
    img
}
