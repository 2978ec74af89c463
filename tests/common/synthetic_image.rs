use image::{DynamicImage, Rgba, RgbaImage};

/// Generates an RGBA image split into four constant-color quadrants,
/// ordered top-left, top-right, bottom-left, bottom-right.
pub fn quadrants_rgba(width: u32, height: u32, colors: [[u8; 4]; 4]) -> DynamicImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let half_w = width / 2;
    let half_h = height / 2;
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        let quadrant = match (x < half_w, y < half_h) {
            (true, true) => 0,
            (false, true) => 1,
            (true, false) => 2,
            (false, false) => 3,
        };
        Rgba(colors[quadrant])
    }))
}

/// Generates a simple high-contrast RGBA checkerboard image.
pub fn checkerboard_rgba(width: u32, height: u32, cell: u32) -> DynamicImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            Rgba([32, 32, 32, 255])
        } else {
            Rgba([220, 220, 220, 255])
        }
    }))
}
