// THEORY:
// The `extractor` module performs the crucial first transformation of the
// pipeline: it turns a decoded image — a random-access 2D color source with
// 16-bit-per-channel samples — into the engine's own `PixelGrid` of
// normalized 8-bit pixels. This is the bridge between the format library's
// world and the mosaic sweep's world; nothing downstream ever touches the
// decoder again.
//
// The traversal walks column-major (outer loop over x, inner over y). The
// grid is position-addressed, so the output is identical either way; the
// order only matters to the mosaic sweep, which fixes its own.

use crate::core_modules::grid::grid::PixelGrid;
use crate::core_modules::pixel::pixel::Pixel;
use image::DynamicImage;

/// Converts a decoded image into a dense grid of normalized 8-bit pixels.
///
/// Every coordinate is queried in its native 16-bit-per-channel RGBA
/// representation and each channel is scaled into byte range by truncating
/// division by 257. The returned grid always matches the image's dimensions.
pub fn extract_grid(image: &DynamicImage) -> PixelGrid {
    let rgba = image.to_rgba16();
    let (width, height) = rgba.dimensions();

    let mut grid = PixelGrid::new(width, height);
    for x in 0..width {
        for y in 0..height {
            let sample = rgba.get_pixel(x, y);
            grid.set(x, y, Pixel::from_rgba16(sample.0));
        }
    }
    grid
}
