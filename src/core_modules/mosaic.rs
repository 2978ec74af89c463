// THEORY:
// The `mosaic` module is the heart of the engine: the block-averaging sweep
// that flattens an image into uniform color tiles. It partitions the grid
// into square tiles of side `block_size`, aligned to the origin, and rewrites
// every pixel in a tile to that tile's accumulated color.
//
// The accumulation is a *running pairwise average*, not an arithmetic mean.
// Each tile owns one accumulator, seeded with the zero pixel; every source
// pixel that lands in the tile is folded in with `Pixel::merge` (per-channel
// floor midpoint). The result is order-dependent — later pixels in the
// traversal weigh more, and the zero seed pulls the first contribution down
// by half. This exact semantics is the module's behavioral contract; both
// sweeps therefore traverse column-major (x outer, y inner), which together
// with the merge rule makes the output fully deterministic.
//
// Tiles are aligned to (0,0), so when the width or height is not a multiple
// of the block size the terminal tiles are simply smaller; their accumulators
// just receive fewer merges. No padding, no clipping.

use crate::core_modules::grid::grid::PixelGrid;
use crate::error::{MosaicError, Result};
use log::debug;

/// Rewrites every pixel of `grid` to the running-average color of the
/// origin-aligned square tile containing it, returning a new grid of
/// identical dimensions.
///
/// A `block_size` of zero has no defined tile index and is rejected with
/// `MosaicError::InvalidBlockSize` before any indexing occurs. A block size
/// of at least max(width, height) collapses the whole image into a single
/// tile's running average.
pub fn pixelate(grid: &PixelGrid, block_size: u32) -> Result<PixelGrid> {
    if block_size == 0 {
        return Err(MosaicError::InvalidBlockSize(block_size));
    }

    let width = grid.width();
    let height = grid.height();
    debug!(
        "pixelating {}x{} grid with block size {}",
        width, height, block_size
    );

    // Pass 1: fold every source pixel into its tile's accumulator. The
    // accumulator grid is one entry larger than strictly needed in each
    // dimension so terminal tile indices always land in bounds.
    let mut averages = PixelGrid::new(width / block_size + 1, height / block_size + 1);
    for x in 0..width {
        for y in 0..height {
            let tile_x = x / block_size;
            let tile_y = y / block_size;
            let merged = averages.get(tile_x, tile_y).merge(grid.get(x, y));
            averages.set(tile_x, tile_y, merged);
        }
    }

    // Pass 2: write every pixel's tile color into the result grid.
    let mut result = PixelGrid::new(width, height);
    for x in 0..width {
        for y in 0..height {
            result.set(x, y, averages.get(x / block_size, y / block_size));
        }
    }

    Ok(result)
}
