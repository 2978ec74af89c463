// THEORY:
// The `pipeline` module is the final, top-level API for the mosaic engine.
// It encapsulates the full stack — decode, extraction, block averaging,
// encode — behind a single, easy-to-use interface, so a consumer only ever
// hands it a path (or a decoded image) and a configuration.
//
// The stages run strictly in sequence on the calling thread. Each stage is a
// pure function over explicit arguments; the pipeline owns no mutable state
// beyond its configuration, and file handles are scoped to the stage that
// uses them.

use crate::core_modules::extractor::extract_grid;
use crate::core_modules::mosaic;
use crate::core_modules::utils::image_helper::image_helper;
use crate::error::{MosaicError, Result};
use image::{DynamicImage, ImageReader};
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

// Re-export key data structures for the public API.
pub use crate::core_modules::grid::grid::PixelGrid;
pub use crate::core_modules::pixel::pixel::Pixel;

/// The tile side length used when the caller does not supply one.
pub const DEFAULT_BLOCK_SIZE: u32 = 8;

/// Name of the output file, always PNG-encoded, written to the current
/// working directory.
pub const OUTPUT_FILE: &str = "out.png";

/// Configuration for the MosaicPipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Side length of the square averaging tile, in pixels. Must be positive.
    pub block_size: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

/// The main, top-level struct for the mosaic engine.
pub struct MosaicPipeline {
    config: PipelineConfig,
}

impl MosaicPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Runs the in-memory stages over an already decoded image and returns
    /// the pixelated grid.
    pub fn render(&self, image: &DynamicImage) -> Result<PixelGrid> {
        // Stage 1: Extraction
        let grid = extract_grid(image);
        info!("extracted {}x{} pixel grid", grid.width(), grid.height());

        // Stage 2: Block averaging
        let result = mosaic::pixelate(&grid, self.config.block_size)?;
        info!("pixelated with block size {}", self.config.block_size);

        Ok(result)
    }

    /// Runs the full pipeline over an image file, writing `out.png` to the
    /// current working directory and returning its path.
    pub fn process_file(&self, input: &Path) -> Result<PathBuf> {
        self.process_file_to(input, Path::new(OUTPUT_FILE))
    }

    /// Like `process_file`, but with an explicit output target.
    pub fn process_file_to(&self, input: &Path, output: &Path) -> Result<PathBuf> {
        // Stage 0: Decode. Opening and format sniffing report `Open`;
        // unrecognizable or corrupt image data reports `Decode`.
        let file = File::open(input)?;
        let reader = ImageReader::new(BufReader::new(file)).with_guessed_format()?;
        let image = reader.decode()?;
        info!(
            "decoded {} ({}x{})",
            input.display(),
            image.width(),
            image.height()
        );

        let result = self.render(&image)?;

        // Stage 3: Encode
        image_helper::save(
            output,
            result.width(),
            result.height(),
            &result.to_rgba_bytes(),
        )
        .map_err(MosaicError::Write)?;
        info!("wrote {}", output.display());

        Ok(output.to_path_buf())
    }
}
