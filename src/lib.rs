// THEORY:
// This file is the main entry point for the `pixel_mosaic` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (like the CLI binary).
//
// The primary goal is to export the `MosaicPipeline` and its associated data
// structures (`PipelineConfig`, `MosaicError`, `PixelGrid`) as the clean,
// high-level interface for the whole engine. The internal modules
// (`core_modules`) hold the pixel container, the extraction step and the
// block-averaging step, each encapsulated behind the pipeline.

pub mod core_modules;
pub mod error;
pub mod pipeline;

pub use error::{MosaicError, Result};
pub use pipeline::{DEFAULT_BLOCK_SIZE, MosaicPipeline, PipelineConfig};
