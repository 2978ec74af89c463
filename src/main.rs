use anyhow::Context;
use clap::Parser;
use pixel_mosaic::{DEFAULT_BLOCK_SIZE, MosaicPipeline, PipelineConfig};
use std::path::PathBuf;

/// Pixelate an image by flattening fixed-size blocks to their average color.
#[derive(Parser, Debug)]
#[command(name = "pixel_mosaic", version, about)]
struct Args {
    /// The JPEG or PNG image to pixelate.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    input: PathBuf,

    /// Side length of the averaging block, in pixels.
    #[arg(
        short = 'b',
        long = "block-size",
        value_name = "PIXELS",
        default_value_t = DEFAULT_BLOCK_SIZE
    )]
    block_size: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let pipeline = MosaicPipeline::new(PipelineConfig {
        block_size: args.block_size,
    });

    let output = pipeline
        .process_file(&args.input)
        .with_context(|| format!("failed to pixelate {}", args.input.display()))?;

    println!("Processing complete. Output saved to {}", output.display());
    Ok(())
}
