use thiserror::Error;

/// Errors that can occur while turning an input image into a mosaic.
///
/// Every variant is terminal: there is no retry logic and no partial output.
#[derive(Debug, Error)]
pub enum MosaicError {
    /// The input file could not be opened or read far enough to sniff its format.
    #[error("failed to open input image: {0}")]
    Open(#[from] std::io::Error),

    /// The input bytes are not a recognizable image in a supported format.
    #[error("failed to decode input image: {0}")]
    Decode(#[from] image::ImageError),

    /// Block size must be at least 1; a zero side length has no defined tile index.
    #[error("invalid block size: {0} (must be a positive integer)")]
    InvalidBlockSize(u32),

    /// The output image could not be created or encoded.
    #[error("failed to write output image: {0}")]
    Write(image::ImageError),
}

/// Result type for mosaic operations.
pub type Result<T> = core::result::Result<T, MosaicError>;
