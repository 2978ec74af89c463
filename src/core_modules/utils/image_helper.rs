pub mod image_helper {
    use image::ImageEncoder;
    use std::path::Path;

    /// Serializes an RGBA8 scanline buffer as a PNG file at `path`.
    ///
    /// The buffer must hold exactly `width * height * 4` bytes in row-major
    /// order. Creation and encoding failures are returned to the caller; the
    /// file handle is closed on every exit path by drop.
    pub fn save(
        path: &Path,
        width: u32,
        height: u32,
        buffer: &[u8],
    ) -> Result<(), image::error::ImageError> {
        let output = std::fs::File::create(path)?;
        let encoder = image::codecs::png::PngEncoder::new(output);

        encoder.write_image(buffer, width, height, image::ExtendedColorType::Rgba8)?;

        Ok(())
    }
}
