use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::io::Reader;
use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::AsciiError;

/// Formats accepted by [`load_image`].
pub const SUPPORTED_FORMATS: [ImageFormat; 2] = [ImageFormat::Png, ImageFormat::Jpeg];

/// Decodes a PNG or JPEG file. The format is sniffed from the content, not the extension.
pub fn load_image(path: &Path) -> Result<DynamicImage, AsciiError> {
    let file = File::open(path)
        .map_err(|source| AsciiError::Open { path: path.to_path_buf(), source })?;
    let reader = Reader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|source| AsciiError::Open { path: path.to_path_buf(), source })?;

    match reader.format() {
        Some(format) if SUPPORTED_FORMATS.contains(&format) => {
            log::debug!("decoding {} as {format:?}", path.display());
        },
        format => {
            return Err(AsciiError::UnsupportedFormat { path: path.to_path_buf(), format })
        },
    }

    let image = reader
        .decode()
        .map_err(|source| AsciiError::Decode { path: path.to_path_buf(), source })?;
    let (width, height) = image.dimensions();
    log::debug!("decoded {} ({width}x{height})", path.display());
    Ok(image)
}
