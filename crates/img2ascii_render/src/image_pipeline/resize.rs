use image::{imageops::FilterType, DynamicImage, GenericImageView};

use crate::AsciiError;

/// Optional resize step in front of sampling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScalePolicy {
    /// Sample the decoded image at its own size.
    Original,
    /// Scale the width by a positive factor and derive the height from the aspect ratio.
    Factor(f64),
}

impl Default for ScalePolicy {
    fn default() -> Self {
        ScalePolicy::Factor(ScalePolicy::DEFAULT_FACTOR)
    }
}

impl ScalePolicy {
    pub const DEFAULT_FACTOR: f64 = 0.25;

    /// Largest resized image, in pixels, that [`ScalePolicy::apply`] will produce.
    pub const MAX_PIXELS: u64 = 1 << 26;

    /// Output size for a source image. Never smaller than 1x1 for a non-empty source.
    ///
    /// `None` when the factor would produce more than [`ScalePolicy::MAX_PIXELS`] pixels.
    pub fn target_dimensions(&self, source_width: u32, source_height: u32) -> Option<(u32, u32)> {
        if source_width == 0 || source_height == 0 {
            return Some((source_width, source_height));
        }

        match *self {
            ScalePolicy::Original => Some((source_width, source_height)),
            ScalePolicy::Factor(factor) => {
                let columns = (source_width as f64 * factor).trunc().max(1.0);
                let ratio = columns / source_width as f64;
                let rows = (0.7 + source_height as f64 * ratio).trunc().max(1.0);
                if columns * rows > Self::MAX_PIXELS as f64 {
                    return None;
                }
                Some((columns as u32, rows as u32))
            },
        }
    }

    pub fn apply(&self, image: DynamicImage) -> Result<DynamicImage, AsciiError> {
        let (width, height) = image.dimensions();
        let (columns, rows) = self
            .target_dimensions(width, height)
            .ok_or(AsciiError::ScaleTooLarge { scale: *self, width, height })?;
        if (columns, rows) == (width, height) {
            return Ok(image);
        }

        log::debug!("resizing {width}x{height} to {columns}x{rows}");
        Ok(image.resize_exact(columns, rows, FilterType::Lanczos3))
    }
}
