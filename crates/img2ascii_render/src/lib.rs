mod ascii;
mod image_pipeline;
pub mod output;

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageFormat};

pub use ascii::{
    grid::{render_grid, GlyphGrid, LightnessGrid},
    mapping::{select_glyph, GlyphMapper, RenderConfig},
    ramp::GlyphRamp,
};
pub use image_pipeline::{
    loader::{load_image, SUPPORTED_FORMATS},
    resize::ScalePolicy,
    sample::{hsl_lightness, sample_lightness},
};

#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    #[error("failed to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: std::io::Error },
    #[error("unsupported image format {format:?} in {}, expected PNG or JPEG", .path.display())]
    UnsupportedFormat { path: PathBuf, format: Option<ImageFormat> },
    #[error("failed to decode {}: {source}", .path.display())]
    Decode { path: PathBuf, source: image::ImageError },
    #[error(
        "scaling a {width}x{height} image by {scale:?} exceeds the {} pixel resize limit",
        ScalePolicy::MAX_PIXELS
    )]
    ScaleTooLarge { scale: ScalePolicy, width: u32, height: u32 },
    #[error("failed to write {}: {source}", .path.display())]
    Output { path: PathBuf, source: std::io::Error },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AsciiOptions {
    pub config: RenderConfig,
    /// Resize applied before sampling.
    pub scale: ScalePolicy,
}

#[derive(Clone, Debug)]
pub struct RenderOutput {
    pub grid: GlyphGrid,
    /// Dimensions of the decoded image before resizing.
    pub source_size: (u32, u32),
}

#[derive(Default)]
pub struct AsciiRenderer;

impl AsciiRenderer {
    pub fn render_path<P: AsRef<Path>>(
        &self,
        path: P,
        options: AsciiOptions,
    ) -> Result<RenderOutput, AsciiError> {
        let image = load_image(path.as_ref())?;
        self.render_image(image, options)
    }

    pub fn render_image(
        &self,
        image: DynamicImage,
        options: AsciiOptions,
    ) -> Result<RenderOutput, AsciiError> {
        let source_size = image.dimensions();
        let resized = options.scale.apply(image)?;

        let lightness = sample_lightness(&resized);
        log::debug!(
            "rendering {}x{} cells with the {} glyph ramp",
            lightness.width(),
            lightness.height(),
            options.config.ramp().len()
        );

        let grid = render_grid(&lightness, options.config);
        Ok(RenderOutput { grid, source_size })
    }
}
