use image::DynamicImage;

use crate::ascii::grid::LightnessGrid;

/// HSL lightness of an 8-bit RGB color, normalized to `[0, 1]`.
pub fn hsl_lightness(r: u8, g: u8, b: u8) -> f64 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    (f64::from(max) + f64::from(min)) / (2.0 * 255.0)
}

/// Samples every pixel of `image`. Alpha is ignored.
pub fn sample_lightness(image: &DynamicImage) -> LightnessGrid {
    let rgb = image.to_rgb8();
    let values = rgb.pixels().map(|pixel| hsl_lightness(pixel[0], pixel[1], pixel[2])).collect();
    LightnessGrid::new(rgb.width(), rgb.height(), values)
}
