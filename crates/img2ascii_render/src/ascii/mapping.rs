use super::{
    grid::{GlyphGrid, LightnessGrid},
    ramp::GlyphRamp,
};

/// Selects the ramp and its ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Use the 18 glyph ramp instead of the 9 glyph one.
    pub dither: bool,
    /// Keep the ramp in declared order instead of reversing it.
    pub invert: bool,
}

impl RenderConfig {
    pub fn new(dither: bool, invert: bool) -> Self {
        Self { dither, invert }
    }

    pub fn ramp(&self) -> GlyphRamp {
        GlyphRamp::for_dither(self.dither)
    }
}

pub fn select_glyph(lightness: f64, invert: bool, dither: bool) -> char {
    let ramp = GlyphRamp::for_dither(dither);
    ramp.glyph(ramp.bucket(lightness), invert)
}

/// Maps lightness values to glyphs for one fixed [`RenderConfig`].
pub struct GlyphMapper {
    ramp: GlyphRamp,
    glyphs: Vec<char>,
}

impl GlyphMapper {
    pub fn new(config: RenderConfig) -> Self {
        let ramp = config.ramp();
        let glyphs = ramp.ordered(config.invert);
        Self { ramp, glyphs }
    }

    pub fn select(&self, lightness: f64) -> char {
        self.glyphs[self.ramp.bucket(lightness)]
    }

    /// Folds the grid row by row, left to right.
    pub fn render(&self, grid: &LightnessGrid) -> GlyphGrid {
        let mut cells = Vec::with_capacity(grid.values().len());
        for row in grid.rows() {
            cells.extend(row.iter().map(|&lightness| self.select(lightness)));
        }

        GlyphGrid::new(grid.width(), grid.height(), cells)
    }
}
