use super::mapping::{GlyphMapper, RenderConfig};

/// Per-pixel lightness in `[0, 1]`, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct LightnessGrid {
    width: u32,
    height: u32,
    values: Vec<f64>,
}

impl LightnessGrid {
    pub fn new(width: u32, height: u32, values: Vec<f64>) -> Self {
        assert_eq!(width as usize * height as usize, values.len());
        let values = values.into_iter().map(|v| v.clamp(0.0, 1.0)).collect();
        Self { width, height, values }
    }

    pub fn from_fn<F>(width: u32, height: u32, mut sample: F) -> Self
    where
        F: FnMut(u32, u32) -> f64,
    {
        let mut values = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                values.push(sample(x, y));
            }
        }
        Self::new(width, height, values)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.values.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Rows from top to bottom. Empty for a zero-width grid.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        let width = (self.width as usize).max(1);
        self.values.chunks(width)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphGrid {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<char>,
}

impl GlyphGrid {
    pub fn new(width: u32, height: u32, cells: Vec<char>) -> Self {
        assert_eq!(width as usize * height as usize, cells.len());
        Self { width, height, cells }
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        let width = (self.width as usize).max(1);
        self.cells.chunks(width).map(|row| row.iter().collect::<String>())
    }

    /// Every row followed by a newline.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.cells.len() * 3 + self.height as usize);
        for row in self.rows() {
            text.push_str(&row);
            text.push('\n');
        }
        text
    }
}

pub fn render_grid(grid: &LightnessGrid, config: RenderConfig) -> GlyphGrid {
    GlyphMapper::new(config).render(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard() -> LightnessGrid {
        // white, black / white, black
        LightnessGrid::new(2, 2, vec![1.0, 0.0, 1.0, 0.0])
    }

    #[test]
    fn indexing_is_x_then_y() {
        let grid = LightnessGrid::from_fn(3, 2, |x, y| (x + 3 * y) as f64 / 10.0);
        assert_eq!(grid.get(0, 0), Some(0.0));
        assert_eq!(grid.get(2, 0), Some(0.2));
        assert_eq!(grid.get(1, 1), Some(0.4));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn values_are_clamped() {
        let grid = LightnessGrid::new(2, 1, vec![-1.0, 2.0]);
        assert_eq!(grid.values(), &[0.0, 1.0]);
    }

    #[test]
    fn two_by_two_scenario() {
        let glyphs = render_grid(&checkerboard(), RenderConfig::default());
        let rows: Vec<String> = glyphs.rows().collect();
        assert_eq!(rows, vec![" █", " █"]);

        let inverted = render_grid(&checkerboard(), RenderConfig::new(false, true));
        let rows: Vec<String> = inverted.rows().collect();
        assert_eq!(rows, vec!["█ ", "█ "]);
    }

    #[test]
    fn output_shape_matches_grid() {
        let grid = LightnessGrid::from_fn(7, 5, |x, y| ((x * y) % 10) as f64 / 9.0);
        for dither in [false, true] {
            let glyphs = render_grid(&grid, RenderConfig::new(dither, false));
            let rows: Vec<String> = glyphs.rows().collect();
            assert_eq!(rows.len(), 5);
            assert!(rows.iter().all(|row| row.chars().count() == 7));
        }
    }

    #[test]
    fn rendering_is_repeatable() {
        let grid = LightnessGrid::from_fn(16, 4, |x, y| (x as f64 / 15.0 + y as f64 / 8.0) / 2.0);
        let config = RenderConfig::new(true, true);
        assert_eq!(render_grid(&grid, config).to_text(), render_grid(&grid, config).to_text());
    }

    #[test]
    fn text_ends_every_row_with_newline() {
        let text = render_grid(&checkerboard(), RenderConfig::default()).to_text();
        assert_eq!(text, " █\n █\n");
    }

    #[test]
    fn empty_grid_renders_nothing() {
        let grid = LightnessGrid::new(0, 0, Vec::new());
        let glyphs = render_grid(&grid, RenderConfig::default());
        assert_eq!(glyphs.rows().count(), 0);
        assert_eq!(glyphs.to_text(), "");
    }
}
