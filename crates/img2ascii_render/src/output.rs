use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::ascii::{grid::GlyphGrid, mapping::RenderConfig};
use crate::AsciiError;

/// `ascii_<stem>[_inverted][_dithered].txt`, where `<stem>` is the input file name
/// without directories or extension.
pub fn output_file_name(input: &Path, config: RenderConfig) -> String {
    let stem = input.file_stem().map(|stem| stem.to_string_lossy()).unwrap_or_default();

    let mut name = format!("ascii_{stem}");
    if config.invert {
        name.push_str("_inverted");
    }
    if config.dither {
        name.push_str("_dithered");
    }
    name.push_str(".txt");
    name
}

/// Writes every row of `grid` followed by a newline, replacing any existing file.
pub fn write_grid(path: &Path, grid: &GlyphGrid) -> Result<(), AsciiError> {
    let output_error =
        |source: std::io::Error| AsciiError::Output { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(output_error)?;
    let mut writer = BufWriter::new(file);
    for row in grid.rows() {
        writeln!(writer, "{row}").map_err(output_error)?;
    }
    writer.flush().map_err(output_error)?;

    log::debug!("wrote {} rows to {}", grid.height, path.display());
    Ok(())
}
