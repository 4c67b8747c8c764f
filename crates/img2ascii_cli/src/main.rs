use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use img2ascii_render::{output, AsciiOptions, AsciiRenderer, RenderConfig, ScalePolicy};

const USAGE: &str = "\
usage: img2ascii [-d] [-i] [--stdout] <path/to/image> [scale]
  -d apply dithering to image
  -i invert colors
  --stdout print the art instead of writing ascii_<name>.txt
  scale: optional scale factor (default: 0.25)";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert PNG and JPEG images to ASCII art",
    override_usage = "img2ascii [-d] [-i] [--stdout] <path/to/image> [scale]"
)]
struct Cli {
    /// Apply dithering to image (18 glyph ramp)
    #[arg(short = 'd', default_value_t = false)]
    dither: bool,
    /// Invert colors
    #[arg(short = 'i', default_value_t = false)]
    invert: bool,
    /// Print the art to stdout instead of writing a file
    #[arg(long, default_value_t = false)]
    stdout: bool,
    /// Image path followed by an optional scale factor
    #[arg(value_name = "ARGS", allow_negative_numbers = true)]
    args: Vec<String>,
}

#[derive(Debug, PartialEq)]
struct Invocation {
    input: PathBuf,
    scale: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let Some(invocation) = cli.invocation() else {
        println!("{USAGE}");
        return Ok(());
    };

    let options = cli.to_options(invocation.scale);
    convert(&invocation.input, options, cli.stdout)
}

fn convert(input: &Path, options: AsciiOptions, to_stdout: bool) -> Result<()> {
    let renderer = AsciiRenderer::default();
    let rendered = renderer
        .render_path(input, options)
        .with_context(|| format!("failed to render {:?}", input))?;

    if to_stdout {
        print!("{}", rendered.grid.to_text());
        return Ok(());
    }

    let name = output::output_file_name(input, options.config);
    output::write_grid(Path::new(&name), &rendered.grid)
        .with_context(|| format!("failed to save ASCII art for {:?}", input))?;

    println!("Saved ASCII art to ./{name}");
    Ok(())
}

/// Parses a scale factor, accepting only finite positive values.
fn parse_scale(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|scale| scale.is_finite() && *scale > 0.0)
}

impl Cli {
    /// Resolves positional arguments, or `None` when their count is wrong.
    fn invocation(&self) -> Option<Invocation> {
        let (input, scale) = match self.args.as_slice() {
            [input] => (input, None),
            [input, scale] => (input, Some(scale)),
            _ => return None,
        };

        let mut resolved = ScalePolicy::DEFAULT_FACTOR;
        if let Some(raw) = scale {
            match parse_scale(raw) {
                Some(scale) => resolved = scale,
                None => println!("Invalid scale value. Using default scale: {resolved}"),
            }
        }

        Some(Invocation { input: PathBuf::from(input), scale: resolved })
    }

    fn to_options(&self, scale: f64) -> AsciiOptions {
        AsciiOptions {
            config: RenderConfig::new(self.dither, self.invert),
            scale: ScalePolicy::Factor(scale),
        }
    }
}
