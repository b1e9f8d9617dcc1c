//! Command-line interface for rendering one image as glyph art

use crate::glyph::font::FontPainter;
use crate::glyph::ramp::GlyphRamp;
use crate::io::configuration::{
    DEFAULT_FONT_PATH, DEFAULT_FONT_SIZE, DEFAULT_OUTPUT_PATH, INTENSITY_UPPER_BOUND,
};
use crate::io::error::Result;
use crate::io::image::{load_raster, save_raster};
use crate::io::progress::ProgressReporter;
use crate::render::renderer::{RenderConfig, TileRenderer};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(
    author,
    version,
    about = "Render an image as colored glyphs on a black canvas"
)]
/// Command-line arguments for the renderer
pub struct Cli {
    /// Input image file to render
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Where to write the rendered image (format follows the extension)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Monospace font used for glyph metrics and drawing
    #[arg(short, long, default_value = DEFAULT_FONT_PATH)]
    pub font: PathBuf,

    /// Font size in pixels
    #[arg(short = 's', long, default_value_t = DEFAULT_FONT_SIZE)]
    pub font_size: u32,

    /// Intensity that maps past the last glyph of the ramp
    #[arg(short, long, default_value_t = INTENSITY_UPPER_BOUND)]
    pub upper_bound: f64,

    /// Equalize saturation and value of the source before sampling
    #[arg(short, long)]
    pub pre_equalize: bool,

    /// Paint every glyph in one color, given as R,G,B
    #[arg(long, value_name = "R,G,B", value_parser = parse_rgb)]
    pub uniform_color: Option<[u8; 3]>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Render configuration described by the arguments
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            ramp: GlyphRamp::reference(),
            upper_bound: self.upper_bound,
            pre_equalize: self.pre_equalize,
            uniform_color: self.uniform_color,
        }
    }
}

/// Parse an `R,G,B` triple of 8-bit values
///
/// # Errors
///
/// Returns a message if there are not exactly three comma-separated values
/// in `0..=255`
pub fn parse_rgb(text: &str) -> std::result::Result<[u8; 3], String> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let [r, g, b] = *parts.as_slice() else {
        return Err(format!("expected R,G,B but got '{text}'"));
    };
    let channel = |part: &str| {
        part.parse::<u8>()
            .map_err(|e| format!("invalid channel '{part}': {e}"))
    };
    Ok([channel(r)?, channel(g)?, channel(b)?])
}

/// Runs one render as described by the CLI arguments
pub struct FileProcessor {
    cli: Cli,
}

impl FileProcessor {
    /// Create a new processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Arguments this processor runs with
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Load, render and save
    ///
    /// # Errors
    ///
    /// Returns an error if the image or font cannot be loaded, the glyph cell
    /// does not fit the image, rendering fails, or the output cannot be saved
    pub fn process(&self) -> Result<()> {
        let start_time = Instant::now();

        let config = self.cli.render_config();
        config.validate()?;

        info!("loading {}", self.cli.target.display());
        let source = load_raster(&self.cli.target)?;
        let painter = FontPainter::load(&self.cli.font, self.cli.font_size)?;
        let renderer = TileRenderer::new(config, painter)?;
        let grid = renderer.grid_for(&source)?;

        let progress = if self.cli.should_show_progress() {
            ProgressReporter::new(grid.rows(), "rendering")
        } else {
            ProgressReporter::hidden()
        };
        let output = renderer.render_with_progress(&source, &progress)?;
        progress.finish();
        debug!("rendered {} cells", grid.cell_count());

        save_raster(&output, &self.cli.output)?;
        info!(
            "wrote {} in {:.2?}",
            self.cli.output.display(),
            start_time.elapsed()
        );
        Ok(())
    }
}
