//! Tile renderer: grid pass, glyph selection and canvas composition
//!
//! The pass runs one task per grid row. Each task reads its own cells from the
//! shared read-only HSV and RGB rasters and writes only to its own horizontal
//! band of the canvas, obtained by splitting the canvas buffer into disjoint
//! chunks. No locking is involved and the output does not depend on the
//! number of worker threads.

use crate::color::raster::{ColorSpace, Raster, SATURATION, VALUE};
use crate::glyph::font::GlyphPainter;
use crate::glyph::ramp::GlyphRamp;
use crate::io::configuration::INTENSITY_UPPER_BOUND;
use crate::io::error::{Result, configuration_error, render_error};
use crate::io::progress::ProgressReporter;
use crate::render::grid::CellGrid;
use crate::render::postprocess::enhance_contrast;
use crate::render::sampling::sample_cell;
use log::{debug, info};
use ndarray::ArrayViewMut3;
use rayon::prelude::*;

/// Parameters of a render, passed explicitly to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Glyphs ordered from lowest to highest intensity
    pub ramp: GlyphRamp,
    /// Intensity mapped past the last glyph
    pub upper_bound: f64,
    /// Equalize saturation and value of the source before sampling
    pub pre_equalize: bool,
    /// Paint every glyph in this color instead of the cell mean
    pub uniform_color: Option<[u8; 3]>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ramp: GlyphRamp::reference(),
            upper_bound: INTENSITY_UPPER_BOUND,
            pre_equalize: false,
            uniform_color: None,
        }
    }
}

impl RenderConfig {
    /// Check the parameters can be used for rendering
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the upper bound is not a positive
    /// finite number or the ramp is empty
    pub fn validate(&self) -> Result<()> {
        if !self.upper_bound.is_finite() || self.upper_bound <= 0.0 {
            return Err(configuration_error(
                "upper_bound",
                &self.upper_bound,
                &"must be a positive finite number",
            ));
        }
        if self.ramp.is_empty() {
            return Err(configuration_error(
                "ramp",
                &"",
                &"glyph ramp needs at least one character",
            ));
        }
        Ok(())
    }
}

/// A glyph ready to be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedGlyph {
    /// Selected character
    pub glyph: char,
    /// Fill color
    pub color: [u8; 3],
    /// Left edge of the cell on the canvas
    pub x: usize,
    /// Top edge of the cell on the canvas
    pub y: usize,
}

/// Turns source images into glyph renderings
pub struct TileRenderer<P> {
    config: RenderConfig,
    painter: P,
}

impl<P: GlyphPainter> TileRenderer<P> {
    /// Create a renderer from a configuration and the painter used for both
    /// cell metrics and drawing
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation
    pub fn new(config: RenderConfig, painter: P) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, painter })
    }

    /// Active configuration
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Painter used for metrics and drawing
    pub const fn painter(&self) -> &P {
        &self.painter
    }

    /// Grid the painter's cell size lays over `source`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no cell fits the image
    pub fn grid_for(&self, source: &Raster) -> Result<CellGrid> {
        let (cell_width, cell_height) = self.painter.cell_size();
        CellGrid::new(source.width(), source.height(), cell_width, cell_height)
    }

    /// HSV raster for intensity sampling and RGB raster for color sampling
    ///
    /// The RGB raster is derived from the HSV one rather than copied from the
    /// source, so it carries the conversion rounding and any equalization.
    pub fn prepare(&self, source: &Raster) -> (Raster, Raster) {
        let mut hsv = source.to_hsv();
        if self.config.pre_equalize {
            hsv = hsv.with_equalized(&[SATURATION, VALUE]);
        }
        let rgb = hsv.to_rgb();
        (hsv, rgb)
    }

    fn plan_row(
        &self,
        grid: &CellGrid,
        hsv: &Raster,
        rgb: &Raster,
        row: usize,
    ) -> Result<Vec<RenderedGlyph>> {
        grid.row_cells(row)
            .map(|cell| {
                let sample = sample_cell(hsv, rgb, cell)?;
                Ok(RenderedGlyph {
                    glyph: self
                        .config
                        .ramp
                        .select(sample.intensity, self.config.upper_bound),
                    color: self.config.uniform_color.unwrap_or(sample.color),
                    x: cell.x,
                    y: cell.y,
                })
            })
            .collect()
    }

    /// Glyph, color and position for every cell, in row-major order
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no cell fits the image, or a render
    /// error if a cell cannot be sampled
    pub fn plan(&self, source: &Raster) -> Result<Vec<RenderedGlyph>> {
        let grid = self.grid_for(source)?;
        let (hsv, rgb) = self.prepare(source);
        let rows = (0..grid.rows())
            .into_par_iter()
            .map(|row| self.plan_row(&grid, &hsv, &rgb, row))
            .collect::<Result<Vec<_>>>()?;
        Ok(rows.into_iter().flatten().collect())
    }

    /// Draw every cell's glyph onto a black canvas, before contrast enhancement
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no cell fits the image, or a render
    /// error if a cell cannot be sampled or the canvas cannot be split
    pub fn compose(&self, source: &Raster, progress: &ProgressReporter) -> Result<Raster> {
        let grid = self.grid_for(source)?;
        debug!(
            "grid {}x{} cells of {}x{} px over {}x{} image",
            grid.cols(),
            grid.rows(),
            grid.cell_width(),
            grid.cell_height(),
            source.width(),
            source.height()
        );

        let (hsv, rgb) = self.prepare(source);
        let mut canvas = Raster::new(source.height(), source.width(), ColorSpace::Rgb);
        let row_len = canvas.width() * Raster::CHANNELS;
        let band_len = grid.cell_height() * row_len;
        let pixels = canvas
            .as_slice_mut()
            .ok_or_else(|| render_error("composition", &"canvas buffer is not contiguous"))?;

        pixels
            .par_chunks_mut(band_len)
            .take(grid.rows())
            .enumerate()
            .try_for_each(|(row, band)| -> Result<()> {
                let glyphs = self.plan_row(&grid, &hsv, &rgb, row)?;
                let band_top = row * grid.cell_height();
                let mut view = ArrayViewMut3::from_shape(
                    (band.len() / row_len, row_len / Raster::CHANNELS, Raster::CHANNELS),
                    band,
                )
                .map_err(|e| render_error("composition", &e))?;

                for glyph in &glyphs {
                    self.painter.paint(
                        &mut view,
                        glyph.x,
                        glyph.y - band_top,
                        glyph.glyph,
                        glyph.color,
                    );
                }
                progress.row_done();
                Ok(())
            })?;

        Ok(canvas)
    }

    /// Full render: composition followed by contrast enhancement
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no cell fits the image, or a render
    /// error if composition fails
    pub fn render(&self, source: &Raster) -> Result<Raster> {
        self.render_with_progress(source, &ProgressReporter::hidden())
    }

    /// Full render reporting each finished grid row to `progress`
    ///
    /// # Errors
    ///
    /// Same as [`TileRenderer::render`]
    pub fn render_with_progress(
        &self,
        source: &Raster,
        progress: &ProgressReporter,
    ) -> Result<Raster> {
        info!(
            "rendering {}x{} image with {} glyphs",
            source.width(),
            source.height(),
            self.config.ramp.len()
        );
        let canvas = self.compose(source, progress)?;
        Ok(enhance_contrast(&canvas))
    }
}
