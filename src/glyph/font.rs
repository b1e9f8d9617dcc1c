//! Glyph cell metrics and rasterization onto canvas bands

use crate::io::configuration::{METRICS_GLYPH, MIN_FONT_SIZE};
use crate::io::error::{Result, configuration_error, font_error};
use fontdue::{Font, FontSettings};
use ndarray::ArrayViewMut3;
use std::path::Path;

/// Draws single characters into a pixel region
///
/// The renderer sizes its grid from [`GlyphPainter::cell_size`] and paints
/// every cell with the same painter, so metrics and drawing never disagree.
pub trait GlyphPainter: Sync {
    /// Cell size in pixels as `(width, height)`
    fn cell_size(&self) -> (usize, usize);

    /// Draw `glyph` in `color` with its cell's top-left corner at `(x, y)`
    ///
    /// `band` is a height × width × 3 RGB region; anything falling outside it
    /// is clipped.
    fn paint(
        &self,
        band: &mut ArrayViewMut3<'_, u8>,
        x: usize,
        y: usize,
        glyph: char,
        color: [u8; 3],
    );
}

/// Anti-aliased glyph painter backed by a TrueType/OpenType font
pub struct FontPainter {
    font: Font,
    px: f32,
    ascent: f32,
    cell_width: usize,
    cell_height: usize,
}

impl FontPainter {
    /// Load a font file at the given pixel size
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `size` is below [`MIN_FONT_SIZE`]
    /// - The file cannot be read
    /// - The file is not a parseable font
    /// - The font yields a zero-sized cell at this size
    pub fn load<P: AsRef<Path>>(path: P, size: u32) -> Result<Self> {
        let path = path.as_ref();
        if size < MIN_FONT_SIZE {
            return Err(configuration_error(
                "font_size",
                &size,
                &format!("must be at least {MIN_FONT_SIZE} pixels"),
            ));
        }
        let bytes = std::fs::read(path).map_err(|e| font_error(path, &e))?;
        Self::from_bytes(&bytes, size).map_err(|reason| font_error(path, &reason))
    }

    /// Parse font data already in memory
    ///
    /// # Errors
    ///
    /// Returns a description of the failure if the data is not a font or its
    /// metrics give an empty cell
    pub fn from_bytes(bytes: &[u8], size: u32) -> std::result::Result<Self, String> {
        let px = size as f32;
        let settings = FontSettings {
            scale: px,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(bytes, settings).map_err(str::to_string)?;

        let line = font
            .horizontal_line_metrics(px)
            .ok_or_else(|| "font has no horizontal line metrics".to_string())?;
        let advance = font.metrics(METRICS_GLYPH, px).advance_width;

        let cell_width = advance.ceil().max(0.0) as usize;
        let cell_height = (line.ascent - line.descent).ceil().max(0.0) as usize;
        if cell_width == 0 || cell_height == 0 {
            return Err(format!(
                "glyph cell at {size}px is {cell_width}x{cell_height} pixels"
            ));
        }

        Ok(Self {
            font,
            px,
            ascent: line.ascent,
            cell_width,
            cell_height,
        })
    }
}

impl GlyphPainter for FontPainter {
    fn cell_size(&self) -> (usize, usize) {
        (self.cell_width, self.cell_height)
    }

    fn paint(
        &self,
        band: &mut ArrayViewMut3<'_, u8>,
        x: usize,
        y: usize,
        glyph: char,
        color: [u8; 3],
    ) {
        let (metrics, coverage) = self.font.rasterize(glyph, self.px);
        if metrics.width == 0 {
            return;
        }

        // Bitmap rows run top to bottom; ymin is the offset of its bottom edge
        let baseline = y as i64 + self.ascent.round() as i64;
        let top = baseline - (i64::from(metrics.ymin) + metrics.height as i64);
        let left = x as i64 + i64::from(metrics.xmin);
        let (height, width, _) = band.dim();

        for (row, line) in coverage.chunks(metrics.width).enumerate() {
            let py = top + row as i64;
            if py < 0 || py >= height as i64 {
                continue;
            }
            for (col, &alpha) in line.iter().enumerate() {
                let px = left + col as i64;
                if alpha == 0 || px < 0 || px >= width as i64 {
                    continue;
                }
                for (channel, ink) in (0..color.len()).zip(color) {
                    if let Some(dst) = band.get_mut((py as usize, px as usize, channel)) {
                        *dst = blend(*dst, ink, alpha);
                    }
                }
            }
        }
    }
}

/// Composite `ink` over `dst` with 8-bit coverage `alpha`
pub fn blend(dst: u8, ink: u8, alpha: u8) -> u8 {
    let alpha = u16::from(alpha);
    let mixed = u16::from(ink) * alpha + u16::from(dst) * (255 - alpha);
    ((mixed + 127) / 255) as u8
}
