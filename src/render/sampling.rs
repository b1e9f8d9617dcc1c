//! Per-cell intensity and color statistics

use crate::color::raster::{Raster, SATURATION, VALUE};
use crate::io::error::{Result, render_error};
use crate::render::grid::Cell;
use ndarray::{ArrayView2, ArrayView3, Axis};

/// Summary of one cell used to pick and color its glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSample {
    /// Cell the statistics were taken over
    pub cell: Cell,
    /// Mean of the saturation and value channel means
    pub intensity: f64,
    /// Per-channel mean RGB, truncated to 8 bits
    pub color: [u8; 3],
}

/// Arithmetic mean of a plane, `None` when it has no samples
pub fn channel_mean(plane: ArrayView2<'_, u8>) -> Option<f64> {
    let count = plane.len();
    if count == 0 {
        return None;
    }
    let sum: u64 = plane.iter().map(|&value| u64::from(value)).sum();
    Some(sum as f64 / count as f64)
}

/// Per-channel mean of a window truncated to 8 bits, `None` when empty
pub fn mean_color(window: ArrayView3<'_, u8>) -> Option<[u8; 3]> {
    let (height, width, _) = window.dim();
    let count = (height * width) as u64;
    if count == 0 {
        return None;
    }
    let mut color = [0u8; 3];
    for (channel, slot) in color.iter_mut().enumerate() {
        let sum: u64 = window
            .index_axis(Axis(2), channel)
            .iter()
            .map(|&value| u64::from(value))
            .sum();
        *slot = (sum / count) as u8;
    }
    Some(color)
}

fn cell_window<'a>(
    raster: &'a Raster,
    cell: &Cell,
    stage: &'static str,
) -> Result<ArrayView3<'a, u8>> {
    if cell.area() == 0 {
        return Err(render_error(
            stage,
            &format!("cell ({}, {}) covers no pixels", cell.row, cell.col),
        ));
    }
    raster
        .window(cell.y, cell.x, cell.height, cell.width)
        .ok_or_else(|| {
            render_error(
                stage,
                &format!(
                    "cell [{}, {}) x [{}, {}) leaves the {}x{} image",
                    cell.x,
                    cell.x_end(),
                    cell.y,
                    cell.y_end(),
                    raster.width(),
                    raster.height()
                ),
            )
        })
}

/// Average of the saturation and value means over the cell of an HSV raster
///
/// # Errors
///
/// Returns a render error if the cell is empty or leaves the raster
pub fn cell_intensity(hsv: &Raster, cell: &Cell) -> Result<f64> {
    let window = cell_window(hsv, cell, "intensity sampling")?;
    let saturation = channel_mean(window.index_axis(Axis(2), SATURATION));
    let value = channel_mean(window.index_axis(Axis(2), VALUE));
    match (saturation, value) {
        (Some(s), Some(v)) => Ok(f64::midpoint(s, v)),
        _ => Err(render_error("intensity sampling", &"empty channel window")),
    }
}

/// Mean color over the cell of an RGB raster
///
/// # Errors
///
/// Returns a render error if the cell is empty or leaves the raster
pub fn cell_color(rgb: &Raster, cell: &Cell) -> Result<[u8; 3]> {
    let window = cell_window(rgb, cell, "color sampling")?;
    mean_color(window).ok_or_else(|| render_error("color sampling", &"empty color window"))
}

/// Intensity and color of one cell
///
/// # Errors
///
/// Returns a render error if the cell is empty or leaves either raster
pub fn sample_cell(hsv: &Raster, rgb: &Raster, cell: Cell) -> Result<CellSample> {
    Ok(CellSample {
        cell,
        intensity: cell_intensity(hsv, &cell)?,
        color: cell_color(rgb, &cell)?,
    })
}
