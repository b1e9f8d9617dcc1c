//! Regular cell grid laid over the source image
//!
//! Cells are anchored at the origin and sized to the glyph cell. Columns and
//! rows that do not fit completely are dropped, so the strip along the right
//! and bottom edges narrower than one cell is never sampled.

use crate::io::error::{Result, configuration_error};

/// One grid cell in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Grid row
    pub row: usize,
    /// Grid column
    pub col: usize,
    /// Left edge in pixels (inclusive)
    pub x: usize,
    /// Top edge in pixels (inclusive)
    pub y: usize,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

impl Cell {
    /// Right edge in pixels (exclusive)
    pub const fn x_end(&self) -> usize {
        self.x + self.width
    }

    /// Bottom edge in pixels (exclusive)
    pub const fn y_end(&self) -> usize {
        self.y + self.height
    }

    /// Number of pixels covered
    pub const fn area(&self) -> usize {
        self.width * self.height
    }
}

/// Grid geometry for one image and glyph cell size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGrid {
    rows: usize,
    cols: usize,
    cell_width: usize,
    cell_height: usize,
}

impl CellGrid {
    /// Lay a grid of `cell_width × cell_height` cells over an image
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the cell size is zero or the cell is
    /// wider or taller than the image, since no cell would fit
    pub fn new(
        image_width: usize,
        image_height: usize,
        cell_width: usize,
        cell_height: usize,
    ) -> Result<Self> {
        if cell_width == 0 || cell_height == 0 {
            return Err(configuration_error(
                "cell_size",
                &format!("{cell_width}x{cell_height}"),
                &"glyph cell must be at least one pixel in each direction",
            ));
        }
        if cell_width > image_width {
            return Err(configuration_error(
                "cell_width",
                &cell_width,
                &format!("wider than the {image_width} pixel image, no cells fit"),
            ));
        }
        if cell_height > image_height {
            return Err(configuration_error(
                "cell_height",
                &cell_height,
                &format!("taller than the {image_height} pixel image, no cells fit"),
            ));
        }

        Ok(Self {
            rows: image_height / cell_height,
            cols: image_width / cell_width,
            cell_width,
            cell_height,
        })
    }

    /// Number of cell rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cell columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Cell width in pixels
    pub const fn cell_width(&self) -> usize {
        self.cell_width
    }

    /// Cell height in pixels
    pub const fn cell_height(&self) -> usize {
        self.cell_height
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Cell at grid position `(row, col)`
    pub const fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(Cell {
            row,
            col,
            x: col * self.cell_width,
            y: row * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        })
    }

    /// Cells of one grid row, left to right
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cols).filter_map(move |col| self.cell(row, col))
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| self.row_cells(row))
    }
}
