//! Grid iteration, cell sampling and canvas composition
//!
//! This module contains:
//! - Cell grid geometry and edge truncation
//! - Per-cell intensity and color statistics
//! - The tile renderer driving the parallel grid pass
//! - Post-processing of the composed canvas

/// Cell grid geometry
pub mod grid;
/// Contrast enhancement after composition
pub mod postprocess;
/// Render configuration and the tile renderer
pub mod renderer;
/// Cell statistics
pub mod sampling;

pub use grid::{Cell, CellGrid};
pub use renderer::{RenderConfig, RenderedGlyph, TileRenderer};
