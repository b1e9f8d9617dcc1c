//! Glyph-art rendering of raster images
//!
//! The image is tiled into cells the size of one font glyph. Each cell's mean
//! saturation and value pick a character from an ordered density ramp, the
//! cell's mean color tints it, and the glyphs are composited onto a black
//! canvas whose saturation and value histograms are then equalized.

#![forbid(unsafe_code)]

/// Color spaces, rasters and histogram equalization
pub mod color;
/// Glyph ramp lookup and font rasterization
pub mod glyph;
/// Input/output operations and error handling
pub mod io;
/// Grid iteration, sampling and composition
pub mod render;

pub use io::error::{AsciifyError, Result};
