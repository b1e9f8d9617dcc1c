//! Pixel buffers and the color-space transforms applied to them
//!
//! This module contains:
//! - Tagged RGB/HSV rasters backed by `ndarray`
//! - 8-bit RGB ↔ HSV conversion
//! - Histogram equalization of single channels

/// Histogram equalization for 8-bit planes
pub mod equalize;
/// Per-pixel RGB ↔ HSV conversion
pub mod hsv;
/// Three-channel rasters and channel access
pub mod raster;

pub use raster::{ColorSpace, Raster};
