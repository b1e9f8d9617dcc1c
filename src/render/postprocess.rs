//! Contrast enhancement of the composed canvas

use crate::color::raster::{Raster, SATURATION, VALUE};

/// Equalize saturation and value of an HSV-convertible raster, returning RGB
///
/// Glyphs cover a fraction of each cell and the canvas background is black,
/// so the composed image is dark and desaturated. Flattening the saturation
/// and value histograms restores the contrast. Hue is left untouched.
pub fn enhance_contrast(canvas: &Raster) -> Raster {
    canvas
        .to_hsv()
        .with_equalized(&[SATURATION, VALUE])
        .to_rgb()
}
