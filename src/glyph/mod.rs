//! Glyph selection and drawing

/// Font-backed glyph metrics and rasterization
pub mod font;
/// Ordered character ramp and intensity lookup
pub mod ramp;

pub use font::{FontPainter, GlyphPainter};
pub use ramp::GlyphRamp;
