//! Rendering constants and runtime configuration defaults

/// Glyph ramp ordered from heaviest ink coverage to lightest
///
/// Sorted by how much of a monospace cell each character covers
/// (Paul Bourke's 70-level ramp, trimmed). Reversed at construction so
/// index 0 is the blank glyph.
pub const REFERENCE_DENSITY_RAMP: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/|(1{[?-_+~<i!lI;:,\"^`'. ";

/// Divisor mapping a cell intensity onto the glyph ramp
///
/// Intensity is the mean of two channels that top out at 255, so the
/// upper part of the ramp is never reached with this value.
pub const INTENSITY_UPPER_BOUND: f64 = 360.0;

/// Font size in pixels
pub const DEFAULT_FONT_SIZE: u32 = 8;

// Smaller sizes collapse the glyph cell and make the grid degenerate
/// Smallest accepted font size in pixels
pub const MIN_FONT_SIZE: u32 = 5;

/// Character whose advance width defines the cell width
pub const METRICS_GLYPH: char = '.';

/// Monospace font shipped in the repository's `fonts/` directory
pub const DEFAULT_FONT_PATH: &str = "fonts/DejaVuSansMono.ttf";

/// Output file written to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "out.png";

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
