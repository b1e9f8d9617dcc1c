//! Tests for rendering constants

#[cfg(test)]
mod tests {
    use asciify::io::configuration::{
        DEFAULT_FONT_PATH, DEFAULT_FONT_SIZE, DEFAULT_OUTPUT_PATH, INTENSITY_UPPER_BOUND,
        METRICS_GLYPH, MIN_FONT_SIZE, PROGRESS_BAR_WIDTH, REFERENCE_DENSITY_RAMP,
    };
    use std::collections::HashSet;

    // Tests the density ramp runs from heaviest glyph to blank
    // Verified by reversing the literal
    #[test]
    fn test_density_ramp_endpoints() {
        assert!(REFERENCE_DENSITY_RAMP.starts_with('$'));
        assert!(REFERENCE_DENSITY_RAMP.ends_with(' '));
    }

    // Tests the density ramp has 65 unique glyphs
    // Verified by duplicating a character
    #[test]
    fn test_density_ramp_unique() {
        let unique: HashSet<char> = REFERENCE_DENSITY_RAMP.chars().collect();
        assert_eq!(unique.len(), REFERENCE_DENSITY_RAMP.chars().count());
        assert_eq!(unique.len(), 65);
    }

    // Tests intensity bound value
    // Verified by changing bound to 255
    #[test]
    fn test_intensity_upper_bound() {
        assert!((INTENSITY_UPPER_BOUND - 360.0).abs() < f64::EPSILON);
    }

    // Tests default font size respects the minimum
    // Verified by lowering default below minimum
    #[test]
    fn test_font_size_defaults() {
        assert_eq!(DEFAULT_FONT_SIZE, 8);
        assert_eq!(MIN_FONT_SIZE, 5);
        assert!(DEFAULT_FONT_SIZE >= MIN_FONT_SIZE);
    }

    // Tests default paths and that the default font ships with the crate
    // Verified by pointing the font path at a missing file
    #[test]
    fn test_default_paths() {
        assert_eq!(DEFAULT_OUTPUT_PATH, "out.png");
        assert!(DEFAULT_FONT_PATH.ends_with(".ttf"));
        assert!(
            std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
                .join(DEFAULT_FONT_PATH)
                .is_file()
        );
    }

    // Tests cell width comes from the period glyph
    // Verified by measuring a wide glyph instead
    #[test]
    fn test_metrics_glyph() {
        assert_eq!(METRICS_GLYPH, '.');
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
    }
}
