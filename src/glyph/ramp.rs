//! Ordered glyph set mapping a continuous intensity onto a character

use crate::io::configuration::REFERENCE_DENSITY_RAMP;
use crate::io::error::{Result, configuration_error};
use std::collections::HashSet;

/// Fixed ordered sequence of unique characters
///
/// Index 0 is selected for the lowest intensities, the last index for the
/// highest. The ramp is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    /// Build a ramp that keeps the given order
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the sequence is empty or contains a
    /// repeated character
    pub fn new<I>(glyphs: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let glyphs: Vec<char> = glyphs.into_iter().collect();
        if glyphs.is_empty() {
            return Err(configuration_error(
                "ramp",
                &"",
                &"glyph ramp needs at least one character",
            ));
        }

        let mut seen = HashSet::with_capacity(glyphs.len());
        if let Some(duplicate) = glyphs.iter().find(|&&glyph| !seen.insert(glyph)) {
            return Err(configuration_error(
                "ramp",
                &glyphs.iter().collect::<String>(),
                &format!("character {duplicate:?} appears more than once"),
            ));
        }

        Ok(Self { glyphs })
    }

    /// Build a ramp from a heaviest-to-lightest literal, reversing it so the
    /// lightest glyph comes first
    ///
    /// # Errors
    ///
    /// Returns a configuration error under the same conditions as [`GlyphRamp::new`]
    pub fn from_density(literal: &str) -> Result<Self> {
        Self::new(literal.chars().rev())
    }

    /// The reference ramp, blank glyph first
    pub fn reference() -> Self {
        Self {
            glyphs: REFERENCE_DENSITY_RAMP.chars().rev().collect(),
        }
    }

    /// Number of glyphs
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the ramp has no glyphs, which construction rules out
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyphs in ramp order
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Glyph selected for the lowest intensities
    pub fn first(&self) -> char {
        self.glyphs.first().copied().unwrap_or(' ')
    }

    /// Glyph selected at and past the upper bound
    pub fn last(&self) -> char {
        self.glyphs.last().copied().unwrap_or(' ')
    }

    /// Glyph at `index`
    pub fn get(&self, index: usize) -> Option<char> {
        self.glyphs.get(index).copied()
    }

    /// Ramp position for `intensity` on a scale of `[0, upper_bound)`
    ///
    /// Computes `floor(intensity * len / upper_bound)` and clamps it into
    /// `[0, len - 1]`. Negative and NaN intensities select index 0, values at
    /// or past the bound select the last glyph.
    pub fn index_for(&self, intensity: f64, upper_bound: f64) -> usize {
        let last = self.glyphs.len().saturating_sub(1);
        let scaled = (intensity * self.glyphs.len() as f64 / upper_bound).floor();
        if scaled.is_nan() || scaled <= 0.0 {
            0
        } else if scaled >= last as f64 {
            last
        } else {
            scaled as usize
        }
    }

    /// Glyph for `intensity` on a scale of `[0, upper_bound)`
    pub fn select(&self, intensity: f64, upper_bound: f64) -> char {
        self.glyphs
            .get(self.index_for(intensity, upper_bound))
            .copied()
            .unwrap_or(' ')
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self::reference()
    }
}
