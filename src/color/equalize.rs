//! Histogram equalization of 8-bit channels

use ndarray::{Array2, ArrayView2};

/// Number of distinct 8-bit levels
pub const LEVELS: usize = 256;

/// Count how many samples fall on each level
pub fn histogram(channel: ArrayView2<'_, u8>) -> [usize; LEVELS] {
    let mut counts = [0; LEVELS];
    for &value in channel {
        if let Some(count) = counts.get_mut(usize::from(value)) {
            *count += 1;
        }
    }
    counts
}

/// Build the level remapping that flattens `counts`
///
/// The lowest occupied level maps to 0 and the cumulative distribution above
/// it is stretched over `[0, 255]`. A histogram with a single occupied level
/// (or none) maps every level to itself, so uniform channels pass through
/// unchanged.
pub fn equalization_lut(counts: &[usize; LEVELS]) -> [u8; LEVELS] {
    let mut lut = [0u8; LEVELS];
    let total: usize = counts.iter().sum();

    let Some(first) = counts.iter().position(|&count| count > 0) else {
        return identity_lut();
    };
    let first_count = counts.get(first).copied().unwrap_or(0);
    if first_count == total {
        return identity_lut();
    }

    let scale = (LEVELS - 1) as f32 / (total - first_count) as f32;
    let mut cumulative = 0usize;
    for (level, entry) in lut.iter_mut().enumerate().skip(first + 1) {
        cumulative += counts.get(level).copied().unwrap_or(0);
        *entry = (cumulative as f32 * scale)
            .round_ties_even()
            .clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Equalize one channel, returning a new plane of the same shape
pub fn equalize(channel: ArrayView2<'_, u8>) -> Array2<u8> {
    let lut = equalization_lut(&histogram(channel));
    channel.mapv(|value| lut.get(usize::from(value)).copied().unwrap_or(value))
}

fn identity_lut() -> [u8; LEVELS] {
    let mut lut = [0u8; LEVELS];
    for (level, entry) in lut.iter_mut().enumerate() {
        *entry = level as u8;
    }
    lut
}
