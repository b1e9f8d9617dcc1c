//! 8-bit RGB ↔ HSV conversion
//!
//! Hue is stored halved (`[0, 180)`) so it fits a byte; saturation and value
//! span `[0, 255]`. RGB → HSV uses 12-bit fixed-point division tables and
//! HSV → RGB goes through `f32`, which reproduces the rounding of the common
//! imaging libraries byte for byte.

use std::sync::LazyLock;

const HSV_SHIFT: u32 = 12;
const HSV_ROUND: i32 = 1 << (HSV_SHIFT - 1);
const HUE_RANGE: i32 = 180;

// Sector → indices into [v, p, q, t] for (b, g, r)
const SECTOR_TABLE: [[usize; 3]; 6] = [
    [1, 3, 0],
    [1, 0, 2],
    [3, 0, 1],
    [0, 2, 1],
    [0, 1, 3],
    [2, 1, 0],
];

/// `round((255 << 12) / v)`, zero for `v == 0`
static SATURATION_DIVISORS: LazyLock<[i32; 256]> = LazyLock::new(|| {
    let mut table = [0; 256];
    for (v, entry) in table.iter_mut().enumerate().skip(1) {
        *entry = (f64::from(255 << HSV_SHIFT) / v as f64).round_ties_even() as i32;
    }
    table
});

/// `round((180 << 12) / (6 * diff))`, zero for `diff == 0`
static HUE_DIVISORS: LazyLock<[i32; 256]> = LazyLock::new(|| {
    let mut table = [0; 256];
    for (diff, entry) in table.iter_mut().enumerate().skip(1) {
        *entry =
            (f64::from(HUE_RANGE << HSV_SHIFT) / (6.0 * diff as f64)).round_ties_even() as i32;
    }
    table
});

/// Convert one RGB pixel to HSV
pub fn rgb_to_hsv([r, g, b]: [u8; 3]) -> [u8; 3] {
    let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));
    let v = r.max(g).max(b);
    let diff = v - r.min(g).min(b);

    let s_div = SATURATION_DIVISORS.get(v as usize).copied().unwrap_or(0);
    let s = (diff * s_div + HSV_ROUND) >> HSV_SHIFT;

    let sector_offset = if v == r {
        g - b
    } else if v == g {
        b - r + 2 * diff
    } else {
        r - g + 4 * diff
    };
    let h_div = HUE_DIVISORS.get(diff as usize).copied().unwrap_or(0);
    let mut h = (sector_offset * h_div + HSV_ROUND) >> HSV_SHIFT;
    if h < 0 {
        h += HUE_RANGE;
    }

    [h as u8, s as u8, v as u8]
}

/// Convert one HSV pixel to RGB
// Unfused multiplies keep the output byte-exact
#[allow(clippy::suboptimal_flops)]
pub fn hsv_to_rgb([h, s, v]: [u8; 3]) -> [u8; 3] {
    let s = f32::from(s) * (1.0 / 255.0);
    let v = f32::from(v) * (1.0 / 255.0);

    let (b, g, r) = if s <= 0.0 {
        (v, v, v)
    } else {
        let mut h = f32::from(h) * (6.0 / HUE_RANGE as f32);
        while h >= 6.0 {
            h -= 6.0;
        }
        let mut sector = h.floor() as usize;
        h -= sector as f32;
        if sector >= SECTOR_TABLE.len() {
            sector = 0;
            h = 0.0;
        }

        let tab = [v, v * (1.0 - s), v * (1.0 - s * h), v * (1.0 - s * (1.0 - h))];
        let [bi, gi, ri] = SECTOR_TABLE.get(sector).copied().unwrap_or([0, 0, 0]);
        let pick = |i: usize| tab.get(i).copied().unwrap_or(0.0);
        (pick(bi), pick(gi), pick(ri))
    };

    [to_byte(r), to_byte(g), to_byte(b)]
}

fn to_byte(unit: f32) -> u8 {
    (unit * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}
