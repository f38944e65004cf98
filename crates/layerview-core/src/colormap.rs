//! Color palettes for heatmap rendering.
//!
//! A [`Colormap`] is a plain value carried in the viewer config and handed to
//! every renderer; there is no process-wide palette.

use serde::{Deserialize, Serialize};

use crate::consts::{CHOPPED_GREENS_HIGH, CHOPPED_GREENS_LOW};

/// ColorBrewer sequential greens, light to dark.
const GREENS: [[u8; 3]; 9] = [
    [247, 252, 245],
    [229, 245, 224],
    [199, 233, 192],
    [161, 217, 155],
    [116, 196, 118],
    [65, 171, 93],
    [35, 139, 69],
    [0, 109, 44],
    [0, 68, 27],
];

/// Viridis sampled at nine evenly spaced points.
const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [71, 45, 123],
    [59, 82, 139],
    [44, 114, 142],
    [33, 145, 140],
    [40, 174, 128],
    [94, 201, 98],
    [173, 220, 48],
    [253, 231, 37],
];

const GRAYSCALE: [[u8; 3]; 2] = [[0, 0, 0], [255, 255, 255]];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    Greens,
    #[default]
    Viridis,
    Grayscale,
}

impl Palette {
    pub const ALL: &[Self] = &[Self::Greens, Self::Viridis, Self::Grayscale];

    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            Self::Greens => &GREENS,
            Self::Viridis => &VIRIDIS,
            Self::Grayscale => &GRAYSCALE,
        }
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Greens => write!(f, "Greens"),
            Self::Viridis => write!(f, "Viridis"),
            Self::Grayscale => write!(f, "Grayscale"),
        }
    }
}

/// A palette restricted to its `[low, high]` sub-range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colormap {
    pub palette: Palette,
    pub low: f32,
    pub high: f32,
}

impl Default for Colormap {
    fn default() -> Self {
        Self {
            palette: Palette::Viridis,
            low: 0.0,
            high: 1.0,
        }
    }
}

impl Colormap {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    /// Greens without its near-white and near-black ends.
    pub fn chopped_greens() -> Self {
        Self {
            palette: Palette::Greens,
            low: CHOPPED_GREENS_LOW,
            high: CHOPPED_GREENS_HIGH,
        }
    }

    /// RGB color at normalized position `t` (clamped to `[0, 1]`).
    pub fn sample(&self, t: f32) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let pos = (self.low + t * (self.high - self.low)).clamp(0.0, 1.0);
        interpolate(self.palette.stops(), pos)
    }
}

impl std::fmt::Display for Colormap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.low == 0.0 && self.high == 1.0 {
            write!(f, "{}", self.palette)
        } else {
            write!(f, "{} [{:.2}, {:.2}]", self.palette, self.low, self.high)
        }
    }
}

fn interpolate(stops: &[[u8; 3]], pos: f32) -> [u8; 3] {
    let segments = stops.len() - 1;
    let scaled = pos * segments as f32;
    let i = (scaled.floor() as usize).min(segments - 1);
    let frac = scaled - i as f32;
    let (a, b) = (stops[i], stops[i + 1]);

    let mut out = [0u8; 3];
    for c in 0..3 {
        let v = a[c] as f32 + (b[c] as f32 - a[c] as f32) * frac;
        out[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}
