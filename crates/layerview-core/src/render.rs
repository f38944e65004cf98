use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use crate::aggregate::AggregatedFrame;
use crate::colormap::Colormap;
use crate::consts::{
    DEFAULT_CELL_SIZE, DEFAULT_COLORBAR_GAP, DEFAULT_COLORBAR_WIDTH, MAX_EXPORT_DIM,
};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Raster layout of an exported heatmap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Side length of one grid cell, in pixels.
    pub cell_size: u32,
    pub colorbar_width: u32,
    pub colorbar_gap: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            colorbar_width: DEFAULT_COLORBAR_WIDTH,
            colorbar_gap: DEFAULT_COLORBAR_GAP,
        }
    }
}

/// Color every cell of `frame` against its own display range.
/// Row-major, one entry per cell.
pub fn colorize(frame: &AggregatedFrame, colormap: &Colormap) -> Vec<[u8; 3]> {
    frame
        .data
        .iter()
        .map(|&v| colormap.sample(frame.range.normalize(v) as f32))
        .collect()
}

/// Render `frame` as an image with a vertical colorbar on its right.
///
/// The colorbar runs from the range maximum at the top to the minimum at the
/// bottom. Cells are drawn `options.cell_size` pixels wide, shrunk (down to
/// nearest-neighbour downsampling) so the whole image fits in
/// `MAX_EXPORT_DIM` on both axes.
pub fn render_heatmap(
    frame: &AggregatedFrame,
    colormap: &Colormap,
    options: &RenderOptions,
) -> RgbImage {
    let bar_w = options.colorbar_width.max(1);
    let (map_w, map_h) = heatmap_size(frame.rows(), frame.cols(), options);
    let bar_x = map_w + options.colorbar_gap;
    let width = bar_x + bar_w;

    let mut img = RgbImage::from_pixel(width, map_h, BACKGROUND);

    if !frame.data.is_empty() {
        let colors = colorize(frame, colormap);
        let (rows, cols) = (frame.rows() as u64, frame.cols() as u64);
        for y in 0..map_h {
            let row = y as u64 * rows / map_h as u64;
            for x in 0..map_w {
                let col = x as u64 * cols / map_w as u64;
                img.put_pixel(x, y, Rgb(colors[(row * cols + col) as usize]));
            }
        }
    }

    let denom = map_h.saturating_sub(1).max(1) as f32;
    for y in 0..map_h {
        let rgb = colormap.sample(1.0 - y as f32 / denom);
        for x in bar_x..width {
            img.put_pixel(x, y, Rgb(rgb));
        }
    }

    img
}

/// Pixel size of the heatmap area, leaving room for the colorbar.
fn heatmap_size(rows: usize, cols: usize, options: &RenderOptions) -> (u32, u32) {
    let cell = options.cell_size.max(1);
    if rows == 0 || cols == 0 {
        return (cols as u32 * cell, cell);
    }

    let reserved = options.colorbar_gap + options.colorbar_width.max(1);
    let budget_w = MAX_EXPORT_DIM.saturating_sub(reserved).max(1) as f64;
    let budget_h = MAX_EXPORT_DIM as f64;
    let fit = (budget_w / cols as f64).min(budget_h / rows as f64);

    if fit >= 1.0 {
        let cell = cell.min(fit.floor() as u32);
        (cols as u32 * cell, rows as u32 * cell)
    } else {
        let w = ((cols as f64 * fit).floor() as u32).max(1);
        let h = ((rows as f64 * fit).floor() as u32).max(1);
        (w, h)
    }
}
