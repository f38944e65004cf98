use layerview_core::aggregate::AggregatedFrame;
use layerview_core::colormap::Colormap;
use layerview_core::render::colorize;

/// Number of samples in the colorbar texture.
pub const COLORBAR_STEPS: usize = 256;

/// Color-map an aggregated frame into an egui image, one pixel per cell.
pub fn frame_to_color_image(frame: &AggregatedFrame, colormap: &Colormap) -> egui::ColorImage {
    let rgb: Vec<u8> = colorize(frame, colormap).into_iter().flatten().collect();
    egui::ColorImage::from_rgb([frame.cols(), frame.rows()], &rgb)
}

/// A one-pixel-wide vertical gradient, maximum at the top.
pub fn colorbar_image(colormap: &Colormap) -> egui::ColorImage {
    let denom = (COLORBAR_STEPS - 1) as f32;
    let rgb: Vec<u8> = (0..COLORBAR_STEPS)
        .flat_map(|y| colormap.sample(1.0 - y as f32 / denom))
        .collect();
    egui::ColorImage::from_rgb([1, COLORBAR_STEPS], &rgb)
}

/// Map a plot coordinate onto a grid cell.
///
/// The heatmap is drawn with row 0 at the top of the plot, so `y` counts up
/// from the last row.
pub fn plot_to_cell(x: f64, y: f64, cols: usize, rows: usize) -> Option<(usize, usize)> {
    if x < 0.0 || y < 0.0 || x >= cols as f64 || y >= rows as f64 {
        return None;
    }
    let col = x.floor() as usize;
    let row = rows - 1 - y.floor() as usize;
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use layerview_core::colormap::Palette;
    use ndarray::array;

    #[test]
    fn test_frame_image_size_is_cols_by_rows() {
        let frame = AggregatedFrame::new(array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let img = frame_to_color_image(&frame, &Colormap::default());
        assert_eq!(img.size, [3, 2]);
        assert_eq!(img.pixels.len(), 6);
    }

    #[test]
    fn test_frame_image_maps_range_ends() {
        let frame = AggregatedFrame::new(array![[0.0, 4.0]]);
        let img = frame_to_color_image(&frame, &Colormap::new(Palette::Grayscale));
        assert_eq!(img.pixels[0], egui::Color32::from_rgb(0, 0, 0));
        assert_eq!(img.pixels[1], egui::Color32::from_rgb(255, 255, 255));
    }

    #[test]
    fn test_colorbar_max_on_top() {
        let img = colorbar_image(&Colormap::new(Palette::Grayscale));
        assert_eq!(img.size, [1, COLORBAR_STEPS]);
        assert_eq!(img.pixels[0], egui::Color32::WHITE);
        assert_eq!(img.pixels[COLORBAR_STEPS - 1], egui::Color32::BLACK);
    }

    #[test]
    fn test_plot_to_cell() {
        assert_eq!(plot_to_cell(0.5, 1.5, 3, 2), Some((0, 0)));
        assert_eq!(plot_to_cell(2.9, 0.1, 3, 2), Some((1, 2)));
        assert_eq!(plot_to_cell(3.0, 0.5, 3, 2), None);
        assert_eq!(plot_to_cell(-0.1, 0.5, 3, 2), None);
    }
}
