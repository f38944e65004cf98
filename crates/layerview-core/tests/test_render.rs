use ndarray::array;

use layerview_core::aggregate::AggregatedFrame;
use layerview_core::colormap::{Colormap, Palette};
use layerview_core::consts::MAX_EXPORT_DIM;
use layerview_core::render::{colorize, render_heatmap, RenderOptions};

#[test]
fn test_colormap_endpoints() {
    let gray = Colormap::new(Palette::Grayscale);
    assert_eq!(gray.sample(0.0), [0, 0, 0]);
    assert_eq!(gray.sample(1.0), [255, 255, 255]);
    assert_eq!(gray.sample(-3.0), [0, 0, 0]);
    assert_eq!(gray.sample(f32::NAN), [0, 0, 0]);
}

#[test]
fn test_chopped_greens_avoids_extremes() {
    let cmap = Colormap::chopped_greens();
    let full = Colormap::new(Palette::Greens);
    assert_ne!(cmap.sample(0.0), full.sample(0.0));
    assert_ne!(cmap.sample(1.0), full.sample(1.0));
    assert_eq!(cmap.sample(0.0), full.sample(0.3));
}

#[test]
fn test_colorize_uses_frame_range() {
    let frame = AggregatedFrame::new(array![[0.0, 10.0]]);
    let gray = Colormap::new(Palette::Grayscale);
    assert_eq!(colorize(&frame, &gray), vec![[0, 0, 0], [255, 255, 255]]);
}

#[test]
fn test_colorize_degenerate_range() {
    let frame = AggregatedFrame::new(array![[0.0, 0.0], [0.0, 0.0]]);
    let cmap = Colormap::default();
    let colors = colorize(&frame, &cmap);
    assert_eq!(colors.len(), 4);
    assert!(colors.iter().all(|&c| c == cmap.sample(0.0)));
}

#[test]
fn test_render_heatmap_layout() {
    let frame = AggregatedFrame::new(array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let options = RenderOptions {
        cell_size: 4,
        colorbar_width: 3,
        colorbar_gap: 2,
    };
    let gray = Colormap::new(Palette::Grayscale);
    let img = render_heatmap(&frame, &gray, &options);

    assert_eq!(img.dimensions(), (3 * 4 + 2 + 3, 2 * 4));
    // Minimum cell is top-left, maximum is bottom-right.
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    assert_eq!(img.get_pixel(11, 7).0, [255, 255, 255]);
    // Colorbar: max on top, min at the bottom.
    assert_eq!(img.get_pixel(14, 0).0, [255, 255, 255]);
    assert_eq!(img.get_pixel(14, 7).0, [0, 0, 0]);
}

#[test]
fn test_render_empty_frame() {
    let frame = AggregatedFrame::new(ndarray::Array2::zeros((0, 0)));
    let img = render_heatmap(&frame, &Colormap::default(), &RenderOptions::default());
    assert!(img.width() > 0 && img.height() > 0);
}

#[test]
fn test_render_wide_frame_fits_export_limit() {
    let frame = AggregatedFrame::new(ndarray::Array2::from_shape_fn((1, 1400), |(_, c)| c as f64));
    let options = RenderOptions::default();
    let img = render_heatmap(&frame, &Colormap::default(), &options);

    assert!(img.width() <= MAX_EXPORT_DIM, "width {}", img.width());
    assert!(img.height() <= MAX_EXPORT_DIM, "height {}", img.height());
    // One pixel per cell still fits, so every column stays visible.
    assert_eq!(img.width(), 1400 + options.colorbar_gap + options.colorbar_width);
}

#[test]
fn test_render_large_frame_fits_export_limit() {
    let frame = AggregatedFrame::new(ndarray::Array2::from_shape_fn((1000, 1000), |(r, c)| {
        (r + c) as f64
    }));
    let gray = Colormap::new(Palette::Grayscale);
    let img = render_heatmap(&frame, &gray, &RenderOptions::default());

    assert!(img.width() <= MAX_EXPORT_DIM, "width {}", img.width());
    assert!(img.height() <= MAX_EXPORT_DIM, "height {}", img.height());
    assert_eq!(img.height(), 2000);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    assert_eq!(img.get_pixel(1999, 1999).0, [255, 255, 255]);
}

#[test]
fn test_render_downsamples_past_export_limit() {
    let frame = AggregatedFrame::new(ndarray::Array2::from_shape_fn((10, 3000), |(_, c)| c as f64));
    let gray = Colormap::new(Palette::Grayscale);
    let img = render_heatmap(&frame, &gray, &RenderOptions::default());

    assert!(img.width() <= MAX_EXPORT_DIM, "width {}", img.width());
    assert!(img.height() >= 1);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
}
