#![allow(dead_code)]

use ndarray::{Array2, Array3};

use layerview_core::volume::Volume;

/// Build a volume from row-major 2-D layers given as nested slices.
pub fn volume_from_layers(layers: &[&[&[f64]]]) -> Volume {
    let rows = layers.first().map_or(0, |l| l.len());
    let cols = layers
        .first()
        .and_then(|l| l.first())
        .map_or(0, |r| r.len());
    let mut data = Array3::<f64>::zeros((rows, cols, layers.len()));
    for (k, layer) in layers.iter().enumerate() {
        for (r, row) in layer.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                data[[r, c, k]] = v;
            }
        }
    }
    Volume::from_array(data)
}

/// The two-layer 2x2 volume used throughout the aggregation tests.
pub fn two_by_two() -> Volume {
    volume_from_layers(&[
        &[&[1.0, 2.0], &[3.0, 4.0]],
        &[&[5.0, 6.0], &[7.0, 8.0]],
    ])
}

/// Write `data` (values 0..=255) as an 8-bit grayscale PNG.
pub fn write_gray_png(path: &std::path::Path, data: &Array2<u8>) {
    let (h, w) = data.dim();
    let mut img = image::GrayImage::new(w as u32, h as u32);
    for ((row, col), &v) in data.indexed_iter() {
        img.put_pixel(col as u32, row as u32, image::Luma([v]));
    }
    img.save(path).expect("write png");
}
