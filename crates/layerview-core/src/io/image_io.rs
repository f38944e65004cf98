use std::path::{Path, PathBuf};

use ndarray::Array2;
use tracing::debug;

use crate::error::Result;
use crate::volume::Volume;

/// Load a grayscale image as raw 16-bit intensities.
pub fn load_layer(path: &Path) -> Result<Array2<f64>> {
    let img = image::open(path)?;
    let gray = img.to_luma16();
    let (w, h) = gray.dimensions();
    let mut data = Array2::<f64>::zeros((h as usize, w as usize));

    for (col, row, pixel) in gray.enumerate_pixels() {
        data[[row as usize, col as usize]] = pixel.0[0] as f64;
    }

    debug!(path = %path.display(), width = w, height = h, "Loaded layer");
    Ok(data)
}

/// Build a volume with one layer per image, in the given order.
pub fn load_volume(paths: &[PathBuf]) -> Result<Volume> {
    let layers = paths
        .iter()
        .map(|p| load_layer(p))
        .collect::<Result<Vec<_>>>()?;
    Volume::from_layers(&layers)
}
