use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use image::ImageFormat;
use tracing::info;

use crate::aggregate::AggregatedFrame;
use crate::colormap::Colormap;
use crate::consts::{EXPORT_EXTENSION, EXPORT_TIMESTAMP_FORMAT};
use crate::error::Result;
use crate::render::{render_heatmap, RenderOptions};

/// `<base>_<YYYYMMDD_HHMMSS>.jpeg`
pub fn timestamped_path(base: &str, now: DateTime<Local>) -> PathBuf {
    let tag = now.format(EXPORT_TIMESTAMP_FORMAT);
    PathBuf::from(format!("{base}_{tag}.{EXPORT_EXTENSION}"))
}

/// Timestamped export path for the current local time.
pub fn next_export_path(base: &str) -> PathBuf {
    timestamped_path(base, Local::now())
}

/// Render `frame` and write it to `path` as JPEG.
pub fn save_heatmap(
    frame: &AggregatedFrame,
    colormap: &Colormap,
    options: &RenderOptions,
    path: &Path,
) -> Result<()> {
    let img = render_heatmap(frame, colormap, options);
    img.save_with_format(path, ImageFormat::Jpeg)?;
    info!(path = %path.display(), "Saved heatmap");
    Ok(())
}

/// Write `frame` to a timestamped JPEG next to `base` and return its path.
pub fn export_heatmap(
    frame: &AggregatedFrame,
    colormap: &Colormap,
    options: &RenderOptions,
    base: &str,
) -> Result<PathBuf> {
    let path = next_export_path(base);
    save_heatmap(frame, colormap, options, &path)?;
    Ok(path)
}
