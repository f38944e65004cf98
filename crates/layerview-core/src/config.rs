use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::colormap::Colormap;
use crate::consts::{DEFAULT_LAYER_NAMES, DEFAULT_OUTPUT_BASE};
use crate::error::{LayerViewError, Result};
use crate::io::image_io::load_volume;
use crate::render::RenderOptions;
use crate::volume::{Volume, VolumeSpec};

/// What a viewer session does on startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Show the window only.
    Interactive,
    /// Write the heatmap image and exit.
    Export,
    /// Write the heatmap image, then show the window.
    #[default]
    Both,
}

impl RunMode {
    pub fn shows_window(self) -> bool {
        matches!(self, Self::Interactive | Self::Both)
    }

    pub fn exports(self) -> bool {
        matches!(self, Self::Export | Self::Both)
    }
}

impl TryFrom<u8> for RunMode {
    type Error = LayerViewError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::Interactive),
            2 => Ok(Self::Export),
            3 => Ok(Self::Both),
            other => Err(LayerViewError::InvalidRunMode(other)),
        }
    }
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interactive => write!(f, "Interactive"),
            Self::Export => write!(f, "Export"),
            Self::Both => write!(f, "Export + Interactive"),
        }
    }
}

/// Everything a viewer session needs, loadable from TOML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub mode: RunMode,
    /// Base filename of exported images; a timestamp and extension are appended.
    pub output: String,
    /// Initial state of every layer toggle.
    pub default_enabled: bool,
    /// Short names for the first layers.
    pub layer_names: Vec<String>,
    pub volume: VolumeSpec,
    pub colormap: Colormap,
    pub render: RenderOptions,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::default(),
            output: DEFAULT_OUTPUT_BASE.to_string(),
            default_enabled: true,
            layer_names: DEFAULT_LAYER_NAMES.iter().map(|s| s.to_string()).collect(),
            volume: VolumeSpec::default(),
            colormap: Colormap::chopped_greens(),
            render: RenderOptions::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        info!(path = %path.display(), "Loaded viewer config");
        Ok(config)
    }

    /// Load `layer_images` as the volume, or generate one from `self.volume`
    /// when no images are given.
    pub fn build_volume(&self, layer_images: &[PathBuf]) -> Result<Volume> {
        if layer_images.is_empty() {
            Ok(Volume::generate(&self.volume))
        } else {
            info!(count = layer_images.len(), "Loading layers from images");
            load_volume(layer_images)
        }
    }
}
