pub mod config;
pub mod export;
pub mod show;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use layerview_core::aggregate::LayerAggregator;
use layerview_core::config::ViewerConfig;
use layerview_core::selection::LayerSelection;
use tracing::debug;

/// Where the volume and viewer settings come from.
#[derive(Args)]
pub struct SourceArgs {
    /// Viewer config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for the generated sample volume
    #[arg(long)]
    pub seed: Option<u64>,

    /// Grayscale images to use as layers instead of random data
    #[arg(long, num_args = 1..)]
    pub layers_from: Vec<PathBuf>,

    /// Comma-separated layer indices to enable (default: from config)
    #[arg(long, value_delimiter = ',')]
    pub layers: Option<Vec<usize>>,
}

impl SourceArgs {
    pub fn load_config(&self) -> Result<ViewerConfig> {
        let mut config = match self.config {
            Some(ref path) => ViewerConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ViewerConfig::default(),
        };
        if self.seed.is_some() {
            config.volume.seed = self.seed;
        }
        Ok(config)
    }

    pub fn build(&self, config: &ViewerConfig) -> Result<(LayerAggregator, LayerSelection)> {
        let volume = config
            .build_volume(&self.layers_from)
            .context("Failed to build volume")?;
        let aggregator = LayerAggregator::new(volume);
        let layers = aggregator.layers();

        let selection = match self.layers {
            Some(ref indices) => LayerSelection::from_indices(layers, indices)
                .context("Invalid --layers selection")?,
            None => LayerSelection::with_default(layers, config.default_enabled),
        };
        debug!(layers, enabled = ?selection.enabled_indices(), "Built layer selection");
        Ok((aggregator, selection))
    }
}
