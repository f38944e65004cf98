mod app;
mod convert;
mod panels;
mod state;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use layerview_core::aggregate::LayerAggregator;
use layerview_core::config::{RunMode, ViewerConfig};
use layerview_core::io::export::export_heatmap;
use layerview_core::selection::LayerSelection;
use tracing::info;

const WINDOW_TITLE: &str = "3D Array Heatmap Viewer";

#[derive(Parser)]
#[command(name = "layerview-gui", about = "Interactive layered heatmap viewer")]
#[command(version)]
struct Args {
    /// 1 = show window, 2 = export image only, 3 = export then show
    #[arg(long)]
    mode: Option<u8>,

    /// Viewer config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output base filename for the startup export
    #[arg(short, long)]
    output: Option<String>,

    /// Seed for the generated sample volume
    #[arg(long)]
    seed: Option<u64>,

    /// Grayscale images to use as layers instead of random data
    #[arg(long, num_args = 1..)]
    layers_from: Vec<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = resolve_config(&args)?;

    let volume = config
        .build_volume(&args.layers_from)
        .context("Failed to build volume")?;
    let aggregator = LayerAggregator::new(volume);
    let selection = LayerSelection::with_default(aggregator.layers(), config.default_enabled);

    if config.mode.exports() {
        let frame = aggregator.aggregate(&selection);
        let path = export_heatmap(&frame, &config.colormap, &config.render, &config.output)
            .context("Failed to export heatmap")?;
        info!(path = %path.display(), "Exported startup heatmap");
    }

    if !config.mode.shows_window() {
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        "LayerView",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::LayerViewApp::new(
                &cc.egui_ctx,
                aggregator,
                selection,
                config,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Viewer window failed: {e}"))
}

fn resolve_config(args: &Args) -> Result<ViewerConfig> {
    let mut config = match args.config {
        Some(ref path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.mode = RunMode::try_from(mode)?;
    }
    if let Some(ref output) = args.output {
        config.output = output.clone();
    }
    if args.seed.is_some() {
        config.volume.seed = args.seed;
    }
    Ok(config)
}
