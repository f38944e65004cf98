use anyhow::{Context, Result};
use clap::Args;
use layerview_core::io::export::export_heatmap;

use super::SourceArgs;

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output base filename (timestamp and .jpeg are appended)
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn run(args: &ExportArgs) -> Result<()> {
    let config = args.source.load_config()?;
    let (aggregator, selection) = args.source.build(&config)?;
    let frame = aggregator.aggregate(&selection);

    let base = args.output.as_deref().unwrap_or(&config.output);
    let path = export_heatmap(&frame, &config.colormap, &config.render, base)
        .with_context(|| format!("Failed to export heatmap to {base}_*.jpeg"))?;

    println!("Saved to {}", path.display());
    Ok(())
}
