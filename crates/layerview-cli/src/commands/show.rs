use anyhow::Result;
use clap::Args;

use super::SourceArgs;
use crate::summary::print_frame_summary;

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: &ShowArgs) -> Result<()> {
    let config = args.source.load_config()?;
    let (aggregator, selection) = args.source.build(&config)?;
    let frame = aggregator.aggregate(&selection);

    print_frame_summary(&config, aggregator.volume(), &selection, &frame);
    Ok(())
}
