use crate::reports;
use clap::Args;
use hitzone::config::ZoneParams;
use hitzone::error::HzResult;
use hitzone::zone::{self, Point};

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub zone: ZoneParams,

    /// Emit the zone map as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: InspectArgs, hits: &[Point], strikes: &[Point]) -> HzResult<()> {
    let boxes = zone::boxes_for_detail(args.zone.detail)?;
    let map = zone::aggregate(hits, strikes, boxes)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    reports::print_zone_grid(&map);
    reports::print_summary(&map, hits.len(), strikes.len());
    Ok(())
}
