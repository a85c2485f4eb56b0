use clap::Args;
use hitzone::config::{RenderParams, ZoneParams};
use hitzone::error::HzResult;
use hitzone::render;
use hitzone::zone::{self, Point};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub zone: ZoneParams,

    #[command(flatten)]
    pub render: RenderParams,

    #[arg(short, long, default_value = "hitzone.png")]
    pub out: String,
}

pub fn run(args: RenderArgs, hits: &[Point], strikes: &[Point]) -> HzResult<()> {
    let boxes = zone::boxes_for_detail(args.zone.detail)?;
    let map = zone::aggregate(hits, strikes, boxes)?;
    info!(
        "🧮 Aggregated {} hits / {} strikes into a {}x{} grid (scores {}..{})",
        hits.len(),
        strikes.len(),
        boxes,
        boxes,
        map.bounds.min,
        map.bounds.max
    );

    let opts = args.render.render_options()?;
    render::render_to_file(&map, &opts, &args.out)
}
