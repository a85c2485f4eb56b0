use clap::{Parser, Subcommand};
use hitzone::error::HzResult;
use hitzone::loader;
use hitzone::zone::Point;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value = "data/demo_hits.csv")]
    hits: String,

    #[arg(global = true, long, default_value = "data/demo_strikes.csv")]
    strikes: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Render(cmd::render::RenderArgs),
    Inspect(cmd::inspect::InspectArgs),
    Generate(cmd::generate::GenerateArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    info!("🚀 Initializing HitZone...");

    let result = match cli.command {
        Commands::Generate(args) => cmd::generate::run(args, &cli.hits, &cli.strikes),
        Commands::Render(args) => {
            let (hits, strikes) = load_inputs(&cli.hits, &cli.strikes);
            cmd::render::run(args, &hits, &strikes)
        }
        Commands::Inspect(args) => {
            let (hits, strikes) = load_inputs(&cli.hits, &cli.strikes);
            cmd::inspect::run(args, &hits, &strikes)
        }
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn load_inputs(hits_path: &str, strikes_path: &str) -> (Vec<Point>, Vec<Point>) {
    match try_load(hits_path, strikes_path) {
        Ok(pair) => pair,
        Err(e) => {
            error!("\n❌ FATAL ERROR LOADING COORDINATES:");
            error!("   {}", e);
            process::exit(1);
        }
    }
}

fn try_load(hits_path: &str, strikes_path: &str) -> HzResult<(Vec<Point>, Vec<Point>)> {
    let hits = loader::load_points(hits_path)?;
    let strikes = loader::load_points(strikes_path)?;
    Ok((hits, strikes))
}
