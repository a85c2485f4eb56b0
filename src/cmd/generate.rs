use clap::Args;
use hitzone::error::HzResult;
use hitzone::generate;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Samples to write per file.
    #[arg(long, default_value_t = 100)]
    pub count: usize,

    #[arg(long)]
    pub seed: Option<u64>,
}

/// Writes random demo data to the configured hits/strikes paths.
pub fn run(args: GenerateArgs, hits_path: &str, strikes_path: &str) -> HzResult<()> {
    let mut rng = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    generate::write_demo_csv(hits_path, args.count, &mut rng)?;
    generate::write_demo_csv(strikes_path, args.count, &mut rng)?;
    Ok(())
}
