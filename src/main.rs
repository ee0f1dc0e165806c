use chaosim::{bench_sub_steps, bench_update, run_2d, run_headless};
use chaosim::{Scenario, SimConfig};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chaosim")]
#[command(about = "Springy circles in a window: Space spawns a body, Escape quits")]
struct Args {
    /// Engine/parameter config (YAML); defaults are used when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Override the random seed from the config
    #[arg(long)]
    seed: Option<u64>,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    steps: usize,

    /// Fixed frame time in headless mode, seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Print timing tables and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_config(args: &Args) -> Result<SimConfig> {
    let mut cfg = match &args.file {
        Some(path) => SimConfig::from_path(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.view.seed = seed;
    }
    Ok(cfg)
}

/// Bevy installs its own subscriber through `LogPlugin`; only the
/// windowless modes need one
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = load_config(&args)?;

    if args.bench {
        init_tracing();
        bench_update();
        bench_sub_steps();
        return Ok(());
    }

    let mut scenario = Scenario::build_scenario(&cfg)?;

    if args.headless {
        init_tracing();
        run_headless(&mut scenario, args.steps, args.dt, 60);
    } else {
        run_2d(scenario, &cfg.view);
    }

    Ok(())
}
