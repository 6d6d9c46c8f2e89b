use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use zonesim::{
    engine::{EngineBuilder, Frame},
    render,
    scenario::ScenarioLoader,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Zoned region growth simulator")]
struct Cli {
    /// Path to the config file (prompted for when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the config's time limit
    #[arg(long)]
    ticks: Option<u64>,

    /// Write a JSON snapshot every N timesteps (0 disables)
    #[arg(long, default_value_t = 0)]
    snapshot_interval: u64,

    /// Directory for snapshots
    #[arg(long, default_value = "snapshots")]
    snapshot_dir: PathBuf,

    /// Log filter, e.g. `info` or `zonesim=debug`
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    println!("\nZONED REGION SIMULATION\n");
    let config_path = match cli.config {
        Some(path) => path,
        None => prompt_config_path()?,
    };

    let scenario = ScenarioLoader::new(".").load(&config_path)?;
    println!("{}", render::config(&scenario.config));
    println!("Contents of {}:", scenario.config.region_layout);
    print!("{}", render::map(&scenario.grid));

    let mut settings = scenario.engine_settings(cli.ticks);
    settings.snapshot_interval_ticks = cli.snapshot_interval;
    settings.snapshot_dir = cli.snapshot_dir;

    let mut engine = EngineBuilder::new(settings)
        .with_default_systems()
        .build()?;
    let mut grid = scenario.build_grid();

    engine.run_with_hooks(
        &mut grid,
        |timestep| println!("Timestep {timestep}:"),
        print_frame,
    )?;
    Ok(())
}

fn print_frame(frame: &Frame<'_>) {
    if frame.is_final {
        println!("Simulation complete.\nFinal state:");
    }
    println!("Regional Map:");
    print!("{}", render::map(frame.grid));
    println!("======================");
    println!("{}", render::stats(&frame.stats));
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn prompt_config_path() -> Result<PathBuf> {
    println!("Enter config file path:");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read config path from stdin")?;
    let trimmed = line.trim();
    anyhow::ensure!(!trimmed.is_empty(), "no config file path given");
    Ok(PathBuf::from(trimmed))
}
