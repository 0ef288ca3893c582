use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fir_motion::{MotionRequest, ProfileConfig, ProfileDerivatives, ProfileTable};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Generate(args) => args.run(),
        Command::Export(args) => args.run(),
    };
    if let Err(e) = result {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}

#[derive(Parser)]
#[command(name = "fir_motion", about = "Jerk-limited motion profiles via FIR smoothing")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a profile from parameters given on the command line.
    Generate(GenerateArgs),
    /// Generate a profile from a TOML parameter file and write it as CSV.
    Export(ExportArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Sample period in seconds.
    #[arg(long)]
    sampling_time: f64,

    #[arg(long, allow_hyphen_values = true)]
    position_start: f64,

    #[arg(long, allow_hyphen_values = true)]
    position_end: f64,

    /// Cruise velocity, signed along the direction of travel.
    #[arg(long, allow_hyphen_values = true)]
    velocity: f64,

    #[arg(long, allow_hyphen_values = true)]
    acceleration: f64,

    /// Write the profile table to this CSV file.
    #[arg(long)]
    output: Option<PathBuf>,
}

impl GenerateArgs {
    fn run(&self) -> Result<()> {
        let request = MotionRequest::new(
            self.sampling_time,
            self.position_start,
            self.position_end,
            self.velocity,
            self.acceleration,
        )
        .context("invalid motion parameters")?;

        let table = profile(&request)?;
        if let Some(output) = &self.output {
            save(&table, output)?;
        }
        Ok(())
    }
}

#[derive(Args)]
struct ExportArgs {
    /// Path to the TOML parameter file.
    #[arg(long)]
    config: PathBuf,

    /// Output CSV path.
    ///
    /// Defaults to `export.output` from the config, then to the config file
    /// name with a `csv` extension.
    #[arg(long)]
    output: Option<PathBuf>,
}

impl ExportArgs {
    fn run(&self) -> Result<()> {
        tracing::info!("Loading parameters from: {}", self.config.display());
        let config = ProfileConfig::load(&self.config)
            .with_context(|| format!("failed to load {}", self.config.display()))?;
        let request = config
            .motion
            .request()
            .context("invalid motion parameters")?;

        let table = profile(&request)?;
        let output = self
            .output
            .clone()
            .or(config.export.output)
            .unwrap_or_else(|| self.config.with_extension("csv"));
        save(&table, &output)
    }
}

fn profile(request: &MotionRequest) -> Result<ProfileTable> {
    tracing::debug!(?request, "generating profile");
    let positions = request.generate().context("profile generation failed")?;
    let table = ProfileTable::from_positions(&positions, request.sampling_time());

    let derivatives = ProfileDerivatives::from_positions(&positions, request.sampling_time());
    tracing::info!(
        "Samples: {} ({:.3} s)",
        table.len(),
        table.len() as f64 * request.sampling_time()
    );
    tracing::info!(
        "Position: {} -> {}",
        positions.first().copied().unwrap_or_default(),
        positions.last().copied().unwrap_or_default()
    );
    tracing::info!("Peak velocity: {:.4}", derivatives.peak_velocity());
    tracing::info!("Peak acceleration: {:.4}", derivatives.peak_acceleration());
    Ok(table)
}

fn save(table: &ProfileTable, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory {}", parent.display()))?;
    }
    table
        .save_csv(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!("Trajectory saved to {}", output.display());
    Ok(())
}
