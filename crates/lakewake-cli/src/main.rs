use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use lakewake_lib::wake::{DEFAULT_SPEED_KMH, DEFAULT_WATER_DEPTH_M};

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Lake-vessel wake severity utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute wake metrics for harvested vessel records and export them as CSV.
    Compute {
        /// Path to the harvester output (JSON array of vessel records).
        #[arg(long)]
        input: PathBuf,
        /// Destination CSV file.
        #[arg(long)]
        output: PathBuf,
        /// Water depth in metres assumed for records without a depth field.
        #[arg(long, default_value_t = DEFAULT_WATER_DEPTH_M)]
        depth: f64,
        /// Speed in km/h assumed for records without a speed field.
        #[arg(long, default_value_t = DEFAULT_SPEED_KMH)]
        speed: f64,
    },
    /// Compute and print wake metrics for a single vessel.
    Rate {
        /// Hull length in metres.
        #[arg(long)]
        length: f64,
        /// Hull beam in metres.
        #[arg(long)]
        beam: f64,
        /// Empty displacement in tonnes.
        #[arg(long)]
        displacement: f64,
        /// Cruising speed in km/h.
        #[arg(long, default_value_t = DEFAULT_SPEED_KMH)]
        speed: f64,
        /// Water depth in metres.
        #[arg(long, default_value_t = DEFAULT_WATER_DEPTH_M)]
        depth: f64,
    },
    /// Check a station catalog against literal stations in source files.
    CheckStations {
        /// Path to the station catalog JSON.
        #[arg(long)]
        catalog: PathBuf,
        /// Source directories to scan for literal station definitions.
        #[arg(required = true)]
        sources: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Compute {
            input,
            output,
            depth,
            speed,
        } => commands::compute::handle_compute(&input, &output, depth, speed),
        Command::Rate {
            length,
            beam,
            displacement,
            speed,
            depth,
        } => commands::rate::handle_rate(length, beam, displacement, speed, depth),
        Command::CheckStations { catalog, sources } => {
            commands::stations::handle_check_stations(&catalog, &sources)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
