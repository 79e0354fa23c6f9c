use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use canopy_sim::flush::{DelimitedSink, HistorySink, JsonlSink};
use canopy_sim::sim::{SimConfig, SimParams, run_to_sink};
use canopy_sim::worldgen::{WorldGenConfig, generate_world};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `;`-separated plant records, one line per tick.
    Csv,
    /// One JSON object per tick.
    Jsonl,
}

#[derive(Debug, Parser)]
#[command(about = "Grow a plant population on a square grid and record its traits every tick")]
struct Args {
    /// Side length of the grid.
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 20)]
    ticks: u32,

    /// RNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// JSON file overriding tick parameters.
    #[arg(long)]
    params: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    #[arg(long, default_value = "history.csv")]
    output: PathBuf,
}

/// Tick parameters from a JSON file, or the defaults. Fields missing from
/// the file keep their default values.
fn load_params(path: Option<&Path>) -> Result<SimParams> {
    let Some(path) = path else {
        return Ok(SimParams::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading params from {}", path.display()))?;
    let params = serde_json::from_str::<SimParams>(&text)
        .with_context(|| format!("parsing params from {}", path.display()))?;
    Ok(params)
}

fn open_sink(format: Format, output: &Path) -> Result<Box<dyn HistorySink>> {
    let sink: Box<dyn HistorySink> = match format {
        Format::Csv => Box::new(DelimitedSink::create(output)?),
        Format::Jsonl => Box::new(JsonlSink::create(output)?),
    };
    Ok(sink)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let params = load_params(args.params.as_deref())?;

    let world_config = WorldGenConfig {
        size: args.size as usize,
        ..WorldGenConfig::default()
    };
    let world = generate_world(&world_config)?;
    let config = SimConfig {
        num_ticks: args.ticks,
        seed: args.seed,
        params,
    };

    let mut sink = open_sink(args.format, &args.output)?;
    let last = run_to_sink(&world, &config, sink.as_mut())
        .with_context(|| format!("writing history to {}", args.output.display()))?;

    info!(
        output = %args.output.display(),
        population = last.population(),
        "history written"
    );
    Ok(())
}
