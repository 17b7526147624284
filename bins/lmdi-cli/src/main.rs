//! lmdi — Command-line front end for the LMDI-I decomposition pipeline.
//!
//! Wires the CSV loader, the decomposition engine, and the result export
//! together: `lmdi decompose` runs an analysis, `lmdi sample` generates a
//! synthetic dataset to try it on.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use lmdi_core::constants::{DEFAULT_END_YEAR, DEFAULT_START_YEAR};
use lmdi_core::fuel::FuelTable;
use lmdi_core::result::{DecompositionResult, SeriesResult};
use lmdi_decomp::SeriesDecomposer;
use lmdi_io::{build_snapshots, export_csv, load_records, write_sample_csv};
use tracing::info;

/// Additive LMDI-I decomposition of CO2 emission changes.
#[derive(Parser)]
#[command(name = "lmdi")]
#[command(version, about = "Decompose emission changes into five additive effects.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decompose a consumption dataset into per-period effects.
    Decompose(DecomposeArgs),
    /// Generate a synthetic sample dataset.
    Sample(SampleArgs),
}

#[derive(Args)]
struct DecomposeArgs {
    /// Input CSV with per-fuel consumption, output, and value-added columns.
    #[arg(short, long)]
    input: PathBuf,

    /// Write the result table to this CSV file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// First year of the analysis window (also the overall-span start).
    #[arg(long)]
    start_year: Option<i32>,

    /// Last year of the analysis window (also the overall-span end).
    #[arg(long)]
    end_year: Option<i32>,

    /// JSON file with a custom fuel table (array of fuel specs).
    #[arg(long)]
    fuels: Option<PathBuf>,

    /// Print results as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SampleArgs {
    /// Path of the CSV file to create.
    #[arg(short, long, default_value = "sample_manufacturing_data.csv")]
    output: PathBuf,

    /// First year of the generated series.
    #[arg(long, default_value_t = DEFAULT_START_YEAR)]
    start_year: i32,

    /// Last year of the generated series.
    #[arg(long, default_value_t = DEFAULT_END_YEAR)]
    end_year: i32,

    /// RNG seed; the same seed always produces the same file.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decompose(args) => decompose(args),
        Commands::Sample(args) => sample(args),
    }
}

fn decompose(args: DecomposeArgs) -> Result<()> {
    let table = match &args.fuels {
        Some(path) => FuelTable::from_json_file(path)
            .with_context(|| format!("loading fuel table from {}", path.display()))?,
        None => FuelTable::default_manufacturing(),
    };

    let (range, span) = match (args.start_year, args.end_year) {
        (Some(start), Some(end)) => {
            if start > end {
                bail!("--start-year {start} is after --end-year {end}");
            }
            (Some((start, end)), Some((start, end)))
        }
        (None, None) => (None, None),
        _ => bail!("--start-year and --end-year must be given together"),
    };

    let records = load_records(&args.input, &table, range)
        .with_context(|| format!("loading dataset from {}", args.input.display()))?;
    let snapshots = build_snapshots(&records, &table);
    info!(periods = snapshots.len(), fuels = table.len(), "dataset loaded");

    let results = SeriesDecomposer::new()
        .decompose_series(&snapshots, span)
        .context("decomposition failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_table(&results);
    }

    if let Some(path) = &args.output {
        export_csv(path, &results)
            .with_context(|| format!("writing results to {}", path.display()))?;
        println!("\nResults saved to {}", path.display());
    }

    Ok(())
}

fn sample(args: SampleArgs) -> Result<()> {
    if args.start_year > args.end_year {
        bail!("--start-year {} is after --end-year {}", args.start_year, args.end_year);
    }
    let table = FuelTable::default_manufacturing();
    write_sample_csv(&args.output, &table, args.start_year, args.end_year, args.seed)
        .with_context(|| format!("writing sample data to {}", args.output.display()))?;
    println!("Sample dataset written to {}", args.output.display());
    Ok(())
}

fn print_table(results: &SeriesResult) {
    let width = 16;
    print!("{:<12}", DecompositionResult::COLUMNS[0]);
    for column in &DecompositionResult::COLUMNS[1..] {
        print!("{column:>width$}");
    }
    println!();

    for row in results.rows() {
        print!("{:<12}", row.period);
        for value in row.values() {
            print!("{value:>width$.2}");
        }
        println!();
    }
}
