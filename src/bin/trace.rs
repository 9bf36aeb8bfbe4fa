//! Sorts a sequence and prints what a visualizer would have been told along the way.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use partition_sort_rs::report::{Overrides, TraceReport};
use partition_sort_rs::{ConfigError, PivotStrategy, SortConfig};

#[derive(Debug, Parser)]
#[command(name = "partition-trace", version, about = "Trace the partitions of a quicksort run")]
struct Args {
    /// Integers to sort, the demo sequence if omitted.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i32>,

    /// JSON file with a sort config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the pivot strategy of the config (last, median_of_three).
    #[arg(long)]
    pivot: Option<PivotStrategy>,

    /// Overrides the pivot marker of the config.
    #[arg(long)]
    marker: Option<String>,

    /// Print config, input, result, stats, the highlight trace and the steps as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "partition-trace failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), ConfigError> {
    let config = match &args.config {
        Some(path) => SortConfig::load(path)?,
        None => SortConfig::default(),
    };
    let config = Overrides {
        pivot: args.pivot,
        marker: args.marker,
    }
    .apply(config);

    let report = TraceReport::build(config, args.values);
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.sorted_line());
    }

    Ok(())
}
