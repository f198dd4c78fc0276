//! Kadry CLI binary.
//!
//! Runs the résumé feature-preparation pipeline over a CSV export and
//! writes the feature matrix and target vector beside the input file.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use kadry::schema::TARGET_COLUMN;
use kadry::{Pipeline, PipelineError};
use kadry_output::ArrayExporter;
use kadry_stages::{
    CsvLoader, FeatureEncoder, MissingValueFiller, OutlierClipper, SalaryNormalizer,
    TextNormalizer,
};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "kadry")]
#[command(about = "Prepare a resume CSV export for salary modeling", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the source CSV file
    csv_path: PathBuf,

    /// Print per-stage progress and encoding summaries
    #[arg(short, long)]
    verbose: bool,
}

/// Compose the full stage chain for `csv_path`.
fn build_pipeline(csv_path: &Path, verbose: bool) -> Pipeline {
    Pipeline::new(CsvLoader::new(csv_path))
        .then(TextNormalizer)
        .then(SalaryNormalizer::new(TARGET_COLUMN))
        .then(OutlierClipper::new(TARGET_COLUMN))
        .then(MissingValueFiller)
        .then(FeatureEncoder::new().with_verbose(verbose))
        .then(ArrayExporter::beside_source(csv_path, TARGET_COLUMN))
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), PipelineError> {
    let cli = Cli::parse();
    let pipeline = build_pipeline(&cli.csv_path, cli.verbose);

    if cli.verbose {
        println!("Processing {}", cli.csv_path.display());

        let bar = ProgressBar::new(pipeline.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}") {
            bar.set_style(style);
        }
        let df = pipeline.run_observed(|name, table| {
            bar.set_message(format!("{name} ({} rows)", table.height()));
            bar.inc(1);
        })?;
        bar.finish_with_message("done");

        println!("Finished: {} rows, {} columns", df.height(), df.width());
    } else {
        pipeline.run()?;
    }
    Ok(())
}
