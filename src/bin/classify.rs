//! Headless classifier: load a photometry catalog and print one
//! `<label> : <class>` line per source.
//!
//! ```bash
//! classify sample_photometry.parquet
//! classify catalog.csv --bands bands.toml --format json --output results.json
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use yso_sed::config::{resolve_band_set, CONFIG_ENV_VAR};
use yso_sed::data::loader::load_file;
use yso_sed::report;
use yso_sed::sed::pipeline::Pipeline;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// `<label> : <class>` lines
    Text,
    /// Full results including flux densities and SED points
    Json,
    /// One row per source with α, class and log-log SED points
    Csv,
}

/// Classify young stellar objects in a WISE photometry catalog
#[derive(Parser, Debug)]
#[command(name = "classify", version)]
struct Args {
    /// Catalog file (.parquet, .json or .csv)
    input: PathBuf,

    /// TOML file overriding band wavelengths / zero points
    #[arg(long, value_name = "FILE", env = CONFIG_ENV_VAR)]
    bands: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write to FILE instead of stdout
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Classify on a single thread
    #[arg(long)]
    sequential: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    // Band configuration errors are fatal before any source is touched.
    let bands = match resolve_band_set(args.bands.as_deref()) {
        Ok(bands) => bands,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    match run(&args, Pipeline::new(bands)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, pipeline: Pipeline) -> Result<()> {
    let catalog = load_file(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;

    let results = if args.sequential {
        pipeline.run_sequential(&catalog.records)
    } else {
        pipeline.run(&catalog.records)
    };

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match args.format {
        Format::Text => out
            .write_all(report::text_report(&results).as_bytes())
            .context("writing report")?,
        Format::Json => report::write_json(&results, &mut out)?,
        Format::Csv => report::write_csv(&results, &mut out)?,
    }
    out.flush().context("flushing output")?;

    log::info!("{}", report::summary_line(&results));
    Ok(())
}
