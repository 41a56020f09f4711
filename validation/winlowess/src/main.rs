//! `validate`: smooth a yearly temperature file and compare the result with
//! the file's own `temperature_smoothed` column.
//!
//! ```text
//! validate graph.txt --half-width 5 --engine custom --output report.json
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

mod report;
mod weather;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use fastWinlowess::prelude::*;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::report::Report;
use crate::weather::{Format, Order, Query, WeatherData};

/// Smooth a yearly temperature series and compare it with a reference column.
#[derive(Debug, Parser)]
#[command(name = "validate", version, about)]
struct Args {
    /// Weather data file (text, JSON, CSV or XML).
    input: PathBuf,

    /// Samples on each side of the target year.
    #[arg(long, default_value_t = 5)]
    half_width: usize,

    /// Smoothing engine: `custom` or `reference`.
    #[arg(long, default_value = "custom")]
    engine: Engine,

    /// Input format; guessed from the file extension when omitted.
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Write the JSON report here instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// First year listed in the report.
    #[arg(long)]
    lower: Option<i32>,

    /// Last year listed in the report.
    #[arg(long)]
    upper: Option<i32>,

    /// List rows by temperature instead of by year.
    #[arg(long, value_enum)]
    order: Option<Order>,

    /// Fail when any difference exceeds this tolerance.
    #[arg(long)]
    tolerance: Option<f64>,

    /// Run the sequential driver instead of the parallel one.
    #[arg(long)]
    sequential: bool,
}

impl Args {
    fn query(&self) -> Query {
        let all = Query::all();
        Query {
            lower: self.lower.unwrap_or(all.lower),
            upper: self.upper.unwrap_or(all.upper),
            order: self.order,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let report = run(&args)?;
    let json = serde_json::to_string_pretty(&report)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing report to {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }

    if let Some(tolerance) = args.tolerance {
        let cmp = &report.comparison;
        if cmp.non_finite > 0 || cmp.max_abs > tolerance {
            bail!(
                "smoothing differs from reference: max |diff| {:.6} (tolerance {tolerance}), {} non-finite",
                cmp.max_abs,
                cmp.non_finite
            );
        }
    }

    Ok(())
}

fn run(args: &Args) -> anyhow::Result<Report> {
    let format = args.format.unwrap_or_else(|| Format::from_path(&args.input));
    debug!(?format, input = %args.input.display(), "loading weather data");

    let data = WeatherData::load(&args.input, format)?;
    data.validate()
        .with_context(|| format!("validating {}", args.input.display()))?;

    let years = data.years();
    debug!(
        records = data.len(),
        first = ?years.first(),
        last = ?years.last(),
        temperatures = ?data.temperature_range(),
        "weather data loaded"
    );

    let model = WinLowess::new()
        .half_width(args.half_width)
        .engine(args.engine)
        .parallel(!args.sequential)
        .build()?;
    let result = model.fit(&data.to_series())?;
    let comparison = result.compare(&data.temperatures_smoothed())?;

    info!(
        points = result.len(),
        half_width = result.half_width,
        engine = %result.engine,
        max_abs = comparison.max_abs,
        rmse = comparison.rmse,
        "smoothing compared"
    );
    let non_finite_smoothed = result.non_finite_count();
    if non_finite_smoothed > 0 {
        warn!(count = non_finite_smoothed, "non-finite smoothed values");
    }
    if comparison.non_finite > non_finite_smoothed {
        warn!(count = comparison.non_finite, "non-finite differences");
    }

    let rows = data.query_indices(&args.query());
    Ok(Report::new(&display_name(&args.input), &data, &result, &comparison, &rows))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
