use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, warn, Level};

use crate::services::{
    generate_summary, render_json, render_text, unpriced_consumptions, Fetcher, Transport,
};
use crate::types::{
    BookdashError, Result, SourceConfig, DEFAULT_BOOKINGS_URL, DEFAULT_CONSUMPTION_TYPES_URL,
};

/// Booking dashboard summary: totals, consumption counts and catalog-priced cost
#[derive(Parser, Debug)]
#[command(name = "bookdash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Bookings endpoint
    #[arg(
        long,
        value_name = "URL",
        default_value = DEFAULT_BOOKINGS_URL,
        env = "BOOKDASH_BOOKINGS_URL"
    )]
    bookings_url: String,

    /// Consumption type catalog endpoint
    #[arg(
        long,
        value_name = "URL",
        default_value = DEFAULT_CONSUMPTION_TYPES_URL,
        env = "BOOKDASH_CONSUMPTION_TYPES_URL"
    )]
    consumption_types_url: String,

    /// Request timeout in seconds (defaults to the HTTP client's own)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig {
            bookings_url: self.bookings_url.clone(),
            consumption_types_url: self.consumption_types_url.clone(),
            timeout_secs: self.timeout,
        }
    }

    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    /// Fetch, aggregate and print to stdout/stderr
    pub fn run(self) -> anyhow::Result<ExitCode> {
        let fetcher = Fetcher::from_config(self.source_config())?;
        let code = execute(
            &fetcher,
            self.json,
            &mut std::io::stdout().lock(),
            &mut std::io::stderr().lock(),
        )?;
        Ok(code)
    }
}

/// Write the report to `out`, or a one-line diagnostic to `err` with a
/// failure exit code and no report.
pub fn execute<T: Transport>(
    fetcher: &Fetcher<T>,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<ExitCode> {
    match build_report(fetcher, json) {
        Ok(report) => {
            out.write_all(report.as_bytes())?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            writeln!(err, "{}", diagnostic(&e))?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Run the pipeline: bookings, then consumption types, then summary, then render
pub fn build_report<T: Transport>(fetcher: &Fetcher<T>, json: bool) -> Result<String> {
    let bookings = fetcher.fetch_bookings()?;
    let consumption_types = fetcher.fetch_consumption_types()?;

    let summary = generate_summary(&bookings, &consumption_types);
    debug!(
        bookings = summary.total_bookings,
        cost = summary.total_consumption_cost,
        "summary generated"
    );

    for name in unpriced_consumptions(&summary, &consumption_types) {
        warn!(consumption = %name, "no catalog price, counted at zero cost");
    }

    if json {
        let mut out = render_json(&summary)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(render_text(&summary))
    }
}

/// One-line user-facing message naming the failed stage
pub fn diagnostic(err: &BookdashError) -> String {
    match err.source_name() {
        Some(source) => format!("Error fetching {}: {}", source, err),
        None => format!("Error: {}", err),
    }
}
