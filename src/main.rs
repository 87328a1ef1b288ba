//! # Morning Paper
//!
//! A static site generator for a daily news archive. It reads one JSON file of
//! news items per day and renders a browsable HTML archive: one page per day
//! plus an index of the most recent days.
//!
//! ## Usage
//!
//! ```sh
//! morning_paper -c ./content -o ./public
//! ```
//!
//! ## Architecture
//!
//! The application is a single synchronous pass:
//! 1. **Loading**: Discover `YYYY-MM-DD.json` files and parse them into days
//! 2. **Rendering**: Turn each day (and the recent-days index) into HTML
//! 3. **Writing**: Persist pages under `<output>/<YYYY>/<MM>/<DD>.html`
//!
//! Broken content files are logged and skipped. Only output failures abort
//! the run.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod loader;
mod models;
mod outputs;
mod paths;
mod site;
mod utils;
mod writer;

use cli::Cli;
use models::SiteMeta;
use site::{SiteConfig, build_site};

fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("morning_paper starting up");

    let args = Cli::parse();
    debug!(?args.content_dir, ?args.output_dir, recent_days = args.recent_days, "Parsed CLI arguments");

    let config = SiteConfig::from(args);
    let meta = SiteMeta::current();

    let summary = match build_site(&config, &meta) {
        Ok(summary) => summary,
        Err(e) => {
            error!(error = %e, "Site build failed");
            return Err(e.into());
        }
    };

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        days = summary.days_loaded,
        pages = summary.daily_pages_written + 1,
        "Execution complete"
    );

    Ok(())
}
