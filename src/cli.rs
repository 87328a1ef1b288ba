//! Command-line interface definitions for Morning Paper.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every option has a default matching the conventional project layout, so a
//! bare `morning_paper` run from the project root just works. All options can
//! also be provided via environment variables.

use crate::outputs::index::DEFAULT_RECENT_DAYS;
use crate::site::SiteConfig;
use clap::Parser;
use clap::builder::RangedU64ValueParser;
use std::path::PathBuf;

/// Command-line arguments for the Morning Paper generator.
///
/// # Examples
///
/// ```sh
/// # Build ./public from ./content
/// morning_paper
///
/// # Custom locations
/// morning_paper -c ./data/news -o ./site
///
/// # Show the last ten days on the index
/// morning_paper --recent-days 10
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory scanned recursively for YYYY-MM-DD.json files
    #[arg(short, long, env = "MORNING_PAPER_CONTENT_DIR", default_value = "content")]
    pub content_dir: PathBuf,

    /// Directory the HTML archive is written to
    #[arg(short, long, env = "MORNING_PAPER_OUTPUT_DIR", default_value = "public")]
    pub output_dir: PathBuf,

    /// Number of most recent days listed on the index page
    #[arg(
        short = 'n',
        long,
        env = "MORNING_PAPER_RECENT_DAYS",
        default_value_t = DEFAULT_RECENT_DAYS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub recent_days: usize,
}

impl From<Cli> for SiteConfig {
    fn from(cli: Cli) -> Self {
        SiteConfig {
            content_dir: cli.content_dir,
            output_dir: cli.output_dir,
            recent_days: cli.recent_days,
        }
    }
}
