//! Site build orchestration.
//!
//! [`build_site`] stitches the pipeline together:
//!
//! 1. Ensure the output root exists
//! 2. Load every dated content file ([`crate::loader`])
//! 3. Render and write the index ([`crate::outputs::index`])
//! 4. Render and write one page per day with neighbour links
//!    ([`crate::outputs::daily`])
//!
//! Every run is a full rebuild; existing pages are overwritten in place.

use crate::error::SiteError;
use crate::loader::load_dataset;
use crate::models::{DayRecord, RenderedPage, SiteMeta};
use crate::outputs::{daily, index};
use crate::paths::{index_path, output_path_for};
use crate::writer::{ensure_dir, write_page};
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// Where to read content from and where to write the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Root scanned recursively for `YYYY-MM-DD.json` files.
    pub content_dir: PathBuf,
    /// Root of the generated archive.
    pub output_dir: PathBuf,
    /// How many of the newest days the index lists.
    pub recent_days: usize,
}

/// Counts reported after a successful build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildSummary {
    /// Distinct days loaded from the content root.
    pub days_loaded: usize,
    /// Daily pages written; always equal to `days_loaded`.
    pub daily_pages_written: usize,
    /// Days listed on the index page.
    pub index_entries: usize,
}

/// Build the whole archive described by `config`.
///
/// # Errors
///
/// Returns [`SiteError`] if an output directory cannot be created or a page
/// cannot be written. Problems with individual content files are logged and
/// do not fail the build.
#[instrument(
    level = "info",
    skip_all,
    fields(content_dir = %config.content_dir.display(), output_dir = %config.output_dir.display())
)]
pub fn build_site(config: &SiteConfig, meta: &SiteMeta) -> Result<BuildSummary, SiteError> {
    ensure_dir(&config.output_dir)?;

    let dataset = load_dataset(&config.content_dir);
    if dataset.is_empty() {
        warn!("No data found in content directory");
    }

    write_page(&RenderedPage {
        path: index_path(&config.output_dir),
        html: index::render_index(meta, &dataset, config.recent_days),
    })?;

    for (i, record) in dataset.iter().enumerate() {
        let (prev_date, next_date) = neighbours(&dataset, i);
        write_page(&RenderedPage {
            path: output_path_for(&config.output_dir, record.date),
            html: daily::render_day(meta, record, prev_date, next_date),
        })?;
    }

    let summary = BuildSummary {
        days_loaded: dataset.len(),
        daily_pages_written: dataset.len(),
        index_entries: dataset.len().min(config.recent_days),
    };
    info!(
        days = summary.days_loaded,
        daily_pages = summary.daily_pages_written,
        index_entries = summary.index_entries,
        "Site build complete"
    );
    Ok(summary)
}

/// The chronological neighbours of `dataset[i]` as `(previous, next)`.
///
/// `dataset` is newest first, so the earlier day sits at `i + 1` and the later
/// day at `i - 1`.
pub fn neighbours(dataset: &[DayRecord], i: usize) -> (Option<NaiveDate>, Option<NaiveDate>) {
    let previous = dataset.get(i + 1).map(|r| r.date);
    let next = i
        .checked_sub(1)
        .and_then(|j| dataset.get(j))
        .map(|r| r.date);
    (previous, next)
}
