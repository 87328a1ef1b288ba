//! Archive index page rendering.
//!
//! The index lives at the output root and lists the most recent days, newest
//! first, with a link and item count for each.

use super::document;
use crate::models::{DayRecord, SiteMeta};
use crate::paths::index_link_for;
use crate::utils::html_escape;

/// Number of days listed on the index unless configured otherwise.
pub const DEFAULT_RECENT_DAYS: usize = 5;

const INDEX_STYLE: &str = "        body { background-color: #f8f9fa; }
        .header-section { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 60px 0; margin-bottom: 40px; }";

const NO_DATA_ROW: &str = r#"<div class="list-group-item">No news data found.</div>"#;

/// Render the archive index.
///
/// # Arguments
///
/// * `meta` - Site name and copyright year
/// * `dataset` - All loaded days, newest first
/// * `limit` - Maximum number of days to list
///
/// # Returns
///
/// A complete HTML document listing the first `limit` days of `dataset`, or a
/// single placeholder row when `dataset` is empty.
pub fn render_index(meta: &SiteMeta, dataset: &[DayRecord], limit: usize) -> String {
    let list = if dataset.is_empty() {
        NO_DATA_ROW.to_string()
    } else {
        dataset.iter().take(limit).map(render_row).collect()
    };

    let body = format!(
        r#"    <div class="header-section text-center">
        <div class="container">
            <h1 class="display-4">{name}</h1>
            <p class="lead">Your daily dose of technology and industry updates.</p>
        </div>
    </div>

    <div class="container">
        <div class="row justify-content-center">
            <div class="col-md-8">
                <div class="card shadow-sm">
                    <div class="card-header bg-white">
                        <h4 class="mb-0">Recent Archives (Last {limit} Days)</h4>
                    </div>
                    <div class="list-group list-group-flush">
                        {list}
                    </div>
                </div>
            </div>
        </div>
    </div>

    <footer class="text-center py-4 mt-5 text-muted">
        <p>&copy; {year} {name}</p>
    </footer>
"#,
        name = html_escape(&meta.name),
        year = meta.copyright_year,
    );

    document(&format!("{} Archive", meta.name), INDEX_STYLE, None, &body)
}

fn render_row(record: &DayRecord) -> String {
    format!(
        r#"
        <a href="{link}" class="list-group-item list-group-item-action d-flex justify-content-between align-items-center">
            <div>
                <h5 class="mb-1">{date}</h5>
                <small class="text-muted">{count} news items</small>
            </div>
            <span class="badge bg-primary rounded-pill">View &rarr;</span>
        </a>
"#,
        link = index_link_for(record.date),
        date = record.date.format("%Y-%m-%d"),
        count = record.item_count(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn day(y: i32, m: u32, d: u32, items: usize) -> DayRecord {
        DayRecord {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            items: vec![Default::default(); items],
            source_path: PathBuf::from(format!("content/{y:04}-{m:02}-{d:02}.json")),
        }
    }

    fn row_count(html: &str) -> usize {
        html.matches("list-group-item-action").count()
    }

    #[test]
    fn test_render_index_empty_placeholder() {
        let html = render_index(&SiteMeta::new(2024), &[], DEFAULT_RECENT_DAYS);

        assert!(html.contains("No news data found."));
        assert_eq!(row_count(&html), 0);
    }

    #[test]
    fn test_render_index_zero_limit_is_not_empty_archive() {
        let dataset = vec![day(2024, 1, 1, 2)];
        let html = render_index(&SiteMeta::new(2024), &dataset, 0);

        assert!(!html.contains("No news data found."));
        assert_eq!(row_count(&html), 0);
    }

    #[test]
    fn test_render_index_lists_at_most_limit() {
        let dataset: Vec<DayRecord> = (1..=7).rev().map(|d| day(2024, 1, d, d as usize)).collect();
        let html = render_index(&SiteMeta::new(2024), &dataset, DEFAULT_RECENT_DAYS);

        assert_eq!(row_count(&html), 5);
        assert!(html.contains(r#"href="2024/01/07.html""#));
        assert!(html.contains(r#"href="2024/01/03.html""#));
        assert!(!html.contains("2024/01/02.html"));
        assert!(!html.contains("No news data found."));
        assert!(html.contains("Recent Archives (Last 5 Days)"));
    }

    #[test]
    fn test_render_index_row_contents() {
        let dataset = vec![day(2023, 12, 31, 3)];
        let html = render_index(&SiteMeta::new(2024), &dataset, DEFAULT_RECENT_DAYS);

        assert!(html.contains(r#"<a href="2023/12/31.html""#));
        assert!(html.contains(r#"<h5 class="mb-1">2023-12-31</h5>"#));
        assert!(html.contains("3 news items"));
    }

    #[test]
    fn test_render_index_keeps_dataset_order() {
        let dataset = vec![day(2024, 2, 1, 1), day(2024, 1, 15, 1)];
        let html = render_index(&SiteMeta::new(2024), &dataset, DEFAULT_RECENT_DAYS);

        let newer = html.find("2024/02/01.html").unwrap();
        let older = html.find("2024/01/15.html").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn test_render_index_shell() {
        let html = render_index(&SiteMeta::new(2030), &[], DEFAULT_RECENT_DAYS);

        assert!(html.contains("<title>News Morning Paper Archive</title>"));
        assert!(html.contains("&copy; 2030 News Morning Paper</p>"));
        assert!(html.contains("<body>"));
    }
}
