//! Daily page rendering.
//!
//! A daily page shows every item loaded for one date, grouped into sections
//! by the item's board, plus navigation to the neighbouring days.
//!
//! # Navigation Labels
//!
//! The link to the chronologically *later* day is labelled "Next Day" and sits
//! on the left with a left arrow; the link to the *earlier* day is labelled
//! "Previous Day" with a right arrow.

use super::{document, navbar};
use crate::models::{DayRecord, NewsItem, SiteMeta};
use crate::paths::{DAILY_RELATIVE_ROOT, output_path_for, relative_link};
use crate::utils::{format_time, html_escape};
use chrono::NaiveDate;
use std::path::Path;

const DAILY_STYLE: &str = "        .news-card { transition: transform 0.2s; }
        .news-card:hover { transform: translateY(-5px); box-shadow: 0 4px 15px rgba(0,0,0,0.1); }
        .section-header { border-left: 5px solid #0d6efd; padding-left: 10px; margin-bottom: 20px; }";

/// Render the daily page for `record`.
///
/// # Arguments
///
/// * `meta` - Site name and copyright year
/// * `record` - The day to render
/// * `prev_date` - The nearest earlier day in the archive, if any
/// * `next_date` - The nearest later day in the archive, if any
///
/// # Returns
///
/// A complete HTML document. Rendering never fails: missing item fields fall
/// back to their defaults.
pub fn render_day(
    meta: &SiteMeta,
    record: &DayRecord,
    prev_date: Option<NaiveDate>,
    next_date: Option<NaiveDate>,
) -> String {
    let date = record.date.format("%Y-%m-%d").to_string();

    let sections: String = group_by_section(&record.items)
        .into_iter()
        .map(|(name, items)| render_section(name, &items))
        .collect();

    let body = format!(
        r#"{navbar}

    <div class="container">
        <div class="d-flex justify-content-between align-items-center mb-4">
            <h1>{date} News</h1>
            <div>
                {next}
                {prev}
            </div>
        </div>
{sections}
    </div>

    <footer class="bg-dark text-white text-center py-3 mt-5">
        <p>&copy; {year} {name}. All rights reserved.</p>
    </footer>
"#,
        navbar = navbar(meta, DAILY_RELATIVE_ROOT),
        next = next_control(record.date, next_date),
        prev = prev_control(record.date, prev_date),
        year = meta.copyright_year,
        name = html_escape(&meta.name),
    );

    document(
        &format!("{date} {}", meta.name),
        DAILY_STYLE,
        Some("bg-light"),
        &body,
    )
}

/// Link to the later day, or a disabled button when this is the newest day.
fn next_control(current: NaiveDate, next_date: Option<NaiveDate>) -> String {
    match next_date {
        Some(next) => format!(
            r#"<a href="{}" class="btn btn-outline-primary me-2">&larr; Next Day</a>"#,
            day_href(current, next)
        ),
        None => r#"<button class="btn btn-outline-secondary me-2" disabled>&larr; Next Day</button>"#
            .to_string(),
    }
}

/// Link to the earlier day, or a disabled button when this is the oldest day.
fn prev_control(current: NaiveDate, prev_date: Option<NaiveDate>) -> String {
    match prev_date {
        Some(prev) => format!(
            r#"<a href="{}" class="btn btn-outline-primary">Previous Day &rarr;</a>"#,
            day_href(current, prev)
        ),
        None => r#"<button class="btn btn-outline-secondary" disabled>Previous Day &rarr;</button>"#
            .to_string(),
    }
}

/// Relative href between two daily pages. Both live under the same root, so
/// the root itself drops out of the computation.
fn day_href(from: NaiveDate, to: NaiveDate) -> String {
    let root = Path::new("");
    html_escape(&relative_link(
        &output_path_for(root, from),
        &output_path_for(root, to),
    ))
}

/// Group items by section, keeping sections in first-seen order and items in
/// file order.
pub fn group_by_section(items: &[NewsItem]) -> Vec<(&str, Vec<&NewsItem>)> {
    let mut sections: Vec<(&str, Vec<&NewsItem>)> = Vec::new();
    for item in items {
        let name = item.section();
        match sections.iter_mut().find(|(section, _)| *section == name) {
            Some((_, group)) => group.push(item),
            None => sections.push((name, vec![item])),
        }
    }
    sections
}

fn render_section(name: &str, items: &[&NewsItem]) -> String {
    let cards: String = items.iter().map(|item| render_item(item)).collect();

    format!(
        r#"
    <div class="row mb-5">
        <div class="col-12">
            <h2 class="section-header">{name}</h2>
            <div class="row">
{cards}
            </div>
        </div>
    </div>
"#,
        name = html_escape(name),
    )
}

fn render_item(item: &NewsItem) -> String {
    format!(
        r#"
        <div class="col-md-12 mb-3">
            <div class="card news-card h-100">
                <div class="card-body">
                    <div class="d-flex justify-content-between align-items-start">
                        <h5 class="card-title text-primary"><a href="{link}" target="_blank" class="text-decoration-none">{title}</a></h5>
                        <span class="badge bg-secondary">{category}</span>
                    </div>
                    <h6 class="card-subtitle mb-2 text-muted">{source} - {time}</h6>
                    <p class="card-text">{body}</p>
                </div>
            </div>
        </div>
"#,
        link = html_escape(item.link()),
        title = html_escape(item.title()),
        category = html_escape(item.category()),
        source = html_escape(item.source()),
        time = html_escape(&format_time(item.published_at())),
        body = html_escape(item.body()),
    )
}
