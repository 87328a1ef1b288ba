//! Data models for dated news content and the pages rendered from it.
//!
//! This module defines the core data structures used throughout the application:
//! - [`NewsItem`]: A single news entry as it appears in a day's JSON file
//! - [`DayRecord`]: All items loaded for one calendar date
//! - [`RenderedPage`]: An HTML document paired with its output location
//! - [`SiteMeta`]: Presentation constants shared by every page
//!
//! The item field names are kept verbatim from the upstream data source (they
//! are Chinese column labels), hence the `#[serde(rename)]` attributes.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::PathBuf;

/// Label used when an item has no section/board.
pub const DEFAULT_SECTION: &str = "Uncategorized";
/// Label used when an item has no title.
pub const DEFAULT_TITLE: &str = "No Title";
/// Href used when an item has no link.
pub const DEFAULT_LINK: &str = "#";
/// Badge text used when an item has no category.
pub const DEFAULT_CATEGORY: &str = "General";
/// Source name used when an item has no source.
pub const DEFAULT_SOURCE: &str = "Unknown";

/// A single news entry from a day's JSON file.
///
/// Every field is optional. Defaults are applied by the accessor methods at
/// render time, never while loading, so a [`NewsItem`] always reflects exactly
/// what the source file contained.
///
/// # JSON Keys
///
/// | Key | Field |
/// |-----|-------|
/// | `版块` | [`section`](Self::section) |
/// | `标题` | [`title`](Self::title) |
/// | `链接` | [`link`](Self::link) |
/// | `分类` | [`category`](Self::category) |
/// | `来源` | [`source`](Self::source) |
/// | `内容` | [`body`](Self::body) |
/// | `发布时间` | [`published_at`](Self::published_at) |
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewsItem {
    #[serde(rename = "版块", default, deserialize_with = "scalar_text")]
    section: Option<String>,
    #[serde(rename = "标题", default, deserialize_with = "scalar_text")]
    title: Option<String>,
    #[serde(rename = "链接", default, deserialize_with = "scalar_text")]
    link: Option<String>,
    #[serde(rename = "分类", default, deserialize_with = "scalar_text")]
    category: Option<String>,
    #[serde(rename = "来源", default, deserialize_with = "scalar_text")]
    source: Option<String>,
    #[serde(rename = "内容", default, deserialize_with = "scalar_text")]
    body: Option<String>,
    #[serde(rename = "发布时间", default, deserialize_with = "scalar_text")]
    published_at: Option<String>,
}

impl NewsItem {
    /// The section/board the item is grouped under, or `"Uncategorized"`.
    pub fn section(&self) -> &str {
        self.section.as_deref().unwrap_or(DEFAULT_SECTION)
    }

    /// The headline, or `"No Title"`.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// The article URL, or `"#"`.
    pub fn link(&self) -> &str {
        self.link.as_deref().unwrap_or(DEFAULT_LINK)
    }

    /// The category badge text, or `"General"`.
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    /// The publishing outlet, or `"Unknown"`.
    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or(DEFAULT_SOURCE)
    }

    /// The body text, or an empty string.
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    /// The raw publish timestamp, if the source file had one.
    pub fn published_at(&self) -> Option<&str> {
        self.published_at.as_deref()
    }
}

/// Accept any JSON value for a text field.
///
/// Strings pass through, `null` is treated as absent and anything else is kept
/// as its JSON text.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// All news items loaded for one calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    /// The date parsed from the file name.
    pub date: NaiveDate,
    /// Items in the order they appear in the file.
    pub items: Vec<NewsItem>,
    /// The file this record was loaded from. Only used in diagnostics.
    pub source_path: PathBuf,
}

impl DayRecord {
    /// Number of items published that day.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// A rendered HTML document and where it should be written.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub path: PathBuf,
    pub html: String,
}

/// Presentation constants shared by the daily and index pages.
///
/// The copyright year is the only clock-dependent value in the output, so it
/// is captured once per run and handed to the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMeta {
    /// Name shown in the navbar, page titles and footers.
    pub name: String,
    /// Year printed in the footer.
    pub copyright_year: i32,
}

impl SiteMeta {
    /// Site metadata for a fixed copyright year.
    pub fn new(copyright_year: i32) -> Self {
        Self {
            name: "News Morning Paper".to_string(),
            copyright_year,
        }
    }

    /// Site metadata using the current local year.
    pub fn current() -> Self {
        Self::new(Local::now().year())
    }
}
