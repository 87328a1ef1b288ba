//! HTML page rendering for the archive.
//!
//! This module contains submodules responsible for turning loaded content into
//! complete HTML documents. All renderers are pure: they return strings and
//! never touch the filesystem.
//!
//! # Submodules
//!
//! - [`daily`]: One page per [`DayRecord`](crate::models::DayRecord), grouped by section
//! - [`index`]: The archive front page listing the most recent days
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── index.html        # Recent days
//! └── 2025/
//!     └── 05/
//!         └── 06.html   # Daily page
//! ```
//!
//! Pages pull Bootstrap from jsDelivr; there is no local asset pipeline.

pub mod daily;
pub mod index;

use crate::models::SiteMeta;
use crate::utils::html_escape;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/js/bootstrap.bundle.min.js";

/// Wrap a page body in the shared HTML5 document shell.
///
/// `title` is escaped here; `style` and `body` are trusted markup produced by
/// the renderers.
fn document(title: &str, style: &str, body_class: Option<&str>, body: &str) -> String {
    let body_open = match body_class {
        Some(class) => format!(r#"<body class="{class}">"#),
        None => "<body>".to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link href="{BOOTSTRAP_CSS}" rel="stylesheet">
    <style>
{style}
    </style>
</head>
{body_open}
{body}
    <script src="{BOOTSTRAP_JS}"></script>
</body>
</html>
"#,
        title = html_escape(title),
    )
}

/// Site navbar whose brand links back to the archive index.
fn navbar(meta: &SiteMeta, relative_root: &str) -> String {
    format!(
        r#"    <nav class="navbar navbar-expand-lg navbar-dark bg-primary mb-4">
        <div class="container">
            <a class="navbar-brand" href="{relative_root}/index.html">{name}</a>
        </div>
    </nav>"#,
        name = html_escape(&meta.name),
    )
}
