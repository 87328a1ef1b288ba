//! Output locations and relative links between generated pages.
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── index.html
//! └── 2025/
//!     └── 05/
//!         ├── 05.html
//!         └── 06.html
//! ```
//!
//! Every daily page sits exactly three levels below the output root, which is
//! what lets [`DAILY_RELATIVE_ROOT`] be a constant.

use chrono::{Datelike, NaiveDate};
use std::path::{Component, Path, PathBuf};

/// File name of the archive index at the output root.
pub const INDEX_FILE: &str = "index.html";

/// Relative path from any daily page's directory back to the output root.
pub const DAILY_RELATIVE_ROOT: &str = "../..";

/// Location of the daily page for `date`: `<root>/<YYYY>/<MM>/<DD>.html`.
pub fn output_path_for(root: &Path, date: NaiveDate) -> PathBuf {
    root.join(format!("{:04}", date.year()))
        .join(format!("{:02}", date.month()))
        .join(format!("{:02}.html", date.day()))
}

/// Location of the archive index: `<root>/index.html`.
pub fn index_path(root: &Path) -> PathBuf {
    root.join(INDEX_FILE)
}

/// Link from the index page to the daily page for `date`.
///
/// The index always lives at the output root, so this is just the daily
/// page's path below the root.
pub fn index_link_for(date: NaiveDate) -> String {
    format!("{:04}/{:02}/{:02}.html", date.year(), date.month(), date.day())
}

/// Compute an `href` that leads from `from_file` to `to_file`.
///
/// The result is relative to the directory containing `from_file` and always
/// uses `/` separators. Both paths must be expressed against the same base
/// (both relative to one root, or both absolute); nothing is looked up on disk.
pub fn relative_link(from_file: &Path, to_file: &Path) -> String {
    let from_dir: Vec<Component> = from_file
        .parent()
        .map(|dir| dir.components().filter(|c| *c != Component::CurDir).collect())
        .unwrap_or_default();
    let target: Vec<Component> = to_file
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();

    let common = from_dir
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let parts: Vec<String> = std::iter::repeat_n("..".to_string(), from_dir.len() - common)
        .chain(
            target[common..]
                .iter()
                .map(|c| c.as_os_str().to_string_lossy().into_owned()),
        )
        .collect();

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_output_path_for_pads_month_and_day() {
        let path = output_path_for(Path::new("public"), date(2024, 1, 2));
        assert_eq!(path, Path::new("public/2024/01/02.html"));
    }

    #[test]
    fn test_output_path_for_double_digit() {
        let path = output_path_for(Path::new("/srv/site"), date(2023, 12, 31));
        assert_eq!(path, Path::new("/srv/site/2023/12/31.html"));
    }

    #[test]
    fn test_index_path() {
        assert_eq!(index_path(Path::new("public")), Path::new("public/index.html"));
    }

    #[test]
    fn test_index_link_for() {
        assert_eq!(index_link_for(date(2024, 3, 9)), "2024/03/09.html");
    }

    #[test]
    fn test_relative_link_same_month() {
        let from = Path::new("public/2024/01/02.html");
        let to = Path::new("public/2024/01/01.html");
        assert_eq!(relative_link(from, to), "01.html");
    }

    #[test]
    fn test_relative_link_across_year() {
        let from = Path::new("public/2024/01/01.html");
        let to = Path::new("public/2023/12/31.html");
        assert_eq!(relative_link(from, to), "../../2023/12/31.html");
    }

    #[test]
    fn test_relative_link_ignores_cur_dir() {
        let from = Path::new("./public/2024/02/01.html");
        let to = Path::new("public/2024/01/31.html");
        assert_eq!(relative_link(from, to), "../01/31.html");
    }

    #[test]
    fn test_daily_relative_root_matches_general_solution() {
        let root = Path::new("public");
        let daily = output_path_for(root, date(2024, 5, 6));
        let index = index_path(root);
        assert_eq!(
            relative_link(&daily, &index),
            format!("{}/{}", DAILY_RELATIVE_ROOT, INDEX_FILE)
        );
    }
}
