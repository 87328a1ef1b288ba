//! Content discovery and loading.
//!
//! Walks the content root for `YYYY-MM-DD.json` files and turns each one into a
//! [`DayRecord`]. Unusable files are logged and skipped; a bad file never
//! stops the rest of the archive from loading.
//!
//! # Duplicate Dates
//!
//! Candidate files are processed in lexicographic path order and a later file
//! replaces an earlier one with the same date, so the lexicographically last
//! path wins. Every replacement is logged.

use crate::error::LoadError;
use crate::models::{DayRecord, NewsItem};
use chrono::NaiveDate;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

/// Load every dated JSON file under `content_dir`, newest date first.
///
/// A missing content root yields an empty dataset rather than an error.
#[instrument(level = "info", skip_all, fields(content_dir = %content_dir.display()))]
pub fn load_dataset(content_dir: &Path) -> Vec<DayRecord> {
    if !content_dir.is_dir() {
        warn!("Content directory does not exist; nothing to load");
        return Vec::new();
    }

    let mut days: BTreeMap<NaiveDate, DayRecord> = BTreeMap::new();

    for path in json_files(content_dir) {
        match load_day(&path) {
            Ok(record) => {
                debug!(path = %path.display(), items = record.item_count(), "Loaded day");
                if let Some(previous) = days.insert(record.date, record) {
                    warn!(
                        date = %previous.date,
                        replaced = %previous.source_path.display(),
                        path = %path.display(),
                        "Duplicate date; later path wins"
                    );
                }
            }
            Err(LoadError::InvalidDate { stem }) => {
                warn!(path = %path.display(), %stem, "Skipping file with invalid date format");
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping unreadable content file");
            }
        }
    }

    let dataset: Vec<DayRecord> = days.into_values().rev().collect();
    info!(days = dataset.len(), "Loaded dataset");
    dataset
}

/// All `.json` files below `root`, sorted by path.
fn json_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "Skipping unreadable directory entry");
                None
            }
        })
        .map(|entry| entry.into_path())
        // Follows symlinks, so linked day files are loaded like regular ones.
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .sorted()
        .collect()
}

/// Load a single day's file.
///
/// The date is checked first so that a misnamed file is rejected without being
/// read.
pub fn load_day(path: &Path) -> Result<DayRecord, LoadError> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let date = parse_date_stem(&stem)?;

    let body = fs::read_to_string(path).map_err(LoadError::Read)?;
    let items: Vec<NewsItem> = serde_json::from_str(&body)?;

    Ok(DayRecord {
        date,
        items,
        source_path: path.to_owned(),
    })
}

/// Parse a strict `YYYY-MM-DD` file stem.
///
/// chrono on its own accepts unpadded fields such as `2024-1-2`, so the shape
/// is checked before handing the string over.
pub fn parse_date_stem(stem: &str) -> Result<NaiveDate, LoadError> {
    let invalid = || LoadError::InvalidDate {
        stem: stem.to_string(),
    };

    let bytes = stem.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(stem, "%Y-%m-%d").map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, contents: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_stem_valid() {
        assert_eq!(parse_date_stem("2024-01-02").unwrap(), date(2024, 1, 2));
    }

    #[test]
    fn test_parse_date_stem_rejects_bad_shapes() {
        for stem in ["2024-1-2", "20240102", "2024/01/02", "notes", "2024-01-02x", ""] {
            assert!(
                matches!(parse_date_stem(stem), Err(LoadError::InvalidDate { .. })),
                "{stem} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_date_stem_rejects_impossible_dates() {
        assert!(parse_date_stem("2024-02-30").is_err());
        assert!(parse_date_stem("2023-13-01").is_err());
    }

    #[test]
    fn test_load_dataset_sorted_descending() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "2024-01-01.json", "[]");
        write(dir.path(), "2024/2024-01-03.json", r#"[{"标题": "a"}]"#);
        write(dir.path(), "deep/nested/2024-01-02.json", r#"[{}, {}]"#);

        let dataset = load_dataset(dir.path());
        let dates: Vec<NaiveDate> = dataset.iter().map(|r| r.date).collect();

        assert_eq!(dates, vec![date(2024, 1, 3), date(2024, 1, 2), date(2024, 1, 1)]);
        assert_eq!(dataset[1].item_count(), 2);
    }

    #[test]
    fn test_load_dataset_skips_bad_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "2024-01-01.json", r#"[{"标题": "kept"}]"#);
        write(dir.path(), "readme.json", "[]");
        write(dir.path(), "2024-01-02.json", "{ not json");
        write(dir.path(), "2024-01-03.json", r#"{"标题": "object, not array"}"#);
        write(dir.path(), "2024-01-04.txt", "[]");

        let dataset = load_dataset(dir.path());

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset[0].date, date(2024, 1, 1));
        assert_eq!(dataset[0].items[0].title(), "kept");
    }

    #[test]
    fn test_load_dataset_duplicate_date_last_path_wins() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a/2024-01-01.json", r#"[{"标题": "from a"}]"#);
        let winner = write(dir.path(), "b/2024-01-01.json", r#"[{"标题": "from b"}]"#);

        let dataset = load_dataset(dir.path());

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset[0].items[0].title(), "from b");
        assert_eq!(dataset[0].source_path, winner);
    }

    #[cfg(unix)]
    #[test]
    fn test_load_dataset_follows_symlinked_files() {
        let dir = TempDir::new().unwrap();
        let target = write(dir.path(), "store/real.json", r#"[{"标题": "linked"}]"#);
        std::os::unix::fs::symlink(&target, dir.path().join("2024-01-01.json")).unwrap();

        let dataset = load_dataset(dir.path());

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset[0].date, date(2024, 1, 1));
        assert_eq!(dataset[0].items[0].title(), "linked");
    }

    #[test]
    fn test_load_dataset_missing_root() {
        let dir = TempDir::new().unwrap();
        assert!(load_dataset(&dir.path().join("absent")).is_empty());
    }

    #[test]
    fn test_load_day_keeps_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write(
            dir.path(),
            "2024-05-06.json",
            r#"[{"标题": "first"}, {"标题": "second"}, {"标题": "third"}]"#,
        );

        let record = load_day(&path).unwrap();
        let titles: Vec<&str> = record.items.iter().map(|i| i.title()).collect();

        assert_eq!(titles, vec!["first", "second", "third"]);
        assert_eq!(record.source_path, path);
    }

    #[test]
    fn test_load_day_invalid_date_not_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draft.json");

        assert!(matches!(load_day(&path), Err(LoadError::InvalidDate { .. })));
    }

    #[test]
    fn test_load_day_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("2024-01-01.json");

        assert!(matches!(load_day(&path), Err(LoadError::Read(_))));
    }
}
