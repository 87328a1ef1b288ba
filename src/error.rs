//! Error types for loading content and writing the site.
//!
//! Two families of failure exist and they are handled very differently:
//!
//! - [`LoadError`]: a single source file is unusable. The loader logs it and
//!   moves on; these never abort a run.
//! - [`SiteError`]: the output tree cannot be created or written. These are
//!   fatal and propagate out of [`crate::site::build_site`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A source file that had to be skipped.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file stem is not a `YYYY-MM-DD` calendar date.
    #[error("file name `{stem}` is not a YYYY-MM-DD date")]
    InvalidDate { stem: String },

    /// The file could not be read.
    #[error("reading file: {0}")]
    Read(#[source] io::Error),

    /// The file is not a JSON array of item objects.
    #[error("parsing JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A fatal failure while producing output.
#[derive(Debug, Error)]
pub enum SiteError {
    /// An output directory could not be created.
    #[error("creating directory `{}`: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    /// A rendered page could not be written.
    #[error("writing file `{}`: {source}", path.display())]
    WriteFile { path: PathBuf, source: io::Error },
}
