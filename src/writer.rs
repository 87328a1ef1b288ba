//! Filesystem output for rendered pages.
//!
//! Every failure here is fatal: a half-written archive would be misleading, so
//! errors are returned to the caller instead of being logged and skipped.

use crate::error::SiteError;
use crate::models::RenderedPage;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create `path` and any missing parents. An existing directory is fine.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn ensure_dir(path: &Path) -> Result<(), SiteError> {
    if path.is_dir() {
        debug!("Directory already exists");
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|source| SiteError::CreateDir {
        path: path.to_owned(),
        source,
    })?;
    info!("Created directory");
    Ok(())
}

/// Write `content` to `path`, replacing whatever was there.
pub fn write_text(path: &Path, content: &str) -> Result<(), SiteError> {
    fs::write(path, content).map_err(|source| SiteError::WriteFile {
        path: path.to_owned(),
        source,
    })?;
    info!(path = %path.display(), bytes = content.len(), "Generated");
    Ok(())
}

/// Write a rendered page, creating its parent directory first.
pub fn write_page(page: &RenderedPage) -> Result<(), SiteError> {
    if let Some(parent) = page.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    write_text(&page.path, &page.html)
}
