//! Confined file writes for generated projects

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::plan::paths::is_contained;

/// Joins `rel` onto `root`, refusing anything that could land outside it.
///
/// Purely lexical: absolute paths, `..` and prefix components are rejected
/// before touching the filesystem, so it works for files that do not exist yet.
pub fn resolve_within(root: &Path, rel: &str) -> Result<PathBuf> {
    if !is_contained(rel) {
        warn!(
            requested_path = rel,
            root = %root.display(),
            "Path traversal attempt detected"
        );
        return Err(anyhow!(
            "Path traversal detected: {:?} is outside the project directory",
            rel
        ));
    }
    Ok(root.join(rel))
}

/// Writes `contents` to `root/rel`, creating parent directories as needed.
pub async fn write_file(root: &Path, rel: &str, contents: &str) -> Result<PathBuf> {
    let path = resolve_within(root, rel)?;

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    tokio::fs::write(&path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(path)
}
