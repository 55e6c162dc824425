pub mod complexity;
pub mod maintainability;

use crate::error::{HeliumError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

pub use complexity::load_complexity;
pub use maintainability::load_maintainability;

/// Anything tied to a source path that an exclude pattern can drop.
pub trait SourcePath {
    fn source_path(&self) -> &str;
}

impl SourcePath for crate::types::metrics::MaintainabilityEntry {
    fn source_path(&self) -> &str {
        &self.path
    }
}

impl SourcePath for crate::types::metrics::ComplexityEntry {
    fn source_path(&self) -> &str {
        &self.path
    }
}

pub(crate) fn read_metrics_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(HeliumError::PathNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

pub fn build_excludes(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| HeliumError::ConfigParse(format!("invalid exclude glob: {e}")))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| HeliumError::ConfigParse(format!("invalid exclude set: {e}")))
}

/// Drops entries whose path matches an exclude pattern. Paths are tried both
/// as written and without a leading `./`.
pub fn apply_excludes<T: SourcePath>(entries: Vec<T>, excludes: &GlobSet) -> Vec<T> {
    if excludes.is_empty() {
        return entries;
    }
    let before = entries.len();
    let kept = entries
        .into_iter()
        .filter(|entry| {
            let path = entry.source_path();
            let trimmed = path.strip_prefix("./").unwrap_or(path);
            !(excludes.is_match(path) || excludes.is_match(trimmed))
        })
        .collect::<Vec<_>>();
    tracing::debug!(excluded = before - kept.len(), "applied exclude patterns");
    kept
}
