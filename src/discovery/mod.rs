//! Source file discovery

pub mod filter;

use crate::error::{DiscoveryError, DiscoveryResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find every file under `base_dir` (recursively) whose name ends with one of
/// `suffixes`. Results are sorted so repeated runs produce the same order.
///
/// A missing base directory is an error rather than an empty result.
pub fn find_source_files(base_dir: &Path, suffixes: &[&str]) -> DiscoveryResult<Vec<PathBuf>> {
    if !base_dir.is_dir() {
        return Err(DiscoveryError::missing_directory(base_dir.to_path_buf()));
    }

    let mut source_files = Vec::new();

    for entry in WalkDir::new(base_dir) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(base_dir).to_path_buf();
            DiscoveryError::new(format!("failed to read entry ({})", e), path)
        })?;
        let path = entry.path();
        if filter::has_accepted_suffix(path, suffixes) {
            source_files.push(path.to_path_buf());
        }
    }

    source_files.sort();
    tracing::debug!(
        base = %base_dir.display(),
        count = source_files.len(),
        "discovered source files"
    );

    Ok(source_files)
}
