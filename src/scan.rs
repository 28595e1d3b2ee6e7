//! Listing the JSON documents in a folder

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::{Result, ScrubError};

/// Check whether a file name carries a `.json` suffix, ignoring case.
pub fn is_json_file_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".json")
}

/// Check if a file name matches any ignore pattern, either exactly or as a glob.
pub fn should_ignore_name(name: &str, ignore_patterns: &[String]) -> bool {
    ignore_patterns
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// List the JSON files directly inside `folder`, sorted by file name.
///
/// Subdirectories are not descended into. Entries that cannot be inspected
/// are skipped.
pub fn list_json_files(folder: &Path, ignore_patterns: &[String]) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(folder).map_err(|source| ScrubError::ListDir {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|a| a.file_name());

    let files = entries
        .into_iter()
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            is_json_file_name(&name) && !should_ignore_name(&name, ignore_patterns)
        })
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();

    Ok(files)
}
