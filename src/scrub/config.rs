//! Configuration for a scrub run

use std::path::PathBuf;

/// Folder cleaned when none is given on the command line.
pub const DEFAULT_FOLDER: &str = "src/renderer/src/data/lgu";

/// Configuration for scrubbing a folder of documents.
#[derive(Debug, Clone)]
pub struct ScrubConfig {
    pub folder: PathBuf,
    /// Filter and report without writing any file
    pub dry_run: bool,
    /// File names or glob patterns to leave untouched
    pub ignore_patterns: Vec<String>,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from(DEFAULT_FOLDER),
            dry_run: false,
            ignore_patterns: Vec::new(),
        }
    }
}
