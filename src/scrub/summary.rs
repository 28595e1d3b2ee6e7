//! Per-file results and the run tally

use std::path::PathBuf;

use serde::Serialize;

use crate::filter::FilterReport;

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Filtered and written back (or would be, in a dry run)
    Cleaned,
    /// Filtering produced the exact bytes already on disk
    Unchanged,
    /// Reading, decoding or writing failed
    Skipped,
}

/// Result for one file, in processing order.
#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    pub file: String,
    pub path: PathBuf,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<FilterReport>,
}

/// Aggregate outcome of scrubbing a folder.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub folder: PathBuf,
    pub dry_run: bool,
    pub cleaned: usize,
    pub unchanged: usize,
    pub skipped: usize,
    /// Filter counts summed over every successfully processed file
    pub totals: FilterReport,
    pub files: Vec<FileSummary>,
}

impl RunSummary {
    pub fn new(folder: PathBuf, dry_run: bool) -> Self {
        Self {
            folder,
            dry_run,
            ..Default::default()
        }
    }

    pub fn record(&mut self, file: FileSummary) {
        match file.status {
            FileStatus::Cleaned => self.cleaned += 1,
            FileStatus::Unchanged => self.unchanged += 1,
            FileStatus::Skipped => self.skipped += 1,
        }
        if let Some(report) = file.report {
            self.totals += report;
        }
        self.files.push(file);
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }

    /// True when no file was skipped.
    pub fn is_success(&self) -> bool {
        self.skipped == 0
    }
}
