//! Scrubbing a folder of region documents in place
//!
//! A run lists the JSON files in the configured folder and processes them one
//! at a time: read, decode, filter, encode, write back. A failure in one file
//! is recorded and reported, and the run moves on to the next file.

mod config;
mod summary;

use std::path::Path;

use tracing::{debug, debug_span, warn};

use crate::document::{encode, read_document, write_document};
use crate::error::Result;
use crate::filter::{FilterReport, KeyPolicy, TreeFilter};
use crate::scan::list_json_files;

pub use config::{DEFAULT_FOLDER, ScrubConfig};
pub use summary::{FileStatus, FileSummary, RunSummary};

/// Trait for receiving results as a run progresses.
pub trait ScrubOutput {
    /// Called once per file, in processing order.
    fn file_done(&mut self, file: &FileSummary) -> std::io::Result<()>;

    /// Called after the last file has been processed.
    fn finish(&mut self, summary: &RunSummary) -> std::io::Result<()>;
}

/// Applies a [`KeyPolicy`] to every document in a folder.
pub struct Scrubber {
    config: ScrubConfig,
    policy: KeyPolicy,
}

impl Scrubber {
    pub fn new(config: ScrubConfig, policy: KeyPolicy) -> Self {
        Self { config, policy }
    }

    /// Process every document in the folder, reporting each to `output`.
    ///
    /// Only a folder that cannot be listed, or an output that cannot be
    /// written, ends the run early. Per-file failures land in the summary.
    pub fn run<O: ScrubOutput>(&self, output: &mut O) -> Result<RunSummary> {
        let files = list_json_files(&self.config.folder, &self.config.ignore_patterns)?;
        debug!(folder = %self.config.folder.display(), count = files.len(), "listed documents");

        let mut summary = RunSummary::new(self.config.folder.clone(), self.config.dry_run);
        for path in files {
            let file = self.scrub_file(&path);
            output.file_done(&file)?;
            summary.record(file);
        }

        output.finish(&summary)?;
        Ok(summary)
    }

    /// Process a single document, turning any failure into a skipped result.
    pub fn scrub_file(&self, path: &Path) -> FileSummary {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let _span = debug_span!("document", file = %file).entered();

        match self.process(path) {
            Ok((status, report)) => {
                debug!(?status, %report, "processed");
                FileSummary {
                    file,
                    path: path.to_path_buf(),
                    status,
                    error: None,
                    report: Some(report),
                }
            }
            Err(e) => {
                warn!(error = %e, "skipped");
                FileSummary {
                    file,
                    path: path.to_path_buf(),
                    status: FileStatus::Skipped,
                    error: Some(e.to_string()),
                    report: None,
                }
            }
        }
    }

    fn process(&self, path: &Path) -> Result<(FileStatus, FilterReport)> {
        let document = read_document(path)?;
        let (cleaned, report) = TreeFilter::new(&self.policy).filter_with_report(document.value);
        let encoded = encode(path, &cleaned)?;

        if encoded == document.text {
            return Ok((FileStatus::Unchanged, report));
        }
        if !self.config.dry_run {
            write_document(path, &encoded)?;
        }
        Ok((FileStatus::Cleaned, report))
    }
}
