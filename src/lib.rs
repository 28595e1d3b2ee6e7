//! regionscrub - strip sensitive and unlisted fields from region JSON documents

pub mod document;
pub mod error;
pub mod filter;
pub mod output;
pub mod scan;
pub mod scrub;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use document::{Document, decode, encode, read_document, write_document};
pub use error::{Result, ScrubError};
pub use filter::{DropReason, FilterReport, KeyDecision, KeyPolicy, TreeFilter};
pub use output::{ConsoleReporter, JsonReporter, print_json};
pub use scan::list_json_files;
pub use scrub::{
    DEFAULT_FOLDER, FileStatus, FileSummary, RunSummary, ScrubConfig, ScrubOutput, Scrubber,
};
