//! Error types for reading, cleaning and writing documents
//!
//! Messages describe the failure only; callers pair them with the file name
//! from [`ScrubError::path`] when reporting.

use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrubError {
    #[error("cannot list directory: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not valid UTF-8: {source}")]
    Encoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("invalid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode JSON: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot write file: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

impl ScrubError {
    /// Path of the file or folder the error is attributed to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ScrubError::ListDir { path, .. }
            | ScrubError::Read { path, .. }
            | ScrubError::Encoding { path, .. }
            | ScrubError::Parse { path, .. }
            | ScrubError::Encode { path, .. }
            | ScrubError::Write { path, .. } => Some(path.as_path()),
            ScrubError::Output(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrubError>;
