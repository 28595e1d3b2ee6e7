//! Reading, decoding, encoding and writing region documents
//!
//! Documents are strict UTF-8 JSON. They are written back pretty-printed
//! with two-space indentation, non-ASCII text kept literal, and no trailing
//! newline. Numbers keep their original text, and nesting depth is not
//! limited by the parser.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Deserializer, Value};
use tempfile::NamedTempFile;

use crate::error::{Result, ScrubError};

/// Raw file contents alongside the decoded value.
#[derive(Debug, Clone)]
pub struct Document {
    pub text: String,
    pub value: Value,
}

/// Read and decode the document at `path`.
pub fn read_document(path: &Path) -> Result<Document> {
    let bytes = fs::read(path).map_err(|source| ScrubError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode(path, bytes)
}

/// Decode raw bytes as a UTF-8 JSON document. `path` is only used for errors.
pub fn decode(path: &Path, bytes: Vec<u8>) -> Result<Document> {
    let text = String::from_utf8(bytes).map_err(|source| ScrubError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_err = |source: serde_json::Error| ScrubError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut de = Deserializer::from_str(&text);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de).map_err(parse_err)?;
    de.end().map_err(parse_err)?;
    Ok(Document { text, value })
}

/// Encode a value the way documents are stored on disk.
pub fn encode(path: &Path, value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|source| ScrubError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the file at `path` with `contents`.
///
/// The text is written to a temporary file in the same directory and then
/// renamed over the original, so readers never observe a partial document.
/// Symlinks are resolved first so the link itself survives, and the original
/// file's permissions are carried over.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source: io::Error| ScrubError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = if path.is_symlink() {
        fs::canonicalize(path).map_err(write_err)?
    } else {
        path.to_path_buf()
    };
    let dir = parent_dir(&target);

    let mut tmp = NamedTempFile::new_in(&dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    if let Ok(metadata) = fs::metadata(&target) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(write_err)?;
    }
    tmp.persist(&target).map_err(|e| write_err(e.error))?;
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
