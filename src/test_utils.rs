//! Test utilities for building temporary document folders.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

use crate::document::decode;

/// A temporary folder of JSON documents.
///
/// The folder is automatically cleaned up when dropped.
pub struct TestFolder {
    dir: TempDir,
}

impl TestFolder {
    /// Create a new empty temporary folder.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary folder.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file with raw contents.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, name: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(name);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write a value as a compact JSON document.
    pub fn add_document(&self, name: &str, value: &Value) -> PathBuf {
        let content = serde_json::to_string(value).expect("Failed to encode document");
        self.add_file(name, &content)
    }

    /// Read a file back as text.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Read a file back as a JSON value, with the same decoder the scrubber uses.
    pub fn read_json(&self, name: &str) -> Value {
        let bytes = self.read(name).into_bytes();
        decode(Path::new(name), bytes)
            .expect("Failed to parse file")
            .value
    }
}

impl Default for TestFolder {
    fn default() -> Self {
        Self::new()
    }
}

/// A province document with `towns` towns, each carrying sensitive fields.
pub fn sample_province(towns: usize) -> Value {
    let towns: Vec<Value> = (0..towns)
        .map(|i| {
            json!({
                "town": format!("Town {}", i),
                "slug": format!("town-{}", i),
                "mayor": "Hon. Juan dela Cruz",
                "vice_mayor": "Hon. Maria Clara",
                "contact": {"phone": "+63 2 8123 4567", "email": "lgu@example.ph"},
                "population": 25_000 + i,
                "zip_codes": ["2800", 2800, {"zip_code": "2800", "name": "Poblacion"}],
            })
        })
        .collect();

    json!({
        "province": "Abra",
        "slug": "abra",
        "name": "Province of Abra",
        "region": "CAR",
        "towns": towns,
    })
}
