//! Test harness for regionscrub integration tests

use std::path::Path;
use std::process::Command;

pub use regionscrub::test_utils::{TestFolder, sample_province};

/// Run the binary against `folder` with extra arguments.
///
/// Returns (stdout, stderr, success).
pub fn run_scrub(folder: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_regionscrub");
    let output = Command::new(binary)
        .arg(folder)
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run regionscrub");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let folder = TestFolder::new();
        assert!(folder.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let folder = TestFolder::new();
        let path = folder.add_file("abra.json", "{}");
        assert!(path.exists());
    }
}
