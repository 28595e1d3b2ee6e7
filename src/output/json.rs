//! JSON output formatting

use std::io;

use crate::scrub::{FileSummary, RunSummary, ScrubOutput};

/// Print the run summary as pretty-printed JSON to stdout.
pub fn print_json(summary: &RunSummary) -> io::Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

/// Stays silent per file and prints the whole summary at the end.
#[derive(Debug, Default)]
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ScrubOutput for JsonReporter {
    fn file_done(&mut self, _file: &FileSummary) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> io::Result<()> {
        print_json(summary)
    }
}
