//! Reporting run results
//!
//! - `console` - one colored status line per file plus a tally
//! - `json` - a single pretty-printed summary once the run finishes

mod console;
mod json;

pub use console::ConsoleReporter;
pub use json::{JsonReporter, print_json};
