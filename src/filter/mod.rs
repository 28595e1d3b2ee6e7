//! Document filtering
//!
//! This module decides which object keys survive in a region document:
//!
//! - `policy`: the allow/deny key sets and the per-key decision
//! - `tree`: `TreeFilter`, the recursive pass over a `serde_json::Value`
//! - `report`: counts of what a pass removed

mod policy;
mod report;
mod tree;

pub use policy::{DropReason, KeyDecision, KeyPolicy, REGION_ALLOWED_KEYS, REGION_DENIED_KEYS};
pub use report::FilterReport;
pub use tree::TreeFilter;
