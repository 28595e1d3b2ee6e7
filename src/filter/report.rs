//! Accounting for what a filter pass removed

use std::fmt;
use std::ops::AddAssign;

use serde::Serialize;

use super::policy::DropReason;

/// Counts collected while filtering one or more documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    /// Object keys that survived
    pub kept_keys: usize,
    /// Object keys removed because they are on the deny list
    pub denied_keys: usize,
    /// Object keys removed because they are on neither list
    pub unlisted_keys: usize,
    /// Scalar elements removed from arrays
    pub pruned_scalars: usize,
}

impl FilterReport {
    pub fn record_drop(&mut self, reason: DropReason) {
        match reason {
            DropReason::Denied => self.denied_keys += 1,
            DropReason::NotAllowed => self.unlisted_keys += 1,
        }
    }

    pub fn dropped_keys(&self) -> usize {
        self.denied_keys + self.unlisted_keys
    }

    /// True when the pass removed nothing at all.
    pub fn is_clean(&self) -> bool {
        self.dropped_keys() == 0 && self.pruned_scalars == 0
    }
}

impl AddAssign for FilterReport {
    fn add_assign(&mut self, other: Self) {
        self.kept_keys += other.kept_keys;
        self.denied_keys += other.denied_keys;
        self.unlisted_keys += other.unlisted_keys;
        self.pruned_scalars += other.pruned_scalars;
    }
}

impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} kept, {} denied, {} unlisted, {} array scalars pruned",
            self.kept_keys, self.denied_keys, self.unlisted_keys, self.pruned_scalars
        )
    }
}

/// Location of a node inside a document, rendered as `$.towns[0].town`.
///
/// Segments are pushed and truncated as the filter descends and returns,
/// so a single buffer serves a whole document.
#[derive(Debug, Clone)]
pub(crate) struct NodePath {
    buf: String,
}

impl NodePath {
    pub(crate) fn root() -> Self {
        Self {
            buf: String::from("$"),
        }
    }

    /// Append an object key segment, returning the mark to truncate back to.
    pub(crate) fn push_key(&mut self, key: &str) -> usize {
        let mark = self.buf.len();
        self.buf.push('.');
        self.buf.push_str(key);
        mark
    }

    /// Append an array index segment, returning the mark to truncate back to.
    pub(crate) fn push_index(&mut self, index: usize) -> usize {
        let mark = self.buf.len();
        self.buf.push('[');
        self.buf.push_str(&index.to_string());
        self.buf.push(']');
        mark
    }

    pub(crate) fn truncate(&mut self, mark: usize) {
        self.buf.truncate(mark);
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_drop_by_reason() {
        let mut report = FilterReport::default();
        report.record_drop(DropReason::Denied);
        report.record_drop(DropReason::NotAllowed);
        report.record_drop(DropReason::NotAllowed);
        assert_eq!(report.denied_keys, 1);
        assert_eq!(report.unlisted_keys, 2);
        assert_eq!(report.dropped_keys(), 3);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_add_assign_sums_fields() {
        let mut total = FilterReport {
            kept_keys: 2,
            denied_keys: 1,
            unlisted_keys: 0,
            pruned_scalars: 3,
        };
        total += FilterReport {
            kept_keys: 5,
            denied_keys: 0,
            unlisted_keys: 4,
            pruned_scalars: 1,
        };
        assert_eq!(
            total,
            FilterReport {
                kept_keys: 7,
                denied_keys: 1,
                unlisted_keys: 4,
                pruned_scalars: 4,
            }
        );
    }

    #[test]
    fn test_node_path_push_and_truncate() {
        let mut path = NodePath::root();
        let outer = path.push_key("towns");
        let inner = path.push_index(2);
        path.push_key("zip_code");
        assert_eq!(path.to_string(), "$.towns[2].zip_code");
        path.truncate(inner);
        assert_eq!(path.to_string(), "$.towns");
        path.truncate(outer);
        assert_eq!(path.to_string(), "$");
    }
}
