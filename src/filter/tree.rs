//! TreeFilter - recursive key filtering over JSON values

use serde_json::{Map, Value};
use tracing::debug;

use super::policy::{KeyDecision, KeyPolicy};
use super::report::{FilterReport, NodePath};

/// Rebuilds a JSON value keeping only the object keys a [`KeyPolicy`] allows.
///
/// The same rules apply at every depth, including the root:
/// - objects keep allowed keys in their original order, possibly ending up empty
/// - arrays keep only object and array elements, in order
/// - scalars pass through unchanged
pub struct TreeFilter<'a> {
    policy: &'a KeyPolicy,
}

impl<'a> TreeFilter<'a> {
    pub fn new(policy: &'a KeyPolicy) -> Self {
        Self { policy }
    }

    pub fn filter(&self, node: Value) -> Value {
        self.filter_with_report(node).0
    }

    /// Filter a value and count what was removed.
    ///
    /// Each removal is also emitted as a `debug` event carrying its path.
    pub fn filter_with_report(&self, node: Value) -> (Value, FilterReport) {
        let mut report = FilterReport::default();
        let mut path = NodePath::root();
        let filtered = self.filter_node(node, &mut path, &mut report);
        (filtered, report)
    }

    fn filter_node(&self, node: Value, path: &mut NodePath, report: &mut FilterReport) -> Value {
        match node {
            Value::Object(map) => {
                let mut kept = Map::new();
                for (key, value) in map {
                    match self.policy.decide(&key) {
                        KeyDecision::Keep => {
                            report.kept_keys += 1;
                            let mark = path.push_key(&key);
                            let value = self.filter_node(value, path, report);
                            path.truncate(mark);
                            kept.insert(key, value);
                        }
                        KeyDecision::Drop(reason) => {
                            report.record_drop(reason);
                            debug!(path = %path, key = %key, %reason, "dropped key");
                        }
                    }
                }
                Value::Object(kept)
            }
            Value::Array(items) => {
                let mut kept = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    if item.is_object() || item.is_array() {
                        let mark = path.push_index(index);
                        kept.push(self.filter_node(item, path, report));
                        path.truncate(mark);
                    } else {
                        report.pruned_scalars += 1;
                        debug!(path = %path, index, "pruned scalar array element");
                    }
                }
                Value::Array(kept)
            }
            scalar => scalar,
        }
    }
}
