//! Key policy: which object keys survive filtering

use std::collections::HashSet;
use std::fmt;

/// Keys permitted to survive at any nesting depth.
pub const REGION_ALLOWED_KEYS: &[&str] = &[
    "slug",
    "province",
    "provinces",
    "town",
    "towns",
    "city",
    "cities",
    "municipality",
    "municipalities",
    "zip_code",
    "zip_codes",
];

/// Keys that are always removed, even if also allowed.
pub const REGION_DENIED_KEYS: &[&str] = &["mayor", "vice_mayor", "name", "contact"];

/// Why a key was removed from an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Key is on the deny list
    Denied,
    /// Key is on neither list (default-deny)
    NotAllowed,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::Denied => f.write_str("denied"),
            DropReason::NotAllowed => f.write_str("not allowed"),
        }
    }
}

/// Outcome of checking a single key against the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDecision {
    Keep,
    Drop(DropReason),
}

/// Immutable allow/deny key sets.
///
/// Matching is exact and case-sensitive. The deny list is consulted first,
/// so a key present in both sets is always dropped.
#[derive(Debug, Clone, Default)]
pub struct KeyPolicy {
    allow: HashSet<String>,
    deny: HashSet<String>,
}

impl KeyPolicy {
    pub fn new<A, D>(allow: A, deny: D) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            allow: allow.into_iter().map(Into::into).collect(),
            deny: deny.into_iter().map(Into::into).collect(),
        }
    }

    /// The policy used for province/town/city/zip region documents.
    pub fn regions() -> Self {
        Self::new(
            REGION_ALLOWED_KEYS.iter().copied(),
            REGION_DENIED_KEYS.iter().copied(),
        )
    }

    pub fn decide(&self, key: &str) -> KeyDecision {
        if self.deny.contains(key) {
            KeyDecision::Drop(DropReason::Denied)
        } else if self.allow.contains(key) {
            KeyDecision::Keep
        } else {
            KeyDecision::Drop(DropReason::NotAllowed)
        }
    }

    pub fn is_kept(&self, key: &str) -> bool {
        self.decide(key) == KeyDecision::Keep
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_allowed_keys_kept() {
        let policy = KeyPolicy::regions();
        for key in REGION_ALLOWED_KEYS {
            assert!(policy.is_kept(key), "{} should be kept", key);
        }
    }

    #[test]
    fn test_region_denied_keys_dropped() {
        let policy = KeyPolicy::regions();
        for key in REGION_DENIED_KEYS {
            assert_eq!(
                policy.decide(key),
                KeyDecision::Drop(DropReason::Denied),
                "{} should be denied",
                key
            );
        }
    }

    #[test]
    fn test_unlisted_key_is_not_allowed() {
        let policy = KeyPolicy::regions();
        assert_eq!(
            policy.decide("population"),
            KeyDecision::Drop(DropReason::NotAllowed)
        );
    }

    #[test]
    fn test_deny_wins_over_allow() {
        let policy = KeyPolicy::new(["slug", "name"], ["name"]);
        assert!(policy.is_kept("slug"));
        assert_eq!(policy.decide("name"), KeyDecision::Drop(DropReason::Denied));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let policy = KeyPolicy::regions();
        assert!(!policy.is_kept("Province"));
        assert!(!policy.is_kept("SLUG"));
        assert!(!policy.is_kept(" slug"));
        // Case variants of denied keys are unlisted, not denied
        assert_eq!(
            policy.decide("Mayor"),
            KeyDecision::Drop(DropReason::NotAllowed)
        );
    }

    #[test]
    fn test_empty_policy_drops_everything() {
        let policy = KeyPolicy::default();
        assert!(!policy.is_kept("slug"));
    }

    #[test]
    fn test_drop_reason_display() {
        assert_eq!(DropReason::Denied.to_string(), "denied");
        assert_eq!(DropReason::NotAllowed.to_string(), "not allowed");
    }
}
