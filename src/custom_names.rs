// Redact Engine - Custom Name Registry
//
// A caller-supplied set of names to match verbatim (case-insensitively) on
// top of the heuristic finders. Owned by a single `Recognizer`; concurrent
// recognizers each hold their own.

use std::collections::BTreeSet;

/// Normalized, deduplicated set of caller-supplied names.
#[derive(Debug, Clone, Default)]
pub struct CustomNameRegistry {
    names: BTreeSet<String>,
}

impl CustomNameRegistry {
    pub fn new() -> Self {
        CustomNameRegistry::default()
    }

    /// Replace the registry contents. Each name is trimmed and lowercased;
    /// empty entries are dropped, duplicates are deduplicated by virtue of
    /// the underlying set.
    pub fn set(&mut self, names: impl IntoIterator<Item = impl Into<String>>) {
        self.names = names
            .into_iter()
            .map(|n| n.into().trim().to_lowercase())
            .filter(|n| !n.is_empty())
            .collect();
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate names in a stable (sorted) order so finder output is
    /// deterministic across runs.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }
}
