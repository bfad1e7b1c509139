// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Static mapping between user-facing tool keys and tracker components.
//!
//! The catalog is loaded once at startup and never mutated. Reverse
//! lookups (`label_for`, `key_for`) are linear scans; the catalog is small
//! enough that an index would not pay for itself.
//!
//! If two entries reference the same tracker component, the reverse
//! lookups return the first entry in catalog order.

mod devtools;

use crate::error::{BugHuntError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One selectable tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub key: String,
    pub label: String,
    #[serde(rename = "components")]
    pub tracker_components: Vec<String>,
}

impl ComponentEntry {
    pub fn new(key: &str, label: &str, tracker_components: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            tracker_components: tracker_components.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn owns(&self, tracker_component: &str) -> bool {
        self.tracker_components.iter().any(|c| c == tracker_component)
    }
}

#[derive(Debug, Clone)]
pub struct ComponentCatalog {
    entries: Vec<ComponentEntry>,
}

impl ComponentCatalog {
    /// Build a catalog from custom entries, rejecting duplicate keys.
    pub fn from_entries(entries: Vec<ComponentEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.key.trim().is_empty() {
                return Err(BugHuntError::InvalidConfig(
                    "catalog entry with an empty key".to_string(),
                ));
            }
            if !seen.insert(entry.key.as_str()) {
                return Err(BugHuntError::InvalidConfig(format!(
                    "duplicate catalog key '{}'",
                    entry.key
                )));
            }
        }

        Ok(Self { entries })
    }

    /// The Firefox DevTools catalog.
    pub fn devtools() -> Self {
        Self {
            entries: devtools::entries(),
        }
    }

    pub fn entries(&self) -> &[ComponentEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ComponentEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Label of the entry owning `tracker_component`.
    pub fn label_for(&self, tracker_component: &str) -> Option<&str> {
        self.owner_of(tracker_component).map(|e| e.label.as_str())
    }

    /// Key of the entry owning `tracker_component`.
    pub fn key_for(&self, tracker_component: &str) -> Option<&str> {
        self.owner_of(tracker_component).map(|e| e.key.as_str())
    }

    /// All keys in catalog order.
    pub fn all_keys(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key.as_str()).collect()
    }

    /// All keys ordered by label. Ties keep catalog order.
    pub fn keys_sorted_by_label(&self) -> Vec<&str> {
        let mut entries: Vec<&ComponentEntry> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.label.cmp(&b.label));
        entries.into_iter().map(|e| e.key.as_str()).collect()
    }

    /// Concatenate the tracker components of `keys`, in the order given.
    ///
    /// Unknown keys are skipped and duplicates are kept.
    pub fn tracker_components_for<S: AsRef<str>>(&self, keys: &[S]) -> Vec<String> {
        keys.iter()
            .filter_map(|k| self.get(k.as_ref()))
            .flat_map(|e| e.tracker_components.iter().cloned())
            .collect()
    }

    /// Fail with `UnknownTool` for the first key missing from the catalog.
    pub fn validate_keys<S: AsRef<str>>(&self, keys: &[S]) -> Result<()> {
        match keys.iter().find(|k| !self.contains_key(k.as_ref())) {
            Some(missing) => Err(BugHuntError::UnknownTool {
                key: missing.as_ref().to_string(),
                available: self.all_keys().iter().map(|k| k.to_string()).collect(),
            }),
            None => Ok(()),
        }
    }

    fn owner_of(&self, tracker_component: &str) -> Option<&ComponentEntry> {
        self.entries.iter().find(|e| e.owns(tracker_component))
    }
}

impl Default for ComponentCatalog {
    fn default() -> Self {
        Self::devtools()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> ComponentCatalog {
        ComponentCatalog::from_entries(vec![
            ComponentEntry::new("zeta", "Zeta", &["Product: Zeta"]),
            ComponentEntry::new("alpha", "Alpha", &["Product: Alpha", "Product: Shared"]),
            ComponentEntry::new("beta", "Alpha", &["Product: Beta", "Product: Shared"]),
            ComponentEntry::new("lower", "alpha", &["Product: Lower"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_label_and_key_lookup() {
        let catalog = ComponentCatalog::devtools();
        assert_eq!(
            catalog.label_for("Developer Tools: Inspector"),
            Some("Inspector")
        );
        assert_eq!(
            catalog.key_for("Developer Tools: Netmonitor"),
            Some("network")
        );
        assert_eq!(catalog.key_for("Developer Tools: Memory"), Some("perf"));
    }

    #[test]
    fn test_lookup_not_found() {
        let catalog = ComponentCatalog::devtools();
        assert_eq!(catalog.label_for("Core: DOM"), None);
        assert_eq!(catalog.key_for("developer tools: inspector"), None);
    }

    #[test]
    fn test_shared_component_resolves_to_first_entry() {
        let catalog = small_catalog();
        assert_eq!(catalog.key_for("Product: Shared"), Some("alpha"));
    }

    #[test]
    fn test_all_keys_in_insertion_order() {
        let catalog = small_catalog();
        assert_eq!(catalog.all_keys(), vec!["zeta", "alpha", "beta", "lower"]);
    }

    #[test]
    fn test_keys_sorted_by_label_is_stable_and_case_sensitive() {
        let catalog = small_catalog();
        // "Alpha" ties keep catalog order; uppercase sorts before lowercase
        assert_eq!(
            catalog.keys_sorted_by_label(),
            vec!["alpha", "beta", "zeta", "lower"]
        );
    }

    #[test]
    fn test_tracker_components_keep_order_and_duplicates() {
        let catalog = small_catalog();
        let components = catalog.tracker_components_for(&["beta", "missing", "alpha"]);
        assert_eq!(
            components,
            vec![
                "Product: Beta",
                "Product: Shared",
                "Product: Alpha",
                "Product: Shared"
            ]
        );
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let result = ComponentCatalog::from_entries(vec![
            ComponentEntry::new("a", "A", &["X"]),
            ComponentEntry::new("a", "B", &["Y"]),
        ]);
        assert!(matches!(result, Err(BugHuntError::InvalidConfig(msg)) if msg.contains("'a'")));
    }

    #[test]
    fn test_validate_keys_reports_unknown_tool() {
        let catalog = ComponentCatalog::devtools();
        assert!(catalog.validate_keys(&["inspector", "console"]).is_ok());

        match catalog.validate_keys(&["inspector", "nope"]) {
            Err(BugHuntError::UnknownTool { key, available }) => {
                assert_eq!(key, "nope");
                assert_eq!(available.len(), catalog.len());
            }
            other => panic!("expected UnknownTool, got {other:?}"),
        }
    }
}
