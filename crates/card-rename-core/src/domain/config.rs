//! Rename configuration domain entities.
//!
//! A [`Configuration`] is the whole persisted document: one [`BatchRule`]
//! plus a [`RenameTable`] of per-card overrides.  These types know how to
//! (de)serialize themselves with `serde` but never touch the file system;
//! reading and writing files is the host crate's job.
//!
//! # Lenient reading (for beginners)
//!
//! The file is meant to be edited by hand, so reading is forgiving:
//!
//! - A missing `batch_rules` or `renames` key falls back to its default.
//! - An explicit `null` anywhere a value is expected also falls back to the
//!   default (`#[serde(deserialize_with = "null_as_default")]`).
//! - Rename entries whose target is `null` or `""` are dropped on read, so an
//!   in-memory [`RenameTable`] never holds an empty target.
//! - Unknown keys are ignored (serde's default behaviour).

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Suffix shipped in the generated example file (batch rule disabled).
pub const EXAMPLE_SUFFIX: &str = "打击";

/// Rename entries shipped in the generated example file.
pub const EXAMPLE_RENAMES: &[(&str, &str)] = &[
    ("Perfected Strike", "完美打击"),
    ("Strike_R", "打击"),
    ("Defend_R", "防御"),
];

/// Deserializes `null` as `T::default()` instead of failing.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ── BatchRule ─────────────────────────────────────────────────────────────────

/// Global prefix/suffix transform applied to cards without a specific override.
///
/// An enabled rule with an empty prefix and suffix is legal; it simply never
/// changes a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRule {
    /// Whether the transform is active at all.
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: bool,
    /// Text prepended to the original name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub prefix: String,
    /// Text appended to the original name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub suffix: String,
}

impl BatchRule {
    /// Applies the rule to `original_name`.
    ///
    /// Returns `None` when the rule is disabled or when the decorated name is
    /// identical to the original (empty prefix and suffix).
    pub fn apply(&self, original_name: &str) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let candidate = format!("{}{}{}", self.prefix, original_name, self.suffix);
        (candidate != original_name).then_some(candidate)
    }
}

// ── RenameTable ───────────────────────────────────────────────────────────────

/// Per-card overrides keyed by card ID or by original display name.
///
/// Backed by a `BTreeMap` so the persisted file lists keys in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenameTable {
    entries: BTreeMap<String, String>,
}

impl RenameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the override for `key`, ignoring empty targets.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Inserts or overwrites an entry.  An empty `name` removes the key
    /// instead, keeping the "no empty targets" invariant.
    pub fn insert(&mut self, key: impl Into<String>, name: impl Into<String>) {
        let key = key.into();
        let name = name.into();
        if name.is_empty() {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, name);
        }
    }

    /// Removes `key`, returning the previous target if there was one.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RenameTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = RenameTable::new();
        for (key, name) in iter {
            table.insert(key, name);
        }
        table
    }
}

impl<'de> Deserialize<'de> for RenameTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Option<String>>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, name)| name.map(|name| (key, name)))
            .collect())
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// Root of the persisted rename document.
///
/// `Configuration::default()` is the empty configuration (batch disabled, no
/// renames) and is what a host falls back to when storage is unusable.
/// [`Configuration::example`] is the annotated starter file written on first
/// run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(
        rename = "batch_rules",
        default,
        deserialize_with = "null_as_default"
    )]
    pub batch_rule: BatchRule,
    #[serde(default, deserialize_with = "null_as_default")]
    pub renames: RenameTable,
}

impl Configuration {
    /// Builds the example configuration written when no file exists yet.
    ///
    /// It documents the file format for users; resolution never depends on
    /// these particular entries.
    pub fn example() -> Self {
        Self {
            batch_rule: BatchRule {
                enabled: false,
                prefix: String::new(),
                suffix: EXAMPLE_SUFFIX.to_string(),
            },
            renames: EXAMPLE_RENAMES.iter().copied().collect(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(enabled: bool, prefix: &str, suffix: &str) -> BatchRule {
        BatchRule {
            enabled,
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }

    // ── BatchRule ─────────────────────────────────────────────────────────────

    #[test]
    fn test_batch_rule_disabled_never_applies() {
        assert_eq!(rule(false, "铁壁", "+").apply("Defend"), None);
    }

    #[test]
    fn test_batch_rule_applies_prefix_and_suffix() {
        assert_eq!(
            rule(true, "[", "]").apply("Defend"),
            Some("[Defend]".to_string())
        );
    }

    #[test]
    fn test_batch_rule_with_empty_affixes_is_noop() {
        assert_eq!(rule(true, "", "").apply("Defend"), None);
    }

    #[test]
    fn test_batch_rule_default_is_disabled_and_empty() {
        let r = BatchRule::default();
        assert!(!r.enabled);
        assert!(r.prefix.is_empty());
        assert!(r.suffix.is_empty());
    }

    // ── RenameTable ───────────────────────────────────────────────────────────

    #[test]
    fn test_rename_table_insert_and_get() {
        let mut table = RenameTable::new();
        table.insert("Strike_R", "打击");
        assert_eq!(table.get("Strike_R"), Some("打击"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_rename_table_insert_empty_removes_key() {
        let mut table = RenameTable::new();
        table.insert("Strike_R", "打击");
        table.insert("Strike_R", "");
        assert!(!table.contains_key("Strike_R"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_rename_table_remove_returns_previous_target() {
        let mut table: RenameTable = [("Defend_R", "防御")].into_iter().collect();
        assert_eq!(table.remove("Defend_R"), Some("防御".to_string()));
        assert_eq!(table.remove("Defend_R"), None);
    }

    #[test]
    fn test_rename_table_iterates_in_key_order() {
        let table: RenameTable = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rename_table_deserialize_drops_null_and_empty_targets() {
        // Arrange
        let json = r#"{ "Strike_R": "打击", "Bash": null, "Defend_R": "" }"#;

        // Act
        let table: RenameTable = serde_json::from_str(json).expect("deserialize");

        // Assert
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Strike_R"), Some("打击"));
        assert!(!table.contains_key("Bash"));
        assert!(!table.contains_key("Defend_R"));
    }

    // ── Configuration ─────────────────────────────────────────────────────────

    #[test]
    fn test_configuration_default_is_empty() {
        let cfg = Configuration::default();
        assert!(!cfg.batch_rule.enabled);
        assert!(cfg.renames.is_empty());
    }

    #[test]
    fn test_configuration_example_has_disabled_batch_and_sample_entries() {
        let cfg = Configuration::example();
        assert!(!cfg.batch_rule.enabled);
        assert_eq!(cfg.batch_rule.suffix, "打击");
        assert_eq!(cfg.renames.len(), 3);
        assert_eq!(cfg.renames.get("Perfected Strike"), Some("完美打击"));
        assert_eq!(cfg.renames.get("Defend_R"), Some("防御"));
    }

    #[test]
    fn test_configuration_missing_sections_use_defaults() {
        let cfg: Configuration = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(cfg, Configuration::default());
    }

    #[test]
    fn test_configuration_null_sections_use_defaults() {
        let json = r#"{ "batch_rules": null, "renames": null }"#;
        let cfg: Configuration = serde_json::from_str(json).expect("deserialize");
        assert_eq!(cfg, Configuration::default());
    }

    #[test]
    fn test_configuration_partial_batch_rule_keeps_field_defaults() {
        // Arrange: only `enabled` and a null prefix are present
        let json = r#"{ "batch_rules": { "enabled": true, "prefix": null } }"#;

        // Act
        let cfg: Configuration = serde_json::from_str(json).expect("deserialize");

        // Assert
        assert!(cfg.batch_rule.enabled);
        assert_eq!(cfg.batch_rule.prefix, "");
        assert_eq!(cfg.batch_rule.suffix, "");
    }

    #[test]
    fn test_configuration_ignores_unknown_fields() {
        let json = r#"{ "version": 3, "renames": { "Bash": "痛击" }, "extra": [1, 2] }"#;
        let cfg: Configuration = serde_json::from_str(json).expect("deserialize");
        assert_eq!(cfg.renames.get("Bash"), Some("痛击"));
    }

    #[test]
    fn test_configuration_serializes_batch_rule_under_batch_rules_key() {
        let json = serde_json::to_value(Configuration::example()).expect("serialize");
        assert_eq!(json["batch_rules"]["suffix"], "打击");
        assert_eq!(json["renames"]["Strike_R"], "打击");
        assert!(json.get("batch_rule").is_none());
    }
}
