//! Answer storage for a wizard session.
//!
//! The store is mutated only through the recording functions below, and each
//! update produces a fresh store (copy-on-write). Reads hand out snapshots,
//! never the live store.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Group used when a checkbox notification arrives without a group name.
pub const UNKNOWN_GROUP: &str = "unknown_group";

/// One recorded answer: the set of checked ids for a checkbox group, or the
/// raw value of a text-like field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AnswerValue {
    Selections(BTreeSet<String>),
    Text(String),
}

/// All answers collected so far, keyed by group name or field id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerStore {
    entries: BTreeMap<String, AnswerValue>,
}

impl AnswerStore {
    /// The value of a text-like field, when one was recorded under `field_id`.
    pub fn text(&self, field_id: &str) -> Option<&str> {
        match self.entries.get(field_id) {
            Some(AnswerValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// The checked ids of `group`, when any toggle was recorded for it.
    pub fn selections(&self, group: &str) -> Option<&BTreeSet<String>> {
        match self.entries.get(group) {
            Some(AnswerValue::Selections(set)) => Some(set),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Owns the session's answer store and applies input-change notifications in
/// arrival order.
#[derive(Debug, Default)]
pub struct StateManager {
    store: AnswerStore,
}

impl StateManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a checkbox toggle. Checking inserts `field_id` into the
    /// group's set alongside existing entries; unchecking removes only that
    /// id. A text answer squatting on the group key is displaced.
    pub fn record_checkbox_change(&mut self, field_id: &str, group: Option<&str>, checked: bool) {
        let group = group.unwrap_or(UNKNOWN_GROUP);
        let mut next = self.store.clone();
        let entry = next
            .entries
            .entry(group.to_string())
            .or_insert_with(|| AnswerValue::Selections(BTreeSet::new()));
        if !matches!(entry, AnswerValue::Selections(_)) {
            *entry = AnswerValue::Selections(BTreeSet::new());
        }
        if let AnswerValue::Selections(set) = entry {
            if checked {
                set.insert(field_id.to_string());
            } else {
                set.remove(field_id);
            }
        }
        self.store = next;
    }

    /// Overwrites the top-level entry for `field_id`, leaving every other
    /// entry untouched.
    pub fn record_text_change(&mut self, field_id: &str, value: &str) {
        let mut next = self.store.clone();
        next.entries
            .insert(field_id.to_string(), AnswerValue::Text(value.to_string()));
        self.store = next;
    }

    /// Snapshot of the current answers.
    pub fn state(&self) -> AnswerStore {
        self.store.clone()
    }

    pub(crate) fn store(&self) -> &AnswerStore {
        &self.store
    }

    /// Discards all recorded answers.
    pub fn clear(&mut self) {
        self.store = AnswerStore::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_toggle_wins_for_a_field() {
        let mut manager = StateManager::new();
        manager.record_checkbox_change("beaches", Some("trip_styles"), true);
        manager.record_checkbox_change("beaches", Some("trip_styles"), false);
        manager.record_checkbox_change("beaches", Some("trip_styles"), true);

        let state = manager.state();
        assert!(state.selections("trip_styles").unwrap().contains("beaches"));
    }

    #[test]
    fn unchecking_leaves_other_fields_alone() {
        let mut manager = StateManager::new();
        manager.record_checkbox_change("beaches", Some("trip_styles"), true);
        manager.record_checkbox_change("hiking", Some("trip_styles"), true);
        manager.record_checkbox_change("beaches", Some("trip_styles"), false);

        let state = manager.state();
        let selected = state.selections("trip_styles").unwrap();
        assert!(!selected.contains("beaches"));
        assert!(selected.contains("hiking"));
    }

    #[test]
    fn unchecking_an_absent_field_is_a_no_op() {
        let mut manager = StateManager::new();
        manager.record_checkbox_change("ski", Some("trip_styles"), false);
        assert!(manager.state().selections("trip_styles").unwrap().is_empty());
    }

    #[test]
    fn missing_group_falls_back_to_sentinel() {
        let mut manager = StateManager::new();
        manager.record_checkbox_change("mystery", None, true);
        assert!(manager
            .state()
            .selections(UNKNOWN_GROUP)
            .unwrap()
            .contains("mystery"));
    }

    #[test]
    fn text_change_replaces_only_its_entry() {
        let mut manager = StateManager::new();
        manager.record_text_change("from_date", "2026-01-01");
        manager.record_text_change("to_date", "2026-01-08");
        manager.record_text_change("from_date", "2026-02-01");

        let state = manager.state();
        assert_eq!(state.text("from_date"), Some("2026-02-01"));
        assert_eq!(state.text("to_date"), Some("2026-01-08"));
    }

    #[test]
    fn snapshots_do_not_alias_the_live_store() {
        let mut manager = StateManager::new();
        manager.record_text_change("from_date", "2026-01-01");
        let before = manager.state();
        manager.record_text_change("from_date", "2026-03-01");

        assert_eq!(before.text("from_date"), Some("2026-01-01"));
        assert_eq!(manager.state().text("from_date"), Some("2026-03-01"));
    }
}
