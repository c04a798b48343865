//! Per-step validation predicates evaluated against the answer store.
//!
//! Each step declares its own rule; nothing is inferred from which fields
//! happen to be present in the rendered markup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::AnswerStore;

/// User-facing, recoverable validation failure. Blocks a step transition
/// without touching state or cursor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationFailure {
    pub message: String,
}

impl ValidationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Declarative validation rule attached to a step. Presence checks only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum StepValidation {
    #[default]
    None,
    /// Both date fields must hold a non-empty value.
    DateRange {
        from_field: String,
        to_field: String,
    },
    /// At least one box in the group must be checked.
    RequireChecked { group: String },
}

impl StepValidation {
    pub fn check(&self, store: &AnswerStore) -> Result<(), ValidationFailure> {
        match self {
            StepValidation::None => Ok(()),
            StepValidation::DateRange {
                from_field,
                to_field,
            } => {
                let filled = |field: &str| {
                    store
                        .text(field)
                        .map(|value| !value.trim().is_empty())
                        .unwrap_or(false)
                };
                if filled(from_field) && filled(to_field) {
                    Ok(())
                } else {
                    Err(ValidationFailure::new("You must choose date range!"))
                }
            }
            StepValidation::RequireChecked { group } => {
                let any_checked = store
                    .selections(group)
                    .map(|set| !set.is_empty())
                    .unwrap_or(false);
                if any_checked {
                    Ok(())
                } else {
                    Err(ValidationFailure::new(
                        "You must check at least one checkbox!",
                    ))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateManager;

    fn date_rule() -> StepValidation {
        StepValidation::DateRange {
            from_field: "from_date".into(),
            to_field: "to_date".into(),
        }
    }

    #[test]
    fn date_range_requires_both_fields() {
        let mut manager = StateManager::new();
        let rule = date_rule();

        assert!(rule.check(&manager.state()).is_err());

        manager.record_text_change("from_date", "2026-05-01");
        assert!(rule.check(&manager.state()).is_err());

        manager.record_text_change("to_date", "2026-05-08");
        assert!(rule.check(&manager.state()).is_ok());
    }

    #[test]
    fn whitespace_only_dates_do_not_pass() {
        let mut manager = StateManager::new();
        manager.record_text_change("from_date", "   ");
        manager.record_text_change("to_date", "2026-05-08");
        assert!(date_rule().check(&manager.state()).is_err());
    }

    #[test]
    fn require_checked_needs_one_selection() {
        let mut manager = StateManager::new();
        let rule = StepValidation::RequireChecked {
            group: "trip_styles".into(),
        };

        let err = rule.check(&manager.state()).unwrap_err();
        assert_eq!(err.message, "You must check at least one checkbox!");

        manager.record_checkbox_change("beaches", Some("trip_styles"), true);
        assert!(rule.check(&manager.state()).is_ok());
    }

    #[test]
    fn none_always_passes() {
        let manager = StateManager::new();
        assert!(StepValidation::None.check(&manager.state()).is_ok());
    }
}
