use trip_core::config::WizardDefinition;
use trip_core::session::{InputEvent, WizardSession};

/// Builds a fresh session over the stock trip planner definition.
pub fn planner_session() -> WizardSession {
    WizardDefinition::default().into_session()
}

/// Records both travel dates so the first screen validates.
pub fn fill_dates(session: &mut WizardSession) {
    session.apply(InputEvent::TextChanged {
        field_id: "from_date".into(),
        value: "2026-06-01".into(),
    });
    session.apply(InputEvent::TextChanged {
        field_id: "to_date".into(),
        value: "2026-06-08".into(),
    });
}

/// Toggles a checkbox the way the view layer forwards it.
pub fn toggle(session: &mut WizardSession, field_id: &str, group: &str, checked: bool) {
    session.apply(InputEvent::CheckboxToggled {
        field_id: field_id.into(),
        group: Some(group.into()),
        checked,
    });
}
