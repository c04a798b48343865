use trip_core::config::WizardDefinition;
use trip_core::steps::{StepsManager, WidgetKind};

fn planner_steps() -> StepsManager {
    WizardDefinition::default().into_steps_manager()
}

#[test]
fn test_set_index_rejects_out_of_range() {
    let mut steps = planner_steps();
    assert!(!steps.set_index(3));
    assert!(!steps.set_index(usize::MAX));
    assert_eq!(steps.cursor(), 0);

    assert!(steps.set_index(2));
    assert_eq!(steps.cursor(), 2);
}

#[test]
fn test_next_on_last_step_is_a_no_op() {
    let mut steps = planner_steps();
    assert!(steps.set_index(2));
    let last = steps.current().expect("render last step");

    let after_next = steps.next().expect("render after next");
    assert_eq!(steps.cursor(), 2);
    assert_eq!(after_next, last);
}

#[test]
fn test_previous_on_first_step_is_a_no_op() {
    let mut steps = planner_steps();
    let first = steps.current().expect("render first step");

    let after_previous = steps.previous().expect("render after previous");
    assert_eq!(steps.cursor(), 0);
    assert_eq!(after_previous, first);
}

#[test]
fn test_resolution_is_idempotent() {
    let mut steps = planner_steps();
    let first = steps.current().expect("first render");
    let second = steps.current().expect("second render");
    assert_eq!(first, second);

    // Re-resolution would duplicate the datepicker registrations.
    let widgets = steps.widget_bindings("trip-step1");
    assert_eq!(widgets.len(), 2);
    assert!(widgets.iter().all(|w| w.widget == WidgetKind::Datepicker));
    let selectors: Vec<&str> = widgets.iter().map(|w| w.selector.as_str()).collect();
    assert_eq!(selectors, vec!["#from_date", "#to_date"]);
}

#[test]
fn test_resolution_is_lazy() {
    let steps = planner_steps();
    assert!(steps.widget_bindings("trip-step1").is_empty());
}

#[test]
fn test_generated_content_lands_in_the_rendered_step() {
    let mut steps = planner_steps();
    let html = steps.current().expect("render first step");
    assert!(html.contains("<select id=\"num_of_adults\""));
    assert!(html.contains("<option value=\"30\">30</option>"));
    assert!(html.contains("<select id=\"num_of_children\""));

    assert!(steps.set_index(1));
    let html = steps.current().expect("render second step");
    assert!(html.contains("id=\"beaches\""));
    assert!(html.contains("<label for=\"parks\">Parks</label>"));
}

#[test]
fn test_navigation_flags_follow_the_cursor() {
    let mut steps = planner_steps();
    assert!(!steps.has_previous());
    assert!(steps.has_next());

    assert!(steps.set_index(2));
    assert!(steps.has_previous());
    assert!(!steps.has_next());
}

#[test]
fn test_number_range_property_count() {
    let definition = WizardDefinition::default();
    let content = trip_core::content::ContentManager::new(Box::new(definition.templates));
    let html = content.number_range_options(0, 30).expect("options");
    assert_eq!(html.matches("<option ").count(), 31);
    assert!(html.starts_with("<option value=\"0\">0</option>"));
    assert!(html.ends_with("<option value=\"30\">30</option>"));
}
