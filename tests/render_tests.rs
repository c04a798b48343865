mod common;

use common::{fill_dates, planner_session, toggle};
use insta::assert_snapshot;
use trip_core::config::WizardDefinition;
use trip_core::content::ContentManager;

#[test]
fn test_number_range_form_group_markup() {
    let definition = WizardDefinition::default();
    let content = ContentManager::new(Box::new(definition.templates));
    let html = content
        .number_range_form_group(0, 2, "num_of_adults", "Adults")
        .expect("render form group");
    assert_snapshot!(html, @r#"<div class="form-group"><label for="num_of_adults">Adults</label><select id="num_of_adults" name="num_of_adults"><option value="0">0</option><option value="1">1</option><option value="2">2</option></select></div>"#);
}

#[test]
fn test_results_markup() {
    let mut session = planner_session();
    fill_dates(&mut session);
    toggle(&mut session, "beaches", "trip_styles", true);
    toggle(&mut session, "europe", "geographical_region", true);

    let html = session.results().expect("render results");
    assert_snapshot!(html, @r#"<h3>Your trip plan</h3><p class="trip-dates">2026-06-01 to 2026-06-08</p><h4>Trip styles</h4><ul><li>beaches</li></ul><h4>Regions</h4><ul><li>europe</li></ul>"#);
}

#[test]
fn test_results_render_empty_fragments_for_absent_answers() {
    let session = planner_session();
    let html = session.results().expect("render results");
    assert_snapshot!(html, @r#"<h3>Your trip plan</h3><p class="trip-dates"> to </p><h4>Trip styles</h4><ul></ul><h4>Regions</h4><ul></ul>"#);
}
