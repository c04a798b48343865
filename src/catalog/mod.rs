//! The built-in trip planner wizard: three screens (travel dates and party
//! size, trip styles, geographical regions) plus the results layout.

use crate::config::WizardDefinition;
use crate::content::template::TemplateSet;
use crate::content::{CheckboxItem, SELECT_TEMPLATE_ID};
use crate::steps::{
    ContentField, Generator, GroupListing, ResultsDescriptor, StepDescriptor, StepValidation,
    WidgetKind,
};

/// Checkbox group collecting preferred trip styles.
pub const TRIP_STYLES_GROUP: &str = "trip_styles";
/// Checkbox group collecting target regions.
pub const GEOGRAPHICAL_REGION_GROUP: &str = "geographical_region";
/// Text field holding the departure date.
pub const FROM_DATE_FIELD: &str = "from_date";
/// Text field holding the return date.
pub const TO_DATE_FIELD: &str = "to_date";

const RESULTS_TEMPLATE_ID: &str = "wizard-result";

/// The stock trip planner definition.
pub fn trip_planner() -> WizardDefinition {
    WizardDefinition {
        steps: trip_planner_steps(),
        results: trip_planner_results(),
        templates: trip_planner_templates(),
    }
}

fn trip_planner_steps() -> Vec<StepDescriptor> {
    vec![
        StepDescriptor::new("trip-step1")
            .with_field(
                FROM_DATE_FIELD,
                ContentField::Widget {
                    selector: "#from_date".into(),
                    widget: WidgetKind::Datepicker,
                },
            )
            .with_field(
                TO_DATE_FIELD,
                ContentField::Widget {
                    selector: "#to_date".into(),
                    widget: WidgetKind::Datepicker,
                },
            )
            .with_field(
                "num_of_adults",
                ContentField::Generator(Generator::NumberRangeSelect {
                    from: 0,
                    to: 30,
                    field_id: "num_of_adults".into(),
                    label: "Adults".into(),
                }),
            )
            .with_field(
                "num_of_children",
                ContentField::Generator(Generator::NumberRangeSelect {
                    from: 0,
                    to: 30,
                    field_id: "num_of_children".into(),
                    label: "Children".into(),
                }),
            )
            .with_validation(StepValidation::DateRange {
                from_field: FROM_DATE_FIELD.into(),
                to_field: TO_DATE_FIELD.into(),
            }),
        StepDescriptor::new("trip-step2")
            .with_field(
                "trip_style_list",
                ContentField::Generator(Generator::CheckboxGrid {
                    items: trip_style_items(),
                }),
            )
            .with_validation(StepValidation::RequireChecked {
                group: TRIP_STYLES_GROUP.into(),
            }),
        StepDescriptor::new("trip-step3")
            .with_field(
                "geographical_regions_list",
                ContentField::Generator(Generator::CheckboxGrid {
                    items: geographical_region_items(),
                }),
            )
            .with_validation(StepValidation::RequireChecked {
                group: GEOGRAPHICAL_REGION_GROUP.into(),
            }),
    ]
}

fn trip_style_items() -> Vec<CheckboxItem> {
    vec![
        CheckboxItem::new("shopping", "Shopping"),
        CheckboxItem::new("beaches", "Beaches"),
        CheckboxItem::new("nature", "Nature"),
        CheckboxItem::new("history", "History"),
        CheckboxItem::new("backpacking", "Backpacking"),
        CheckboxItem::new("hiking", "Hiking"),
        CheckboxItem::new("ski", "Ski"),
        CheckboxItem::new("rest", "Rest"),
        CheckboxItem::new("resort", "Resort"),
        CheckboxItem::new("family", "Family"),
        CheckboxItem::new("seniors", "Seniors"),
        CheckboxItem::new("guided", "Guided"),
        CheckboxItem::new("parks", "Parks"),
    ]
}

fn geographical_region_items() -> Vec<CheckboxItem> {
    vec![
        CheckboxItem::new("all", "All"),
        CheckboxItem::new("europe", "Europe"),
        CheckboxItem::new("north_america", "North America"),
        CheckboxItem::new("south_america", "South America"),
        CheckboxItem::new("central_america", "Central America"),
        CheckboxItem::new("africa", "Africa"),
        CheckboxItem::new("asia", "Asia"),
        CheckboxItem::new("pacific", "Pacific Rim"),
        CheckboxItem::new("arctic", "Arctic Region"),
    ]
}

fn trip_planner_results() -> ResultsDescriptor {
    ResultsDescriptor {
        template_id: RESULTS_TEMPLATE_ID.into(),
        from_field: FROM_DATE_FIELD.into(),
        to_field: TO_DATE_FIELD.into(),
        groups: vec![
            GroupListing {
                group: TRIP_STYLES_GROUP.into(),
                wrapper: Some("li".into()),
            },
            GroupListing {
                group: GEOGRAPHICAL_REGION_GROUP.into(),
                wrapper: Some("li".into()),
            },
        ],
    }
}

fn trip_planner_templates() -> TemplateSet {
    let mut templates = TemplateSet::new();
    templates.insert(
        "trip-step1",
        concat!(
            "<h2>When are you traveling?</h2>",
            "<div class=\"form-group\"><label for=\"from_date\">From</label>",
            "<input type=\"text\" id=\"from_date\" class=\"js-date-field\"></div>",
            "<div class=\"form-group\"><label for=\"to_date\">To</label>",
            "<input type=\"text\" id=\"to_date\" class=\"js-date-field\"></div>",
            "{{ num_of_adults }}{{ num_of_children }}"
        ),
    );
    templates.insert(
        "trip-step2",
        concat!(
            "<h2>What is your travel style?</h2>",
            "<ul class=\"checkbox-grid js-trip-wizard-data-subject\" data-subject=\"trip_styles\">",
            "{{ trip_style_list }}</ul>"
        ),
    );
    templates.insert(
        "trip-step3",
        concat!(
            "<h2>Where would you like to go?</h2>",
            "<ul class=\"checkbox-grid js-trip-wizard-data-subject\" data-subject=\"geographical_region\">",
            "{{ geographical_regions_list }}</ul>"
        ),
    );
    templates.insert(
        SELECT_TEMPLATE_ID,
        concat!(
            "<div class=\"form-group\"><label for=\"{{ component_id }}\">{{ label }}</label>",
            "<select id=\"{{ component_id }}\" name=\"{{ component_id }}\">{{ options }}</select></div>"
        ),
    );
    templates.insert(
        RESULTS_TEMPLATE_ID,
        concat!(
            "<h3>Your trip plan</h3>",
            "<p class=\"trip-dates\">{{ from_date }} to {{ to_date }}</p>",
            "<h4>Trip styles</h4><ul>{{ trip_styles }}</ul>",
            "<h4>Regions</h4><ul>{{ geographical_region }}</ul>"
        ),
    );
    templates
}
