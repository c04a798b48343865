//! Declarative step content: raw values, generated fragments, and widget
//! hooks.
//!
//! Descriptors are plain serde data so a wizard definition can be shipped
//! from a server instead of being compiled in.

use serde::{Deserialize, Serialize};

use crate::content::{CheckboxItem, ContentError, ContentManager};

/// Post-render widget hooks the view layer knows how to initialize.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Datepicker,
}

/// Content producers invoked during step resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "generator", rename_all = "snake_case")]
pub enum Generator {
    /// A labelled `<select>` form group covering `[from, to]` inclusive.
    NumberRangeSelect {
        from: i64,
        to: i64,
        field_id: String,
        label: String,
    },
    /// A grid of checkbox/label pairs.
    CheckboxGrid { items: Vec<CheckboxItem> },
}

impl Generator {
    /// Produces the fragment this generator describes.
    pub fn run(&self, content: &ContentManager) -> Result<String, ContentError> {
        match self {
            Generator::NumberRangeSelect {
                from,
                to,
                field_id,
                label,
            } => content.number_range_form_group(*from, *to, field_id, label),
            Generator::CheckboxGrid { items } => content.checkbox_grid_items(items),
        }
    }
}

/// A named content slot inside a step template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentField {
    /// The raw value is handed to the template as is.
    Simple { value: String },
    /// Replaced by the generator's output during resolution.
    Generator(Generator),
    /// Registers a post-render hook instead of contributing markup.
    Widget { selector: String, widget: WidgetKind },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_field_json_shape_is_tagged() {
        let field = ContentField::Generator(Generator::NumberRangeSelect {
            from: 0,
            to: 30,
            field_id: "num_of_adults".into(),
            label: "Adults".into(),
        });
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "generator");
        assert_eq!(json["generator"], "number_range_select");
        assert_eq!(json["from"], 0);

        let back: ContentField = serde_json::from_value(json).unwrap();
        assert_eq!(back, field);
    }

    #[test]
    fn widget_field_round_trips() {
        let field = ContentField::Widget {
            selector: "#from_date".into(),
            widget: WidgetKind::Datepicker,
        };
        let json = serde_json::to_string(&field).unwrap();
        assert!(json.contains("\"widget\":\"datepicker\""));
        let back: ContentField = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);
    }
}
