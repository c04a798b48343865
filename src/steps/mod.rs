//! Step orchestration: cursor movement, lazy content resolution, per-step
//! validation, and results assembly.

pub mod descriptor;
pub mod registry;
pub mod validation;

pub use descriptor::{ContentField, Generator, WidgetKind};
pub use registry::{WidgetBinding, WidgetRegistry};
pub use validation::{StepValidation, ValidationFailure};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::content::template::TemplateData;
use crate::content::{ContentError, ContentManager};
use crate::state::AnswerStore;
use crate::utils::escape_html;

/// One wizard screen: a template, its content slots, and its validation
/// rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepDescriptor {
    pub template_id: String,
    #[serde(default)]
    ready: bool,
    #[serde(default)]
    fields: BTreeMap<String, ContentField>,
    #[serde(default)]
    pub validation: StepValidation,
}

impl StepDescriptor {
    pub fn new(template_id: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            ready: false,
            fields: BTreeMap::new(),
            validation: StepValidation::None,
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, field: ContentField) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    pub fn with_validation(mut self, validation: StepValidation) -> Self {
        self.validation = validation;
        self
    }

    /// Whether generators were already run and widgets registered.
    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

/// Selected entries of one group, listed on the results view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupListing {
    pub group: String,
    /// Tag each entry is wrapped in; `None` concatenates the bare ids.
    #[serde(default)]
    pub wrapper: Option<String>,
}

/// Field and group sources for the final results view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultsDescriptor {
    pub template_id: String,
    pub from_field: String,
    pub to_field: String,
    pub groups: Vec<GroupListing>,
}

/// Walks an ordered step sequence with a clamped cursor, materializing each
/// step's content on first visit.
pub struct StepsManager {
    content: ContentManager,
    steps: Vec<StepDescriptor>,
    results: ResultsDescriptor,
    cursor: usize,
    widgets: WidgetRegistry,
}

impl StepsManager {
    pub fn new(
        content: ContentManager,
        steps: Vec<StepDescriptor>,
        results: ResultsDescriptor,
    ) -> Self {
        Self {
            content,
            steps,
            results,
            cursor: 0,
            widgets: WidgetRegistry::new(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.steps.len()
    }

    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    /// Moves the cursor when `index` is in range. Out-of-range requests
    /// leave the cursor unchanged and report `false`.
    pub fn set_index(&mut self, index: usize) -> bool {
        if index < self.steps.len() {
            self.cursor = index;
            true
        } else {
            false
        }
    }

    /// Advances the cursor (no-op on the last step) and renders the now
    /// current step.
    pub fn next(&mut self) -> Result<String, ContentError> {
        if self.has_next() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Retreats the cursor (no-op on the first step) and renders the now
    /// current step.
    pub fn previous(&mut self) -> Result<String, ContentError> {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Renders the current step, resolving its content first if this is the
    /// first visit.
    pub fn current(&mut self) -> Result<String, ContentError> {
        self.resolve_current()?;
        let Some(step) = self.steps.get(self.cursor) else {
            return Ok(String::new());
        };
        self.content
            .render_template(&step.template_id, &render_data(step))
    }

    /// Runs generators and registers widgets for the current step, exactly
    /// once. Ready steps are left untouched.
    fn resolve_current(&mut self) -> Result<(), ContentError> {
        let Some(step) = self.steps.get_mut(self.cursor) else {
            return Ok(());
        };
        if step.ready {
            return Ok(());
        }
        for field in step.fields.values_mut() {
            match field {
                ContentField::Generator(generator) => {
                    let value = generator.run(&self.content)?;
                    *field = ContentField::Simple { value };
                }
                ContentField::Widget { selector, widget } => {
                    self.widgets.register(
                        &step.template_id,
                        WidgetBinding {
                            selector: selector.clone(),
                            widget: *widget,
                        },
                    );
                }
                ContentField::Simple { .. } => {}
            }
        }
        step.ready = true;
        Ok(())
    }

    /// Evaluates the current step's declared validation rule against the
    /// answer store.
    pub fn validate(&self, store: &AnswerStore) -> Result<(), ValidationFailure> {
        match self.steps.get(self.cursor) {
            Some(step) => step.validation.check(store),
            None => Ok(()),
        }
    }

    /// Renders the results view from the accumulated answers. Absent dates
    /// and groups render as empty fragments.
    pub fn results(&self, store: &AnswerStore) -> Result<String, ContentError> {
        let mut data = TemplateData::new();
        data.insert(
            self.results.from_field.clone(),
            store.text(&self.results.from_field).unwrap_or("").to_string(),
        );
        data.insert(
            self.results.to_field.clone(),
            store.text(&self.results.to_field).unwrap_or("").to_string(),
        );
        for listing in &self.results.groups {
            data.insert(listing.group.clone(), group_list(store, listing));
        }
        self.content.render_template(&self.results.template_id, &data)
    }

    /// Bindings registered for the current step's template.
    pub fn current_widgets(&self) -> &[WidgetBinding] {
        match self.steps.get(self.cursor) {
            Some(step) => self.widgets.bindings(&step.template_id),
            None => &[],
        }
    }

    /// Bindings registered under any template id.
    pub fn widget_bindings(&self, template_id: &str) -> &[WidgetBinding] {
        self.widgets.bindings(template_id)
    }
}

fn render_data(step: &StepDescriptor) -> TemplateData {
    let mut data = TemplateData::new();
    for (name, field) in &step.fields {
        if let ContentField::Simple { value } = field {
            data.insert(name.clone(), value.clone());
        }
    }
    data
}

fn group_list(store: &AnswerStore, listing: &GroupListing) -> String {
    let Some(selected) = store.selections(&listing.group) else {
        return String::new();
    };
    let mut html = String::new();
    for item in selected {
        let item = escape_html(item);
        match &listing.wrapper {
            Some(tag) => html.push_str(&format!("<{tag}>{item}</{tag}>")),
            None => html.push_str(&item),
        }
    }
    html
}
