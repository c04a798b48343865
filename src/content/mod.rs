//! Low-level content generation: template rendering, numeric range option
//! lists, and checkbox grids.

pub mod template;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::escape_html;
use template::{Template, TemplateData, TemplateError, TemplateSource};

/// Template id of the labelled select form group. The backing template is
/// resolved once per manager and reused for every range select.
pub const SELECT_TEMPLATE_ID: &str = "trip-wizard-modal-select";

/// Upper bound on the number of options a range generator may produce.
const MAX_RANGE_SPAN: i64 = 10_000;

/// Failures raised while materializing content fragments.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

/// One entry of a checkbox grid: element id plus visible label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckboxItem {
    pub id: String,
    pub label: String,
}

impl CheckboxItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Turns declarative content descriptors into HTML fragments.
///
/// The manager only needs a lookup-by-id capability from its template
/// source; everything else is string assembly.
pub struct ContentManager {
    source: Box<dyn TemplateSource>,
    select_template: OnceCell<Template>,
}

impl ContentManager {
    pub fn new(source: Box<dyn TemplateSource>) -> Self {
        Self {
            source,
            select_template: OnceCell::new(),
        }
    }

    /// Looks up and compiles a template. Absent ids compile to the empty
    /// template; malformed sources propagate a template error.
    fn template(&self, template_id: &str) -> Result<Template, ContentError> {
        match self.source.lookup(template_id) {
            Some(markup) => Ok(Template::compile(&markup)?),
            None => Ok(Template::empty()),
        }
    }

    /// Renders the template registered under `template_id` with `data`.
    pub fn render_template(
        &self,
        template_id: &str,
        data: &TemplateData,
    ) -> Result<String, ContentError> {
        Ok(self.template(template_id)?.render(data))
    }

    /// One `<option>` per integer in `[from, to]` inclusive, ascending, with
    /// the decimal string as both value and label.
    pub fn number_range_options(&self, from: i64, to: i64) -> Result<String, ContentError> {
        if from > to {
            return Err(ContentError::InvalidArgument(format!(
                "range bounds out of order: {} > {}",
                from, to
            )));
        }
        if to - from >= MAX_RANGE_SPAN {
            return Err(ContentError::InvalidArgument(format!(
                "range span {}..={} exceeds {} options",
                from, to, MAX_RANGE_SPAN
            )));
        }
        let mut html = String::new();
        for value in from..=to {
            html.push_str(&format!("<option value=\"{value}\">{value}</option>"));
        }
        Ok(html)
    }

    /// A `<li>` with a checkbox input and bound label per item, in input
    /// order.
    pub fn checkbox_grid_items(&self, items: &[CheckboxItem]) -> Result<String, ContentError> {
        let mut html = String::new();
        for item in items {
            if item.id.trim().is_empty() {
                return Err(ContentError::InvalidArgument(
                    "checkbox item without an id".into(),
                ));
            }
            let id = escape_html(&item.id);
            let label = escape_html(&item.label);
            html.push_str(&format!(
                "<li><input type=\"checkbox\" name=\"{id}\" id=\"{id}\"><label for=\"{id}\">{label}</label></li>"
            ));
        }
        Ok(html)
    }

    /// Renders the labelled select form group for an integer range.
    pub fn number_range_form_group(
        &self,
        from: i64,
        to: i64,
        field_id: &str,
        label: &str,
    ) -> Result<String, ContentError> {
        let template = self
            .select_template
            .get_or_try_init(|| self.template(SELECT_TEMPLATE_ID))?;
        let options = self.number_range_options(from, to)?;

        let mut data = TemplateData::new();
        data.insert("component_id".into(), escape_html(field_id));
        data.insert("label".into(), escape_html(label));
        data.insert("options".into(), options);
        Ok(template.render(&data))
    }
}
