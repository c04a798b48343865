//! Widget registry populated during step resolution and consumed by the
//! view layer after each render.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::descriptor::WidgetKind;

/// A selector/widget pair to initialize once the step's HTML is in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WidgetBinding {
    pub selector: String,
    pub widget: WidgetKind,
}

/// Widget bindings grouped by template id, in registration order.
#[derive(Debug, Clone, Default)]
pub struct WidgetRegistry {
    bindings: BTreeMap<String, Vec<WidgetBinding>>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, template_id: &str, binding: WidgetBinding) {
        self.bindings
            .entry(template_id.to_string())
            .or_default()
            .push(binding);
    }

    /// Bindings for a template; empty when none were registered.
    pub fn bindings(&self, template_id: &str) -> &[WidgetBinding] {
        self.bindings
            .get(template_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
