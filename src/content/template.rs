//! Minimal placeholder templating: literal markup with `{{ name }}` slots.
//!
//! Step and results markup is plain data shipped alongside the step
//! descriptors, so the engine stays deliberately small. A compiled template
//! never fails to render; placeholders without a matching data entry produce
//! an empty string.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Values substituted into a compiled template, keyed by placeholder name.
pub type TemplateData = BTreeMap<String, String>;

/// Compile-time template failures. Raised only for malformed syntax; absent
/// or empty sources compile to a renderer producing `""`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unclosed placeholder at byte {offset}")]
    UnclosedPlaceholder { offset: usize },
    #[error("empty placeholder at byte {offset}")]
    EmptyPlaceholder { offset: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed template ready for repeated rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parses `source` into literal and placeholder segments.
    pub fn compile(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut consumed = 0usize;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let offset = consumed + start;
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                return Err(TemplateError::UnclosedPlaceholder { offset });
            };
            let name = after[..end].trim();
            if name.is_empty() {
                return Err(TemplateError::EmptyPlaceholder { offset });
            }
            segments.push(Segment::Placeholder(name.to_string()));
            consumed += start + 2 + end + 2;
            rest = &after[end + 2..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// The renderer used for absent template ids.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Substitutes `data` into the template. Missing entries render as `""`.
    pub fn render(&self, data: &TemplateData) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    if let Some(value) = data.get(name) {
                        out.push_str(value);
                    }
                }
            }
        }
        out
    }
}

/// Abstraction over template storage. The embedding page keeps its markup in
/// a document/template store; tests and definitions use [`TemplateSet`].
pub trait TemplateSource: Send + Sync {
    /// Raw template markup for `template_id`, or `None` when absent.
    fn lookup(&self, template_id: &str) -> Option<String>;
}

/// In-memory template store, doubling as the serde model inside wizard
/// definitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateSet {
    templates: BTreeMap<String, String>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, template_id: impl Into<String>, markup: impl Into<String>) {
        self.templates.insert(template_id.into(), markup.into());
    }

    pub fn contains(&self, template_id: &str) -> bool {
        self.templates.contains_key(template_id)
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateSource for TemplateSet {
    fn lookup(&self, template_id: &str) -> Option<String> {
        self.templates.get(template_id).cloned()
    }
}
