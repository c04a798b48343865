use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::content::template::TemplateSet;
use crate::content::ContentManager;
use crate::errors::WizardError;
use crate::session::WizardSession;
use crate::steps::{ResultsDescriptor, StepDescriptor, StepsManager};

const TMP_SUFFIX: &str = "tmp";

/// Everything needed to run one wizard: screens, markup, and the results
/// layout.
///
/// Definitions are plain data so they can be stored next to the embedding
/// application or fetched from a server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WizardDefinition {
    pub steps: Vec<StepDescriptor>,
    pub results: ResultsDescriptor,
    pub templates: TemplateSet,
}

impl Default for WizardDefinition {
    fn default() -> Self {
        catalog::trip_planner()
    }
}

impl WizardDefinition {
    pub fn from_json(json: &str) -> Result<Self, WizardError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, WizardError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a definition from disk; an absent file yields the built-in
    /// trip planner definition.
    pub fn load_or_default(path: &Path) -> Result<Self, WizardError> {
        if path.exists() {
            let data = fs::read_to_string(path)?;
            Self::from_json(&data)
        } else {
            Ok(Self::default())
        }
    }

    /// Writes the definition as JSON, replacing the target atomically.
    pub fn save(&self, path: &Path) -> Result<(), WizardError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = self.to_json()?;
        let tmp = tmp_path(path);
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Builds the steps manager for this definition.
    pub fn into_steps_manager(self) -> StepsManager {
        StepsManager::new(
            ContentManager::new(Box::new(self.templates)),
            self.steps,
            self.results,
        )
    }

    /// Builds a fresh session for this definition.
    pub fn into_session(self) -> WizardSession {
        WizardSession::new(self.into_steps_manager())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
