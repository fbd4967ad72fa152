use crate::classifiers::bayes::{DEFAULT_MODEL_PATH, ModelStore};
use crate::evaluation::{ClassificationLog, DEFAULT_LOG_PATH};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LABEL_FIELD: &str = "PlayTennis";
pub const DEFAULT_DATASET_PATH: &str = "play_tennis_dataset.json";

/// Where things live and which column is the class. Every field is optional in
/// a settings file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub label_field: String,
    pub dataset_path: PathBuf,
    pub model_path: PathBuf,
    pub log_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            label_field: DEFAULT_LABEL_FIELD.to_string(),
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

impl Settings {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid settings file {}", path.display()))
    }

    pub fn model_store(&self) -> ModelStore {
        ModelStore::new(&self.model_path)
    }

    pub fn classification_log(&self) -> ClassificationLog {
        ClassificationLog::new(&self.log_path)
    }
}
