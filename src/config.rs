use crate::classifier::ClassificationOptions;
use crate::error::SettingsError;
use config::{Config, Environment, File};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "CONSENSUS";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory the model file names below are resolved against.
    pub models_path: PathBuf,
    /// Model file names to run, keyed by task category.
    pub model_groups: IndexMap<String, Vec<String>>,
    pub execution: ExecutionSettings,
    pub classification: ClassificationOptions,
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionKind {
    Sequential,
    Concurrent,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExecutionSettings {
    pub mode: ExecutionKind,
    pub workers: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            models_path: PathBuf::new(),
            model_groups: IndexMap::new(),
            execution: ExecutionSettings::default(),
            classification: ClassificationOptions::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for ExecutionSettings {
    fn default() -> Self {
        Self {
            mode: ExecutionKind::Sequential,
            workers: 2,
        }
    }
}

impl Settings {
    /// Load settings from an optional file, then `CONSENSUS__*` environment
    /// variables on top of it.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: Settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.execution.workers == 0 {
            return Err(SettingsError::Invalid(
                "execution.workers must be at least 1".to_string(),
            ));
        }

        self.classification
            .validate()
            .map_err(SettingsError::Invalid)?;

        if let Some((group, _)) = self.model_groups.iter().find(|(_, models)| models.is_empty()) {
            return Err(SettingsError::Invalid(format!(
                "model group '{}' lists no models",
                group
            )));
        }

        Ok(())
    }
}
