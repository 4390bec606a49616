use super::{ClassificationOptions, ModelDescriptor};
use crate::config::Settings;
use crate::error::ConsensusError;
use indexmap::IndexMap;
use tracing::debug;

/// Which models make up the ensemble for each task category.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    groups: IndexMap<String, Vec<ModelDescriptor>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every configured model file against `models_path`.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut registry = Self::new();

        for (group, files) in &settings.model_groups {
            let descriptors = files
                .iter()
                .map(|file| {
                    ModelDescriptor::new(settings.models_path.join(file))
                        .with_options(settings.classification.clone())
                })
                .collect();
            registry.register(group.clone(), descriptors);
        }

        debug!(
            "Model registry built with {} groups from {}",
            registry.groups.len(),
            settings.models_path.display()
        );
        registry
    }

    /// Add models to a group, keeping the order they are given in.
    pub fn register(&mut self, group: impl Into<String>, models: Vec<ModelDescriptor>) {
        self.groups.entry(group.into()).or_default().extend(models);
    }

    pub fn register_paths<I, P>(
        &mut self,
        group: impl Into<String>,
        paths: I,
        options: &ClassificationOptions,
    ) where
        I: IntoIterator<Item = P>,
        P: Into<std::path::PathBuf>,
    {
        let models = paths
            .into_iter()
            .map(|path| ModelDescriptor::new(path).with_options(options.clone()))
            .collect();
        self.register(group, models);
    }

    pub fn models_for(&self, group: &str) -> Result<&[ModelDescriptor], ConsensusError> {
        self.groups
            .get(group)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                ConsensusError::Configuration(format!("unknown model group '{}'", group))
            })
    }

    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}
