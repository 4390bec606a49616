use std::path::PathBuf;
use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Consensus Error: {0}")]
    Consensus(#[from] ConsensusError),
    #[error("Settings Error: {0}")]
    Settings(#[from] SettingsError),
}

// Errors surfaced by a consensus computation for one image
#[derive(Error, Debug)]
pub enum ConsensusError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    #[error("Classifier failed for model {model}: {source}")]
    ClassifierInvocation {
        model: PathBuf,
        #[source]
        source: ClassifierError,
    },
    #[error("No model reported any category for this image")]
    EmptyInput,
}

// Failures reported by the external classifier
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("Failed to load model {path}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },
    #[error("Inference failed: {0}")]
    Inference(String),
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid settings: {0}")]
    Invalid(String),
}
