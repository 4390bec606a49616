//! Ensemble voting for image classifiers.
//!
//! Every model of an ensemble classifies the same image, per-category scores
//! are averaged over the models that reported them, and the category with the
//! highest average wins.

pub mod classifier;
pub mod config;
pub mod consensus;
pub mod error;
pub mod logging;

pub use classifier::{ClassificationOptions, Classifier, ModelDescriptor, ModelRegistry};
pub use config::Settings;
pub use consensus::{
    CategoryScore, ClassificationResult, ConsensusDecision, ConsensusEntry, ConsensusOrchestrator,
    ConsensusOutcome, ConsensusRequest, ConsensusService, ExecutionMode, aggregate, select_best,
};
pub use error::{AppError, ClassifierError, ConsensusError, SettingsError};
