use super::aggregator::{aggregate, select_best};
use super::types::{ClassificationResult, ConsensusDecision, ConsensusOutcome};
use crate::classifier::{Classifier, ModelDescriptor};
use crate::config::{ExecutionKind, ExecutionSettings};
use crate::error::ConsensusError;
use futures::future::{BoxFuture, FutureExt};
use futures::stream::{self, StreamExt, TryStreamExt};
use image::DynamicImage;
use std::sync::Arc;
use tracing::{debug, instrument, trace};

type IndexedResult = Result<(usize, ClassificationResult), ConsensusError>;

/// How the models of one ensemble are invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One model after another, in descriptor order.
    Sequential,
    /// Up to `workers` models in flight at once. The first failure drops the
    /// rest.
    Concurrent { workers: usize },
}

impl From<&ExecutionSettings> for ExecutionMode {
    fn from(settings: &ExecutionSettings) -> Self {
        match settings.mode {
            ExecutionKind::Sequential => ExecutionMode::Sequential,
            ExecutionKind::Concurrent => ExecutionMode::Concurrent {
                workers: settings.workers,
            },
        }
    }
}

/// Runs every model of an ensemble on one image and votes on the result.
#[derive(Clone)]
pub struct ConsensusOrchestrator {
    classifier: Arc<dyn Classifier>,
    mode: ExecutionMode,
}

impl ConsensusOrchestrator {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            classifier,
            mode: ExecutionMode::Sequential,
        }
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    pub async fn compute_consensus(
        &self,
        image: &DynamicImage,
        models: &[ModelDescriptor],
    ) -> Result<ConsensusDecision, ConsensusError> {
        self.compute_consensus_detailed(image, models)
            .await
            .map(|outcome| outcome.decision)
    }

    /// Like `compute_consensus`, but also hands back every averaged entry.
    #[instrument(skip(self, image, models), fields(models = models.len(), mode = ?self.mode))]
    pub async fn compute_consensus_detailed(
        &self,
        image: &DynamicImage,
        models: &[ModelDescriptor],
    ) -> Result<ConsensusOutcome, ConsensusError> {
        if models.is_empty() {
            return Err(ConsensusError::Configuration(
                "no models supplied for consensus".to_string(),
            ));
        }
        if let ExecutionMode::Concurrent { workers: 0 } = self.mode {
            return Err(ConsensusError::Configuration(
                "concurrent execution needs at least one worker".to_string(),
            ));
        }

        let results = self.classify_all(image, models).await?;

        let entries = aggregate(&results);
        let decision = select_best(&entries)?;

        debug!(
            "Consensus over {} models: {} ({:.4}) from {} categories",
            models.len(),
            decision.category_name,
            decision.score,
            entries.len()
        );

        Ok(ConsensusOutcome {
            decision,
            entries,
            models_run: results.len(),
        })
    }

    /// Collect one result per model, in descriptor order, or the first error.
    async fn classify_all(
        &self,
        image: &DynamicImage,
        models: &[ModelDescriptor],
    ) -> Result<Vec<ClassificationResult>, ConsensusError> {
        match self.mode {
            ExecutionMode::Sequential => {
                let mut results = Vec::with_capacity(models.len());
                for model in models {
                    results.push(self.classify_one(image, model).await?);
                }
                Ok(results)
            }
            ExecutionMode::Concurrent { workers } => {
                let pending: Vec<BoxFuture<'_, IndexedResult>> = models
                    .iter()
                    .enumerate()
                    .map(move |(index, model)| {
                        async move {
                            self.classify_one(image, model)
                                .await
                                .map(|result| (index, result))
                        }
                        .boxed()
                    })
                    .collect();

                // Dropping the stream on the first error cancels whatever is
                // still in flight.
                let mut indexed: Vec<(usize, ClassificationResult)> = stream::iter(pending)
                    .buffer_unordered(workers)
                    .try_collect()
                    .await?;

                indexed.sort_by_key(|(index, _)| *index);
                Ok(indexed.into_iter().map(|(_, result)| result).collect())
            }
        }
    }

    async fn classify_one(
        &self,
        image: &DynamicImage,
        model: &ModelDescriptor,
    ) -> Result<ClassificationResult, ConsensusError> {
        let result = self
            .classifier
            .classify(image, model)
            .await
            .map_err(|source| ConsensusError::ClassifierInvocation {
                model: model.storage_path.clone(),
                source,
            })?;

        trace!(
            "Model {} reported {} categories",
            model.storage_path.display(),
            result.len()
        );

        Ok(model.options.apply(result))
    }
}
