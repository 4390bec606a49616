use super::orchestrator::{ConsensusOrchestrator, ExecutionMode};
use super::types::ConsensusDecision;
use crate::classifier::{Classifier, ModelRegistry};
use crate::config::Settings;
use crate::error::ConsensusError;
use image::DynamicImage;
use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};
use tower::Service;
use tracing::{Instrument, info_span};
use uuid::Uuid;

/// One image to classify with the ensemble registered under `group`.
#[derive(Debug, Clone)]
pub struct ConsensusRequest {
    pub id: Uuid,
    pub group: String,
    pub image: Arc<DynamicImage>,
}

impl ConsensusRequest {
    pub fn new(group: impl Into<String>, image: Arc<DynamicImage>) -> Self {
        Self {
            id: Uuid::new_v4(),
            group: group.into(),
            image,
        }
    }
}

/// Resolves a model group and runs the consensus for it.
#[derive(Clone)]
pub struct ConsensusService {
    registry: Arc<ModelRegistry>,
    orchestrator: ConsensusOrchestrator,
}

impl ConsensusService {
    pub fn new(registry: ModelRegistry, orchestrator: ConsensusOrchestrator) -> Self {
        Self {
            registry: Arc::new(registry),
            orchestrator,
        }
    }

    pub fn from_settings(settings: &Settings, classifier: Arc<dyn Classifier>) -> Self {
        let orchestrator = ConsensusOrchestrator::new(classifier)
            .with_mode(ExecutionMode::from(&settings.execution));
        Self::new(ModelRegistry::from_settings(settings), orchestrator)
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub async fn consensus_for(
        &self,
        group: &str,
        image: &DynamicImage,
    ) -> Result<ConsensusDecision, ConsensusError> {
        let models = self.registry.models_for(group)?;
        self.orchestrator.compute_consensus(image, models).await
    }
}

impl Service<ConsensusRequest> for ConsensusService {
    type Response = ConsensusDecision;
    type Error = ConsensusError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: ConsensusRequest) -> Self::Future {
        let service = self.clone();
        let span = info_span!("consensus", request_id = %request.id, group = %request.group);

        Box::pin(
            async move {
                service
                    .consensus_for(&request.group, &request.image)
                    .await
            }
            .instrument(span),
        )
    }
}
