pub mod aggregator;
pub mod orchestrator;
pub mod service;
pub mod types;

pub use aggregator::{aggregate, select_best};
pub use orchestrator::{ConsensusOrchestrator, ExecutionMode};
pub use service::{ConsensusRequest, ConsensusService};
pub use types::{
    CategoryScore, ClassificationResult, ConsensusDecision, ConsensusEntry, ConsensusOutcome,
};
