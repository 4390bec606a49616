use serde::{Deserialize, Serialize};

/// A single model's confidence for one category on one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category_name: String,
    pub score: f64,
}

impl CategoryScore {
    pub fn new(category_name: impl Into<String>, score: f64) -> Self {
        Self {
            category_name: category_name.into(),
            score,
        }
    }
}

/// Everything one model reported for one image. Categories are neither
/// ordered nor guaranteed unique, and may be empty.
pub type ClassificationResult = Vec<CategoryScore>;

/// Average score of a category over the models that reported it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusEntry {
    pub category_name: String,
    pub average_score: f64,
    pub contributing_count: usize,
}

/// The winning category of a consensus run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusDecision {
    pub category_name: String,
    pub score: f64,
}

impl From<&ConsensusEntry> for ConsensusDecision {
    fn from(entry: &ConsensusEntry) -> Self {
        Self {
            category_name: entry.category_name.clone(),
            score: entry.average_score,
        }
    }
}

/// Decision plus the full set of averaged entries it was chosen from.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsensusOutcome {
    pub decision: ConsensusDecision,
    pub entries: Vec<ConsensusEntry>,
    pub models_run: usize,
}
