use super::types::{ClassificationResult, ConsensusDecision, ConsensusEntry};
use crate::error::ConsensusError;
use indexmap::IndexMap;
use tracing::trace;

#[derive(Debug, Default, Clone, Copy)]
struct RunningTotal {
    total_score: f64,
    count: usize,
}

/// Average every category's score over the models that reported it.
///
/// Models that are silent on a category do not count towards its average.
/// Entries come out in the order their categories were first seen, which is
/// what `select_best` relies on for tie-breaking.
pub fn aggregate(results: &[ClassificationResult]) -> Vec<ConsensusEntry> {
    let mut totals: IndexMap<&str, RunningTotal> = IndexMap::new();

    for result in results {
        for category in result {
            let running = totals.entry(category.category_name.as_str()).or_default();
            running.total_score += category.score;
            running.count += 1;
        }
    }

    trace!(
        "Aggregated {} results into {} categories",
        results.len(),
        totals.len()
    );

    totals
        .into_iter()
        .map(|(category_name, running)| ConsensusEntry {
            category_name: category_name.to_string(),
            average_score: running.total_score / running.count as f64,
            contributing_count: running.count,
        })
        .collect()
}

/// Pick the entry with the highest average score.
///
/// Ties go to the entry that appears first. An entry whose average is NaN
/// only wins when every entry is NaN.
pub fn select_best(entries: &[ConsensusEntry]) -> Result<ConsensusDecision, ConsensusError> {
    let mut best: Option<&ConsensusEntry> = None;

    for entry in entries {
        best = match best {
            None => Some(entry),
            Some(current) if current.average_score.is_nan() && !entry.average_score.is_nan() => {
                Some(entry)
            }
            Some(current) if entry.average_score > current.average_score => Some(entry),
            keep => keep,
        };
    }

    best.map(ConsensusDecision::from)
        .ok_or(ConsensusError::EmptyInput)
}
