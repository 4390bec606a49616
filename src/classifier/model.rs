use crate::consensus::ClassificationResult;
use serde::Deserialize;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Options the classifier is asked to honor for every model invocation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassificationOptions {
    /// Keep only this many top-scoring categories. `None` keeps all of them.
    pub max_results: Option<usize>,
    /// Categories scoring below this are dropped. `None` keeps every score,
    /// negative ones included.
    pub score_threshold: Option<f64>,
    pub num_threads: usize,
}

impl Default for ClassificationOptions {
    fn default() -> Self {
        Self {
            max_results: None,
            score_threshold: None,
            num_threads: 2,
        }
    }
}

impl ClassificationOptions {
    pub fn validate(&self) -> Result<(), String> {
        if self.score_threshold.is_some_and(f64::is_nan) {
            return Err("score_threshold must be a number, got NaN".to_string());
        }
        if self.max_results == Some(0) {
            return Err("max_results must be at least 1 when set".to_string());
        }
        if self.num_threads == 0 {
            return Err("num_threads must be at least 1".to_string());
        }
        Ok(())
    }

    /// Trim a classifier result down to what these options allow.
    ///
    /// Threshold filtering happens first, then the `max_results` cut. Equal
    /// scores keep their reported order.
    pub fn apply(&self, mut result: ClassificationResult) -> ClassificationResult {
        if let Some(threshold) = self.score_threshold {
            result.retain(|category| !(category.score < threshold));
        }

        if let Some(max_results) = self.max_results {
            if result.len() > max_results {
                result.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
                result.truncate(max_results);
            }
        }

        result
    }
}

/// Where a model lives and how it should be run.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDescriptor {
    pub storage_path: PathBuf,
    pub options: ClassificationOptions,
}

impl ModelDescriptor {
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: storage_path.into(),
            options: ClassificationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ClassificationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }
}
