use super::{Classifier, ModelDescriptor};
use crate::consensus::{CategoryScore, ClassificationResult};
use crate::error::ClassifierError;
use async_trait::async_trait;
use image::{DynamicImage, ImageBuffer, Rgb};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Scripted classifier: answers per model path and records every call.
#[derive(Default)]
pub struct StubClassifier {
    responses: HashMap<PathBuf, Result<ClassificationResult, ClassifierError>>,
    delays: HashMap<PathBuf, Duration>,
    calls: AtomicUsize,
    completed: Mutex<Vec<PathBuf>>,
}

impl StubClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, path: &str, scores: &[(&str, f64)]) -> Self {
        let result = scores
            .iter()
            .map(|(name, score)| CategoryScore::new(*name, *score))
            .collect();
        self.responses.insert(PathBuf::from(path), Ok(result));
        self
    }

    pub fn fail(mut self, path: &str, error: ClassifierError) -> Self {
        self.responses.insert(PathBuf::from(path), Err(error));
        self
    }

    pub fn delay(mut self, path: &str, delay: Duration) -> Self {
        self.delays.insert(PathBuf::from(path), delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> Vec<PathBuf> {
        self.completed.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Classifier for StubClassifier {
    async fn classify(
        &self,
        _image: &DynamicImage,
        model: &ModelDescriptor,
    ) -> Result<ClassificationResult, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(&model.storage_path) {
            tokio::time::sleep(*delay).await;
        }

        let response = self
            .responses
            .get(&model.storage_path)
            .cloned()
            .unwrap_or_else(|| {
                Err(ClassifierError::ModelLoad {
                    path: model.storage_path.clone(),
                    reason: "no such model".to_string(),
                })
            });

        if let Ok(mut completed) = self.completed.lock() {
            completed.push(model.storage_path.clone());
        }

        response
    }
}

pub fn blank_image() -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(
        8,
        8,
        Rgb([255, 255, 255]),
    ))
}
