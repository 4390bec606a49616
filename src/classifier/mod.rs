pub mod model;
pub mod registry;

#[cfg(test)]
pub(crate) mod stub;

pub use model::{ClassificationOptions, ModelDescriptor};
pub use registry::ModelRegistry;

use crate::consensus::ClassificationResult;
use crate::error::ClassifierError;
use async_trait::async_trait;
use image::DynamicImage;

/// Runs one model against one image.
///
/// Implementations own model loading and any color-space conversion the
/// model needs. A result may hold any number of categories, including none.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(
        &self,
        image: &DynamicImage,
        model: &ModelDescriptor,
    ) -> Result<ClassificationResult, ClassifierError>;
}

