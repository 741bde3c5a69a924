use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::entities::{Classification, Detection, StoredImage, UploadedImage},
};

/// Image classifier that maps one picture to one ingredient label
#[cfg_attr(test, mockall::automock)]
pub trait IngredientClassifier: Send + Sync {
    /// Short backend name, reported by the readiness check
    fn name(&self) -> &'static str;

    fn classify(
        &self,
        image: &UploadedImage,
    ) -> impl Future<Output = Result<Classification, CoreError>> + Send;
}

/// Storage for uploaded images
#[cfg_attr(test, mockall::automock)]
pub trait ImageStore: Send + Sync {
    fn save(
        &self,
        image: &UploadedImage,
    ) -> impl Future<Output = Result<StoredImage, CoreError>> + Send;

    /// Drops an image that was saved but could not be classified.
    fn remove(&self, stored: &StoredImage) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for turning uploads into detected ingredients
pub trait IngredientDetectionService: Send + Sync {
    fn detect_ingredients(
        &self,
        images: Vec<UploadedImage>,
    ) -> impl Future<Output = Result<Vec<Detection>, CoreError>> + Send;
}
