use tracing::{info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::{
        entities::{Detection, UploadedImage},
        ports::{ImageStore, IngredientClassifier, IngredientDetectionService},
    },
    recipe::ports::RecipeRepository,
};

impl<RR, IC, IS> IngredientDetectionService for Service<RR, IC, IS>
where
    RR: RecipeRepository,
    IC: IngredientClassifier,
    IS: ImageStore,
{
    #[instrument(skip(self, images), fields(image_count = images.len()))]
    async fn detect_ingredients(
        &self,
        images: Vec<UploadedImage>,
    ) -> Result<Vec<Detection>, CoreError> {
        if images.is_empty() {
            return Err(CoreError::EmptyUpload);
        }

        let mut detections = Vec::with_capacity(images.len());

        // Images are handled one after the other, in upload order
        for image in &images {
            if image.data.is_empty() {
                return Err(CoreError::InvalidImage(format!(
                    "{} is empty",
                    image.file_name
                )));
            }

            let stored = self.image_store.save(image).await?;
            let classification = match self.classifier.classify(image).await {
                Ok(classification) => classification,
                Err(e) => {
                    // Unclassifiable uploads are not kept
                    if let Err(remove_error) = self.image_store.remove(&stored).await {
                        warn!(
                            stored_as = %stored.file_name,
                            error = %remove_error,
                            "Failed to remove unclassified image"
                        );
                    }
                    return Err(e);
                }
            };
            let detection =
                Detection::from_classification(classification, self.settings.confidence_threshold);

            info!(
                stored_as = %stored.file_name,
                label = %detection.label,
                confidence = detection.confidence,
                "Image classified"
            );

            detections.push(detection);
        }

        Ok(detections)
    }
}
