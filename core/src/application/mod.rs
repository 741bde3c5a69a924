use tracing::info;

use crate::{
    domain::common::{
        PantryConfig,
        entities::app_errors::CoreError,
        services::{Service, ServiceSettings},
    },
    infrastructure::{
        classifier::ClassifierBackend, image_store::LocalImageStore,
        recipe::InMemoryRecipeRepository,
    },
};

pub type PantryService = Service<InMemoryRecipeRepository, ClassifierBackend, LocalImageStore>;

/// Loads the recipe corpus and the classifier, prepares the upload
/// directory, and wires them into the process-wide service.
pub async fn create_service(config: PantryConfig) -> Result<PantryService, CoreError> {
    let recipe_repository = InMemoryRecipeRepository::load(&config.corpus.path).await?;
    let classifier = ClassifierBackend::from_config(&config.classifier)?;
    let image_store =
        LocalImageStore::new(config.uploads.directory.clone(), config.uploads.public_path).await?;

    let settings = ServiceSettings {
        confidence_threshold: config.classifier.confidence_threshold,
        top_n: config.recommendation.top_n,
        placeholder_image_url: image_store.url_for(&config.recommendation.placeholder_image),
    };

    info!(
        uploads = %image_store.directory().display(),
        top_n = settings.top_n,
        confidence_threshold = settings.confidence_threshold,
        "Service created"
    );

    Ok(Service::new(
        recipe_repository,
        classifier,
        image_store,
        settings,
    ))
}
