use std::sync::Arc;

use crate::domain::{
    ingredient::ports::{ImageStore, IngredientClassifier},
    recipe::ports::RecipeRepository,
};

/// Settings the services read on every request. Fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSettings {
    pub confidence_threshold: f32,
    pub top_n: usize,
    pub placeholder_image_url: String,
}

/// Process-wide state shared by every request handler. Cloning only bumps
/// the reference counts.
pub struct Service<RR, IC, IS>
where
    RR: RecipeRepository,
    IC: IngredientClassifier,
    IS: ImageStore,
{
    pub(crate) recipe_repository: Arc<RR>,
    pub(crate) classifier: Arc<IC>,
    pub(crate) image_store: Arc<IS>,
    pub(crate) settings: Arc<ServiceSettings>,
}

impl<RR, IC, IS> Service<RR, IC, IS>
where
    RR: RecipeRepository,
    IC: IngredientClassifier,
    IS: ImageStore,
{
    pub fn new(
        recipe_repository: RR,
        classifier: IC,
        image_store: IS,
        settings: ServiceSettings,
    ) -> Self {
        Self {
            recipe_repository: Arc::new(recipe_repository),
            classifier: Arc::new(classifier),
            image_store: Arc::new(image_store),
            settings: Arc::new(settings),
        }
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }
}

impl<RR, IC, IS> Clone for Service<RR, IC, IS>
where
    RR: RecipeRepository,
    IC: IngredientClassifier,
    IS: ImageStore,
{
    fn clone(&self) -> Self {
        Self {
            recipe_repository: Arc::clone(&self.recipe_repository),
            classifier: Arc::clone(&self.classifier),
            image_store: Arc::clone(&self.image_store),
            settings: Arc::clone(&self.settings),
        }
    }
}
