use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::ReadinessStatus, ports::HealthCheckService},
    ingredient::ports::{ImageStore, IngredientClassifier},
    recipe::ports::RecipeRepository,
};

impl<RR, IC, IS> HealthCheckService for Service<RR, IC, IS>
where
    RR: RecipeRepository,
    IC: IngredientClassifier,
    IS: ImageStore,
{
    async fn readiness(&self) -> Result<ReadinessStatus, CoreError> {
        let corpus = self.recipe_repository.corpus().await?;

        Ok(ReadinessStatus {
            recipes_loaded: corpus.len(),
            classifier: self.classifier.name().to_string(),
        })
    }
}
