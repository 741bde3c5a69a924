use tracing::{debug, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::ports::{ImageStore, IngredientClassifier},
    recipe::{
        matcher::match_recipes,
        ports::{RecipeRepository, RecipeService},
        value_objects::{
            NO_MATCH_MESSAGE, RecommendInput, Recommendation, RecommendedRecipe,
            combine_ingredients,
        },
    },
};

impl<RR, IC, IS> RecipeService for Service<RR, IC, IS>
where
    RR: RecipeRepository,
    IC: IngredientClassifier,
    IS: ImageStore,
{
    #[instrument(skip(self, input))]
    async fn recommend(&self, input: RecommendInput) -> Result<Recommendation, CoreError> {
        let limit = input.limit.unwrap_or(self.settings.top_n);
        let detected = combine_ingredients(input.ingredients, input.meats);

        let corpus = self.recipe_repository.corpus().await?;
        let matches = match_recipes(detected.as_slice(), &corpus);

        debug!(
            detected = ?detected,
            matched = matches.len(),
            corpus_size = corpus.len(),
            "Recipes matched"
        );

        let recommended: Vec<RecommendedRecipe> = matches
            .into_iter()
            .take(limit)
            .map(|m| RecommendedRecipe::from_match(m, &self.settings.placeholder_image_url))
            .collect();

        let message = recommended
            .is_empty()
            .then(|| NO_MATCH_MESSAGE.to_string());

        Ok(Recommendation {
            detected,
            recommended,
            message,
        })
    }
}
