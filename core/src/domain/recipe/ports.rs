use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::RecipeCorpus,
        value_objects::{Recommendation, RecommendInput},
    },
};

/// Repository trait for the recipe corpus
#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn corpus(&self) -> impl Future<Output = Result<RecipeCorpus, CoreError>> + Send;
}

/// Service trait for recipe recommendation
pub trait RecipeService: Send + Sync {
    fn recommend(
        &self,
        input: RecommendInput,
    ) -> impl Future<Output = Result<Recommendation, CoreError>> + Send;
}
