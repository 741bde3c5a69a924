use axum::extract::State;
use pantrycam_core::domain::recipe::{
    ports::RecipeService,
    value_objects::{RecommendInput, Recommendation, RecommendedRecipe},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::RecommendRecipesValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecommendRecipesResponse {
    /// Ingredients the ranking was computed from, meats included.
    pub detected: Vec<String>,
    pub recommended: Vec<RecommendedRecipe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Recommendation> for RecommendRecipesResponse {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            detected: recommendation.detected,
            recommended: recommendation.recommended,
            message: recommendation.message,
        }
    }
}

#[utoipa::path(
    post,
    path = "/recommend",
    tag = "recipes",
    summary = "Recommend recipes",
    description = "Ranks the recipe corpus by how many of the given ingredients and meats appear in each recipe's ingredient list.",
    request_body = RecommendRecipesValidator,
    responses(
        (status = 200, body = RecommendRecipesResponse),
        (status = 400, description = "Malformed JSON body", body = ApiErrorResponse),
        (status = 422, description = "Validation failed", body = ApiErrorResponse)
    )
)]
pub async fn recommend_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecommendRecipesValidator>,
) -> Result<Response<RecommendRecipesResponse>, ApiError> {
    let recommendation = state
        .service
        .recommend(RecommendInput {
            ingredients: payload.ingredients,
            meats: payload.meat,
            limit: payload.limit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(recommendation.into()))
}
