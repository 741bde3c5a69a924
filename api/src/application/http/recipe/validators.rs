use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecommendRecipesValidator {
    /// Labels returned by `/upload`, possibly edited by the user.
    #[serde(default)]
    #[validate(length(max = 100, message = "at most 100 ingredients are accepted"))]
    pub ingredients: Vec<String>,

    /// Chosen meats; "none" means no meat.
    #[serde(default)]
    #[validate(length(max = 20, message = "at most 20 meats are accepted"))]
    pub meat: Vec<String>,

    /// Number of recipes to return, defaults to the server setting.
    #[serde(default)]
    #[validate(range(min = 1, max = 50, message = "limit must be between 1 and 50"))]
    pub limit: Option<usize>,
}
