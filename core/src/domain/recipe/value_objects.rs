use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::entities::RecipeMatch;

pub const NO_MATCH_MESSAGE: &str = "No matching recipes found.";

/// Meat choice meaning "no meat".
const NO_MEAT: &str = "none";

#[derive(Debug, Clone, Default)]
pub struct RecommendInput {
    pub ingredients: Vec<String>,
    pub meats: Vec<String>,
    /// Falls back to the configured top-N when `None`.
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendedRecipe {
    pub recipe_title: String,
    pub score: usize,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image: String,
}

impl RecommendedRecipe {
    pub fn from_match(recipe_match: RecipeMatch<'_>, image: &str) -> Self {
        Self {
            recipe_title: recipe_match.recipe.title.clone(),
            score: recipe_match.score,
            ingredients: recipe_match.recipe.ingredients.clone(),
            instructions: recipe_match.recipe.directions.clone(),
            image: image.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub detected: Vec<String>,
    pub recommended: Vec<RecommendedRecipe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Appends the chosen meats (lower-cased, "none" dropped) to the detected
/// ingredients, then removes blanks and repeated entries.
pub fn combine_ingredients(ingredients: Vec<String>, meats: Vec<String>) -> Vec<String> {
    let meats = meats
        .into_iter()
        .map(|meat| meat.trim().to_lowercase())
        .filter(|meat| meat != NO_MEAT);

    let mut combined: Vec<String> = Vec::new();
    for ingredient in ingredients
        .into_iter()
        .map(|i| i.trim().to_string())
        .chain(meats)
    {
        if !ingredient.is_empty() && !combined.contains(&ingredient) {
            combined.push(ingredient);
        }
    }

    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_meats_are_lowercased_and_appended() {
        let combined = combine_ingredients(strings(&["tomato"]), strings(&["Chicken", "Beef"]));

        assert_eq!(combined, vec!["tomato", "chicken", "beef"]);
    }

    #[test]
    fn test_none_meat_is_dropped() {
        let combined = combine_ingredients(strings(&["onion"]), strings(&["None", "NONE"]));

        assert_eq!(combined, vec!["onion"]);
    }

    #[test]
    fn test_duplicates_and_blanks_removed() {
        let combined = combine_ingredients(
            strings(&["tomato", " tomato", "", "onion"]),
            strings(&["pork", "pork"]),
        );

        assert_eq!(combined, vec!["tomato", "onion", "pork"]);
    }
}
