use std::{ops::Deref, sync::Arc};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    #[serde(rename = "recipe_title")]
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub directions: Vec<String>,
}

impl Recipe {
    pub fn new(
        title: impl Into<String>,
        ingredients: Vec<String>,
        directions: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            ingredients,
            directions,
        }
    }

    /// All ingredient lines joined by a space and lower-cased.
    pub fn ingredient_text(&self) -> String {
        self.ingredients.join(" ").to_lowercase()
    }
}

/// Read-only recipe collection, shared between requests.
#[derive(Debug, Clone)]
pub struct RecipeCorpus(Arc<[Recipe]>);

impl RecipeCorpus {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self(Arc::from(recipes))
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl Deref for RecipeCorpus {
    type Target = [Recipe];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Recipe>> for RecipeCorpus {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self::new(recipes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeMatch<'a> {
    pub recipe: &'a Recipe,
    pub score: usize,
}
