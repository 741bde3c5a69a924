use std::path::Path;

use tracing::{info, instrument, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{Recipe, RecipeCorpus},
        ports::RecipeRepository,
    },
};

/// Recipe corpus held in memory for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct InMemoryRecipeRepository {
    corpus: RecipeCorpus,
}

impl InMemoryRecipeRepository {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            corpus: RecipeCorpus::new(recipes),
        }
    }

    /// Loads a newline-delimited JSON file, one recipe per line.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub async fn load(path: &Path) -> Result<Self, CoreError> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            CoreError::CorpusError(format!("failed to read {}: {}", path.display(), e))
        })?;

        let recipes = parse_corpus(&content);
        info!(recipes = recipes.len(), "Recipe corpus loaded");

        Ok(Self::new(recipes))
    }
}

/// Parses newline-delimited JSON recipes. Blank lines are ignored and lines
/// that are not a valid recipe are logged and skipped.
pub fn parse_corpus(content: &str) -> Vec<Recipe> {
    let mut recipes = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Recipe>(line) {
            Ok(recipe) => recipes.push(recipe),
            Err(e) => {
                warn!(line = index + 1, error = %e, "Invalid recipe line ignored");
            }
        }
    }

    recipes
}

impl RecipeRepository for InMemoryRecipeRepository {
    async fn corpus(&self) -> Result<RecipeCorpus, CoreError> {
        Ok(self.corpus.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const CORPUS: &str = r#"{"recipe_title": "Salsa", "ingredients": ["tomato", "onion", "lime"], "directions": ["Chop.", "Mix."]}

{"recipe_title": "Broken", "ingredients": ["tomato"
not json at all
{"recipe_title": "Plain Rice", "ingredients": ["rice", "water"], "directions": ["Boil."]}
{"ingredients": ["no title"], "directions": []}
"#;

    #[test]
    fn test_parse_corpus_skips_malformed_lines() {
        let recipes = parse_corpus(CORPUS);

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].title, "Salsa");
        assert_eq!(recipes[0].ingredients, vec!["tomato", "onion", "lime"]);
        assert_eq!(recipes[0].directions, vec!["Chop.", "Mix."]);
        assert_eq!(recipes[1].title, "Plain Rice");
    }

    #[test]
    fn test_parse_corpus_defaults_missing_lists() {
        let recipes = parse_corpus(r#"{"recipe_title": "Water"}"#);

        assert_eq!(recipes.len(), 1);
        assert!(recipes[0].ingredients.is_empty());
        assert!(recipes[0].directions.is_empty());
    }

    #[tokio::test]
    async fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CORPUS.as_bytes()).unwrap();

        let repository = InMemoryRecipeRepository::load(file.path()).await.unwrap();
        let corpus = repository.corpus().await.unwrap();

        assert_eq!(corpus.len(), 2);
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let result = InMemoryRecipeRepository::load(Path::new("/nonexistent/recipes.json")).await;

        assert!(matches!(result, Err(CoreError::CorpusError(_))));
    }
}
