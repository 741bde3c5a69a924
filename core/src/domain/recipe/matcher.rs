use crate::domain::{
    ingredient::entities::is_sentinel,
    recipe::entities::{Recipe, RecipeMatch},
};

/// Lower-cases the query, drops blanks and the sentinel label, and removes
/// duplicates while keeping first occurrences.
pub fn normalize_query<S: AsRef<str>>(ingredients: &[S]) -> Vec<String> {
    let mut query: Vec<String> = Vec::with_capacity(ingredients.len());

    for ingredient in ingredients {
        let ingredient = ingredient.as_ref().trim();
        if ingredient.is_empty() || is_sentinel(ingredient) {
            continue;
        }

        let ingredient = ingredient.to_lowercase();
        if !query.contains(&ingredient) {
            query.push(ingredient);
        }
    }

    query
}

/// Scores every recipe by how many query ingredients occur as a substring of
/// its ingredient text. Recipes scoring zero are dropped; the rest are sorted
/// by descending score, keeping corpus order between equal scores.
pub fn match_recipes<'a, S: AsRef<str>>(
    ingredients: &[S],
    recipes: &'a [Recipe],
) -> Vec<RecipeMatch<'a>> {
    let query = normalize_query(ingredients);
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<RecipeMatch<'a>> = recipes
        .iter()
        .filter_map(|recipe| {
            let text = recipe.ingredient_text();
            let score = query
                .iter()
                .filter(|ingredient| text.contains(ingredient.as_str()))
                .count();

            (score > 0).then_some(RecipeMatch { recipe, score })
        })
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingredient::entities::NO_INGREDIENT_DETECTED;

    fn recipe(title: &str, ingredients: &[&str]) -> Recipe {
        Recipe::new(
            title,
            ingredients.iter().map(|i| i.to_string()).collect(),
            vec!["Mix.".to_string()],
        )
    }

    fn corpus() -> Vec<Recipe> {
        vec![
            recipe("Salsa", &["tomato", "onion", "lime"]),
            recipe("Pea Soup", &["2 cups frozen peas", "1 onion, diced", "stock"]),
            recipe("Fruit Bowl", &["apple", "banana", "kiwi"]),
            recipe("Tomato Toast", &["bread", "Tomato", "olive oil"]),
            recipe("Onion Rings", &["ONION", "flour", "egg"]),
        ]
    }

    fn titles<'a>(matches: &[RecipeMatch<'a>]) -> Vec<&'a str> {
        matches.iter().map(|m| m.recipe.title.as_str()).collect()
    }

    #[test]
    fn test_salsa_scores_two() {
        let recipes = vec![recipe("Salsa", &["tomato", "onion", "lime"])];

        let matches = match_recipes(&["tomato", "onion"], &recipes);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].recipe.title, "Salsa");
        assert_eq!(matches[0].score, 2);
    }

    #[test]
    fn test_substring_matches_plural() {
        let recipes = corpus();

        let matches = match_recipes(&["pea"], &recipes);

        assert_eq!(titles(&matches), vec!["Pea Soup"]);
        assert_eq!(matches[0].score, 1);
    }

    #[test]
    fn test_sentinel_is_filtered_out() {
        let recipes = vec![recipe("Mystery", &["no ingredient detected", "water"])];

        let matches = match_recipes(&[NO_INGREDIENT_DETECTED], &recipes);

        assert!(matches.is_empty());
    }

    #[test]
    fn test_sentinel_does_not_count_towards_score() {
        let recipes = vec![recipe("Sentinel Stew", &["tomato", "no ingredient detected"])];

        let matches = match_recipes(&["tomato", NO_INGREDIENT_DETECTED], &recipes);

        assert_eq!(matches[0].score, 1);
    }

    #[test]
    fn test_query_and_corpus_are_case_insensitive() {
        let recipes = corpus();

        let matches = match_recipes(&["TOMATO"], &recipes);

        assert_eq!(titles(&matches), vec!["Salsa", "Tomato Toast"]);
    }

    #[test]
    fn test_sorted_by_score_with_stable_ties() {
        let recipes = corpus();

        let matches = match_recipes(&["onion", "tomato", "peas"], &recipes);

        assert_eq!(
            titles(&matches),
            vec!["Salsa", "Pea Soup", "Tomato Toast", "Onion Rings"]
        );
        assert_eq!(
            matches.iter().map(|m| m.score).collect::<Vec<_>>(),
            vec![2, 2, 1, 1]
        );
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let recipes = corpus();
        let empty: [&str; 0] = [];

        assert!(match_recipes(&empty, &recipes).is_empty());
        assert!(match_recipes(&["", "   "], &recipes).is_empty());
    }

    #[test]
    fn test_empty_corpus_matches_nothing() {
        assert!(match_recipes(&["tomato"], &[]).is_empty());
    }

    #[test]
    fn test_duplicate_ingredients_count_once() {
        let recipes = corpus();

        let matches = match_recipes(&["tomato", "Tomato", " tomato "], &recipes);

        assert!(matches.iter().all(|m| m.score == 1));
    }

    #[test]
    fn test_scores_are_bounded_and_non_increasing() {
        let recipes = corpus();
        let queries: Vec<Vec<&str>> = vec![
            vec!["onion"],
            vec!["apple", "kiwi", "banana", "onion"],
            vec!["egg", "flour", "onion", "tomato", "lime", "stock"],
            vec!["o", "a", "e"],
        ];

        for query in queries {
            let matches = match_recipes(&query, &recipes);

            for m in &matches {
                assert!(m.score >= 1);
                assert!(m.score <= query.len());
            }
            assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn test_normalize_query_keeps_first_occurrence_order() {
        let query = normalize_query(&["Onion", "tomato", "onion", NO_INGREDIENT_DETECTED, ""]);

        assert_eq!(query, vec!["onion", "tomato"]);
    }
}
