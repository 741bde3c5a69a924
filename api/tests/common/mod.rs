use std::{io::Write, path::Path, sync::Arc};

use axum_test::TestServer;
use clap::Parser;
use pantrycam_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};

pub const RECIPES: &[&str] = &[
    r#"{"recipe_title": "Tomato Soup", "ingredients": ["4 tomatoes", "1 onion", "salt"], "directions": ["Simmer.", "Blend."]}"#,
    r#"{"recipe_title": "Chicken Curry", "ingredients": ["1 lb chicken", "2 tomatoes", "1 onion", "curry powder"], "directions": ["Brown the chicken.", "Add the rest."]}"#,
    r#"{"recipe_title": "Salsa", "ingredients": ["3 tomatoes", "1/2 onion", "1 jalepeno"], "directions": ["Chop.", "Mix."]}"#,
    r#"{"recipe_title": "Bruschetta", "ingredients": ["2 tomatoes", "bread", "garlic"], "directions": ["Toast.", "Top."]}"#,
    r#"{"recipe_title": "Caprese", "ingredients": ["tomato", "mozzarella"], "directions": ["Slice."]}"#,
    r#"{"recipe_title": "Tomato Rice", "ingredients": ["rice", "tomato paste"], "directions": ["Cook."]}"#,
    r#"{"recipe_title": "Fruit Salad", "ingredients": ["banana", "apple", "kiwi"], "directions": ["Cut.", "Toss."]}"#,
];

/// Writes the recipe corpus and an upload directory with a placeholder
/// image under `dir`, then serves the app with the file-name classifier.
pub async fn test_server(dir: &Path, extra_args: &[&str]) -> TestServer {
    let corpus_path = dir.join("recipes.json");
    let mut corpus = std::fs::File::create(&corpus_path).unwrap();
    for recipe in RECIPES {
        writeln!(corpus, "{}", recipe).unwrap();
    }

    let upload_dir = dir.join("uploads");
    std::fs::create_dir_all(&upload_dir).unwrap();
    std::fs::write(upload_dir.join("placeholder.png"), b"placeholder").unwrap();

    let mut args = vec![
        "pantrycam".to_string(),
        "--recipes-path".to_string(),
        corpus_path.display().to_string(),
        "--upload-dir".to_string(),
        upload_dir.display().to_string(),
        "--classifier".to_string(),
        "file-name".to_string(),
    ];
    args.extend(extra_args.iter().map(|arg| arg.to_string()));

    let state = state(Arc::new(Args::parse_from(args))).await.unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}
