use super::handlers::upload_images::{__path_upload_images, upload_images};
use crate::application::http::server::app_state::AppState;

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(upload_images))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/upload", state.args.server.root_path),
            post(upload_images),
        )
        .layer(DefaultBodyLimit::max(state.args.server.max_request_bytes))
}
