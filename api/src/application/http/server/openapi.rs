use crate::application::http::{
    health::router::HealthApiDoc, ingredient::router::IngredientApiDoc,
    recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PantryCam API"
    ),
    nest(
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

/// Full document: nested groups plus the routes served from the root.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(IngredientApiDoc::openapi());
    openapi.merge(RecipeApiDoc::openapi());
    openapi
}
