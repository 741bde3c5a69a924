use axum::{
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
};
use pantrycam_core::domain::ingredient::{entities::UploadedImage, ports::IngredientDetectionService};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

pub const IMAGES_FIELD: &str = "images";
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10 MB

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UploadImagesResponse {
    /// One label per uploaded image, in upload order.
    #[serde(rename = "detectedIngredients")]
    pub detected_ingredients: Vec<String>,
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadImagesRequest {
    #[schema(value_type = Vec<String>, format = Binary)]
    pub images: Vec<Vec<u8>>,
}

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge(e.body_text());
    }

    error!("Failed to read multipart field: {}", e);
    ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
}

#[utoipa::path(
    post,
    path = "/upload",
    tag = "ingredients",
    summary = "Detect ingredients in photos",
    description = "Accepts one or more images in the multipart field `images`. Every image is stored and classified; each one yields an ingredient label or \"No ingredient detected\".",
    request_body(content_type = "multipart/form-data", content = UploadImagesRequest),
    responses(
        (status = 200, description = "One label per image", body = UploadImagesResponse),
        (status = 400, description = "Missing or empty `images` field", body = ApiErrorResponse),
        (status = 413, description = "Image too large", body = ApiErrorResponse),
        (status = 500, description = "Classification failed", body = ApiErrorResponse)
    )
)]
pub async fn upload_images(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<UploadImagesResponse>, ApiError> {
    let mut images: Vec<UploadedImage> = Vec::new();
    let mut has_images_field = false;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(IMAGES_FIELD) {
            continue;
        }
        has_images_field = true;

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(multipart_error)?;

        // Browsers send an empty, unnamed part when no file was picked
        if file_name.is_empty() && data.is_empty() {
            continue;
        }

        if data.len() > MAX_IMAGE_SIZE {
            warn!(file_name = %file_name, size = data.len(), "Image too large");
            return Err(ApiError::PayloadTooLarge(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        images.push(UploadedImage::new(file_name, content_type, data));
    }

    if !has_images_field {
        return Err(ApiError::BadRequest(format!(
            "Missing '{}' field",
            IMAGES_FIELD
        )));
    }

    if images.is_empty() {
        return Err(ApiError::BadRequest("No images uploaded".to_string()));
    }

    let detections = state
        .service
        .detect_ingredients(images)
        .await
        .map_err(ApiError::from)?;

    info!(count = detections.len(), "Ingredients detected");

    Ok(Response::OK(UploadImagesResponse {
        detected_ingredients: detections.into_iter().map(|d| d.label).collect(),
    }))
}
