use axum::extract::State;
use pantrycam_core::domain::health::{entities::ReadinessStatus, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness check",
    description = "Reports the number of loaded recipes and the active classifier.",
    responses(
        (status = 200, body = ReadinessStatus),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn ready(State(state): State<AppState>) -> Result<Response<ReadinessStatus>, ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    Ok(Response::OK(status))
}
