pub mod attendee;
pub mod auth;
pub mod organiser;
pub mod settings;

use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::models::settings::SiteSettings;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "marquee-api",
    };

    success(payload, "Health check successful").into_response()
}

/// GET / — landing payload with the resolved site settings.
pub async fn landing(State(state): State<AppState>) -> Result<Response, AppError> {
    let settings = state
        .store
        .get_settings()
        .await?
        .unwrap_or_else(SiteSettings::fallback);

    Ok(success(settings, "Welcome").into_response())
}

/// Unmatched routes get a diagnostic naming the method and path.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    AppError::NotFound(format!("No route for {method} {uri}")).into_response()
}
