use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Form;

use crate::auth::OrganiserSession;
use crate::models::settings::{SettingsForm, SiteSettings};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

/// GET /organiser/settings — current settings, or the fallback before the
/// first write.
pub async fn settings_page(
    _session: OrganiserSession,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let settings = state
        .store
        .get_settings()
        .await?
        .unwrap_or_else(SiteSettings::fallback);

    Ok(success(settings, "Site settings").into_response())
}

/// POST /organiser/settings — full replace of the singleton row.
pub async fn update_settings(
    _session: OrganiserSession,
    State(state): State<AppState>,
    Form(form): Form<SettingsForm>,
) -> Result<Response, AppError> {
    let (site_name, site_description) = form.validate()?;
    let settings = state
        .store
        .upsert_settings(&site_name, &site_description)
        .await?;

    Ok(success(settings, "Settings updated").into_response())
}
