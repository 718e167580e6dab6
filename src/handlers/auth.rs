use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use axum::Form;
use serde::{Deserialize, Serialize};

use crate::auth::{clear_session_cookie, extract_session_token, session_cookie};
use crate::models::organiser::Organiser;
use crate::models::settings::SiteSettings;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub organiser_id: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
struct LoginPage {
    settings: SiteSettings,
    organisers: Vec<Organiser>,
}

/// GET /organiser/login — page payload with the organiser directory so the
/// form can present known organisers.
pub async fn login_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let settings = state
        .store
        .get_settings()
        .await?
        .unwrap_or_else(SiteSettings::fallback);
    let organisers = state.store.list_organisers().await?;

    Ok(success(LoginPage { settings, organisers }, "Organiser login").into_response())
}

/// POST /organiser/login — on success sets the session cookie and redirects
/// to the dashboard; on failure answers 401 in place so the login page can
/// re-render with the message.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let organiser_id: i64 = form
        .organiser_id
        .as_deref()
        .unwrap_or("")
        .trim()
        .parse()
        .map_err(|_| AppError::AuthError("Unknown organiser".to_string()))?;

    let organiser = state
        .store
        .get_organiser(organiser_id)
        .await?
        .ok_or_else(|| AppError::AuthError("Unknown organiser".to_string()))?;

    // An organiser with no configured secret cannot log in at all.
    let secret = state
        .organiser_secrets
        .get(&organiser_id)
        .ok_or_else(|| AppError::AuthError("Unknown organiser".to_string()))?;

    if form.password.as_deref().unwrap_or("") != secret {
        return Err(AppError::AuthError("Incorrect password".to_string()));
    }

    let token = state
        .sessions
        .create(organiser.organiser_id, organiser.name)
        .await;

    tracing::info!(organiser_id, "Organiser logged in");

    Ok((
        AppendHeaders([(header::SET_COOKIE, session_cookie(&token))]),
        Redirect::to("/organiser/"),
    )
        .into_response())
}

/// POST /organiser/logout — destroys the session and clears the cookie.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = extract_session_token(&headers) {
        state.sessions.destroy(&token).await;
    }

    (
        AppendHeaders([(header::SET_COOKIE, clear_session_cookie())]),
        Redirect::to("/organiser/login"),
    )
        .into_response()
}
