use std::collections::HashMap;
use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::state::AppState;

pub const SESSION_COOKIE: &str = "session_id";

const LOGIN_PATH: &str = "/organiser/login";

/// Authenticated organiser attached to a session token.
#[derive(Debug, Clone, Serialize)]
pub struct OrganiserSession {
    pub organiser_id: i64,
    pub organiser_name: String,
    pub is_authenticated: bool,
}

/// In-process session registry keyed by opaque tokens. Sessions have an
/// explicit create/destroy lifecycle and exist only for the lifetime of
/// the process.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, OrganiserSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session for a logged-in organiser and returns its token.
    pub async fn create(&self, organiser_id: i64, organiser_name: String) -> String {
        let token = Uuid::new_v4().to_string();
        let session = OrganiserSession {
            organiser_id,
            organiser_name,
            is_authenticated: true,
        };
        self.inner.write().await.insert(token.clone(), session);
        token
    }

    pub async fn get(&self, token: &str) -> Option<OrganiserSession> {
        self.inner.read().await.get(token).cloned()
    }

    pub async fn destroy(&self, token: &str) {
        self.inner.write().await.remove(token);
    }
}

/// Pulls the session token out of the Cookie header, if any.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').find_map(|cookie| {
                let (name, value) = cookie.trim().split_once('=')?;
                (name == SESSION_COOKIE).then(|| value.to_string())
            })
        })
}

/// Set-Cookie value establishing a session.
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// Set-Cookie value clearing the session cookie on logout.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Rejection for unauthenticated requests to organiser pages: a redirect
/// to the login page rather than an error body.
pub struct AuthRedirect;

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        Redirect::to(LOGIN_PATH).into_response()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for OrganiserSession {
    type Rejection = AuthRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_session_token(&parts.headers).ok_or(AuthRedirect)?;
        let session = state.sessions.get(&token).await.ok_or(AuthRedirect)?;
        if !session.is_authenticated {
            return Err(AuthRedirect);
        }
        Ok(session)
    }
}
