use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let attendee = Router::new()
        .route("/", get(handlers::attendee::list_events))
        .route("/event/:id", get(handlers::attendee::event_detail))
        .route("/book/:id", post(handlers::attendee::book_event));

    let organiser = Router::new()
        .route("/", get(handlers::organiser::dashboard))
        .route(
            "/login",
            get(handlers::auth::login_page).post(handlers::auth::login),
        )
        .route("/logout", post(handlers::auth::logout))
        .route(
            "/settings",
            get(handlers::settings::settings_page).post(handlers::settings::update_settings),
        )
        .route(
            "/create-event",
            get(handlers::organiser::create_event_page).post(handlers::organiser::create_event),
        )
        .route(
            "/edit-event/:id",
            get(handlers::organiser::edit_event_page).post(handlers::organiser::edit_event),
        )
        .route(
            "/publish-event/:id",
            post(handlers::organiser::publish_event),
        )
        .route("/delete-event/:id", post(handlers::organiser::delete_event));

    Router::new()
        .route("/", get(handlers::landing))
        .route("/health", get(handlers::health_check))
        .nest("/attendee", attendee)
        .nest("/organiser", organiser)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
        .with_state(state)
}
