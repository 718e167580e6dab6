//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::collections::HashMap;

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tower::ServiceExt;

use marquee_server::routes::create_routes;
use marquee_server::state::AppState;
use marquee_server::store::Store;

// Seeded by the organiser migration.
pub const MAIN_STAGE_ID: i64 = 1;
pub const COMMUNITY_HALL_ID: i64 = 2;

pub const MAIN_STAGE_PASSWORD: &str = "main-stage-secret";
pub const COMMUNITY_HALL_PASSWORD: &str = "community-hall-secret";

/// Build the full app router over a test pool, with known organiser
/// secrets in place of environment configuration.
pub fn build_test_app(pool: PgPool) -> Router {
    let mut secrets = HashMap::new();
    secrets.insert(MAIN_STAGE_ID, MAIN_STAGE_PASSWORD.to_string());
    secrets.insert(COMMUNITY_HALL_ID, COMMUNITY_HALL_PASSWORD.to_string());

    create_routes(AppState::new(Store::new(pool), secrets))
}

/// Send a request and return status, headers and the JSON body (Null when
/// the body is empty, e.g. for redirects).
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    form_body: Option<&str>,
    cookie: Option<&str>,
) -> (StatusCode, HeaderMap, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = match form_body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, headers, json)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, json) = send(app, "GET", uri, None, None).await;
    (status, json)
}

pub async fn get_json_with_cookie(
    app: Router,
    uri: &str,
    cookie: &str,
) -> (StatusCode, serde_json::Value) {
    let (status, _, json) = send(app, "GET", uri, None, Some(cookie)).await;
    (status, json)
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, json) = send(app, "POST", uri, Some(body), None).await;
    (status, json)
}

pub async fn post_form_with_cookie(
    app: Router,
    uri: &str,
    body: &str,
    cookie: &str,
) -> (StatusCode, serde_json::Value) {
    let (status, _, json) = send(app, "POST", uri, Some(body), Some(cookie)).await;
    (status, json)
}

/// Log in and return the session cookie (`session_id=<token>`).
pub async fn login_as(app: Router, organiser_id: i64, password: &str) -> String {
    let body = format!("organiser_id={organiser_id}&password={password}");
    let (status, headers, _) = send(app, "POST", "/organiser/login", Some(&body), None).await;
    assert_eq!(status, StatusCode::SEE_OTHER, "login should redirect");

    let set_cookie = headers
        .get(header::SET_COOKIE)
        .expect("login should set the session cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

/// Insert an event directly, bypassing the HTTP surface.
pub async fn seed_event(
    pool: &PgPool,
    title: &str,
    status: &str,
    event_date: NaiveDate,
    full_price_tickets: i32,
    full_price_cost: Decimal,
    concession_tickets: i32,
    concession_cost: Decimal,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO events
            (title, description, event_date,
             full_price_tickets, full_price_cost,
             concession_tickets, concession_cost,
             status, organiser_id,
             published_date)
        VALUES ($1, 'seeded for tests', $2, $3, $4, $5, $6, $7, $8,
                CASE WHEN $7 = 'published' THEN now() ELSE NULL END)
        RETURNING event_id
        "#,
    )
    .bind(title)
    .bind(event_date)
    .bind(full_price_tickets)
    .bind(full_price_cost)
    .bind(concession_tickets)
    .bind(concession_cost)
    .bind(status)
    .bind(MAIN_STAGE_ID)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert a booking row directly.
pub async fn seed_booking(
    pool: &PgPool,
    event_id: i64,
    attendee_name: &str,
    full_price_tickets: i32,
    concession_tickets: i32,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO bookings
            (event_id, attendee_name,
             full_price_tickets_booked, concession_tickets_booked, total_cost)
        VALUES ($1, $2, $3, $4, 0)
        RETURNING booking_id
        "#,
    )
    .bind(event_id)
    .bind(attendee_name)
    .bind(full_price_tickets)
    .bind(concession_tickets)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_bookings(pool: &PgPool, event_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings WHERE event_id = $1")
        .bind(event_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn puppy_yoga_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 12).unwrap()
}

pub fn decimal(s: &str) -> Decimal {
    s.parse().unwrap()
}
