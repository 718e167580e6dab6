//! Integration tests for the organiser event-lifecycle screens.

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::{decimal, puppy_yoga_date};
use sqlx::PgPool;

async fn login(app: axum::Router) -> String {
    common::login_as(app, common::MAIN_STAGE_ID, common::MAIN_STAGE_PASSWORD).await
}

async fn published_date(pool: &PgPool, event_id: i64) -> Option<DateTime<Utc>> {
    sqlx::query_scalar("SELECT published_date FROM events WHERE event_id = $1")
        .bind(event_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test]
async fn test_create_event_starts_as_draft(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = login(app.clone()).await;

    let (status, json) = common::post_form_with_cookie(
        app.clone(),
        "/organiser/create-event",
        "title=Puppy+Yoga&description=Yoga+with+puppies&event_date=2026-09-12\
         &full_price_tickets=15&full_price_cost=12.50&concession_tickets=5&concession_cost=8.00",
        &cookie,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["title"], "Puppy Yoga");
    assert_eq!(json["data"]["status"], "draft");
    assert_eq!(json["data"]["organiser_id"], common::MAIN_STAGE_ID);
    assert!(json["data"]["published_date"].is_null());

    // Drafts are not attendee-visible.
    let (_, json) = common::get_json(app, "/attendee").await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test]
async fn test_create_event_with_missing_title_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = login(app.clone()).await;

    let (status, json) = common::post_form_with_cookie(
        app,
        "/organiser/create-event",
        "description=No+title&event_date=2026-09-12",
        &cookie,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
}

#[sqlx::test]
async fn test_create_event_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let (status, headers, _) = common::send(
        app,
        "POST",
        "/organiser/create-event",
        Some("title=T&description=D&event_date=2026-09-12"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(
        headers.get(axum::http::header::LOCATION).unwrap(),
        "/organiser/login"
    );
}

#[sqlx::test]
async fn test_edit_event_updates_fields_but_not_status(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = login(app.clone()).await;
    let event_id = common::seed_event(
        &pool,
        "Old Title",
        "published",
        puppy_yoga_date(),
        15,
        decimal("12.50"),
        5,
        decimal("8.00"),
    )
    .await;

    let (status, json) = common::post_form_with_cookie(
        app.clone(),
        &format!("/organiser/edit-event/{event_id}"),
        "title=New+Title&description=Updated&event_date=2026-11-01\
         &full_price_tickets=20&full_price_cost=15&concession_tickets=5&concession_cost=8",
        &cookie,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["title"], "New Title");
    assert_eq!(json["data"]["status"], "published");
    assert_eq!(json["data"]["full_price_tickets"], 20);
    assert_eq!(json["data"]["event_date"], "2026-11-01");
}

#[sqlx::test]
async fn test_edit_bumps_last_modified(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = login(app.clone()).await;
    let event_id = common::seed_event(
        &pool,
        "Event",
        "draft",
        puppy_yoga_date(),
        10,
        decimal("5"),
        0,
        decimal("0"),
    )
    .await;

    let before: DateTime<Utc> =
        sqlx::query_scalar("SELECT last_modified FROM events WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(&pool)
            .await
            .unwrap();

    let (status, _) = common::post_form_with_cookie(
        app,
        &format!("/organiser/edit-event/{event_id}"),
        "title=Event&description=Edited&event_date=2026-09-12",
        &cookie,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let after: DateTime<Utc> =
        sqlx::query_scalar("SELECT last_modified FROM events WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(after > before);
}

#[sqlx::test]
async fn test_edit_nonexistent_event_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = login(app.clone()).await;

    let (status, _) = common::post_form_with_cookie(
        app.clone(),
        "/organiser/edit-event/424242",
        "title=T&description=D&event_date=2026-09-12",
        &cookie,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) =
        common::get_json_with_cookie(app, "/organiser/edit-event/424242", &cookie).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_edit_page_shows_drafts_and_published(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = login(app.clone()).await;
    let event_id = common::seed_event(
        &pool,
        "Secret Draft",
        "draft",
        puppy_yoga_date(),
        10,
        decimal("5"),
        0,
        decimal("0"),
    )
    .await;

    let (status, json) =
        common::get_json_with_cookie(app, &format!("/organiser/edit-event/{event_id}"), &cookie)
            .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["title"], "Secret Draft");
}

#[sqlx::test]
async fn test_publish_makes_event_attendee_visible(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = login(app.clone()).await;
    let event_id = common::seed_event(
        &pool,
        "Soon Live",
        "draft",
        puppy_yoga_date(),
        10,
        decimal("5"),
        0,
        decimal("0"),
    )
    .await;
    assert!(published_date(&pool, event_id).await.is_none());

    let (status, _) = common::post_form_with_cookie(
        app.clone(),
        &format!("/organiser/publish-event/{event_id}"),
        "",
        &cookie,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(published_date(&pool, event_id).await.is_some());

    let (_, json) = common::get_json(app, "/attendee").await;
    assert_eq!(json["data"][0]["title"], "Soon Live");
}

#[sqlx::test]
async fn test_republish_does_not_overwrite_published_date(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = login(app.clone()).await;
    let event_id = common::seed_event(
        &pool,
        "Already Live",
        "published",
        puppy_yoga_date(),
        10,
        decimal("5"),
        0,
        decimal("0"),
    )
    .await;
    let first = published_date(&pool, event_id).await.unwrap();

    let (status, _) = common::post_form_with_cookie(
        app,
        &format!("/organiser/publish-event/{event_id}"),
        "",
        &cookie,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(published_date(&pool, event_id).await.unwrap(), first);
}

#[sqlx::test]
async fn test_publish_unknown_event_is_a_silent_no_op(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookie = login(app.clone()).await;

    let (status, _) =
        common::post_form_with_cookie(app, "/organiser/publish-event/424242", "", &cookie).await;

    assert_eq!(status, StatusCode::OK);
}

#[sqlx::test]
async fn test_delete_event_cascades_to_its_bookings_only(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = login(app.clone()).await;
    let doomed = common::seed_event(
        &pool,
        "Doomed",
        "published",
        puppy_yoga_date(),
        10,
        decimal("5"),
        0,
        decimal("0"),
    )
    .await;
    let survivor = common::seed_event(
        &pool,
        "Survivor",
        "published",
        puppy_yoga_date(),
        10,
        decimal("5"),
        0,
        decimal("0"),
    )
    .await;
    common::seed_booking(&pool, doomed, "Ada", 1, 0).await;
    common::seed_booking(&pool, doomed, "Grace", 2, 0).await;
    common::seed_booking(&pool, survivor, "Edsger", 1, 0).await;

    let (status, _) = common::post_form_with_cookie(
        app,
        &format!("/organiser/delete-event/{doomed}"),
        "",
        &cookie,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::count_bookings(&pool, doomed).await, 0);
    assert_eq!(common::count_bookings(&pool, survivor).await, 1);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events WHERE event_id = $1")
        .bind(doomed)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[sqlx::test]
async fn test_dashboard_splits_published_and_drafts(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let cookie = login(app.clone()).await;
    let live = common::seed_event(
        &pool,
        "Live",
        "published",
        puppy_yoga_date(),
        10,
        decimal("5"),
        0,
        decimal("0"),
    )
    .await;
    common::seed_event(
        &pool,
        "Draft",
        "draft",
        puppy_yoga_date(),
        10,
        decimal("5"),
        0,
        decimal("0"),
    )
    .await;
    common::seed_booking(&pool, live, "Ada", 2, 0).await;

    let (status, json) = common::get_json_with_cookie(app, "/organiser/", &cookie).await;

    assert_eq!(status, StatusCode::OK);
    let published = json["data"]["published"].as_array().unwrap();
    let drafts = json["data"]["drafts"].as_array().unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0]["full_booked"], 2);
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0]["title"], "Draft");
}
