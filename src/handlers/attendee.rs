use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Form;

use crate::models::booking::BookingForm;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

/// GET /attendee — published events with booking totals and availability,
/// soonest first.
pub async fn list_events(State(state): State<AppState>) -> Result<Response, AppError> {
    let events = state.store.list_published().await?;
    Ok(success(events, "Published events").into_response())
}

/// GET /attendee/event/:id — drafts are invisible here.
pub async fn event_detail(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Response, AppError> {
    let event = state
        .store
        .get_published_event(event_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {event_id} not found")))?;

    Ok(success(event, "Event detail").into_response())
}

/// POST /attendee/book/:id — validates the form, then hands the request to
/// the transactional booking path.
pub async fn book_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Form(form): Form<BookingForm>,
) -> Result<Response, AppError> {
    let request = form.validate()?;
    let booking = state.store.create_booking(event_id, request).await?;

    tracing::info!(
        booking_id = booking.booking_id,
        event_id,
        "Booking confirmed"
    );

    Ok(created(booking, "Booking confirmed").into_response())
}
