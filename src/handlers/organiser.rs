use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Form;
use serde::Serialize;

use crate::auth::OrganiserSession;
use crate::models::event::{Event, EventForm, EventWithBookings};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, empty_success, success};

#[derive(Serialize)]
struct Dashboard {
    organiser_name: String,
    published: Vec<EventWithBookings>,
    drafts: Vec<Event>,
}

/// GET /organiser/ — published events with totals plus unpublished drafts.
pub async fn dashboard(
    session: OrganiserSession,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let published = state.store.list_published().await?;
    let drafts = state.store.list_drafts().await?;

    let dashboard = Dashboard {
        organiser_name: session.organiser_name,
        published,
        drafts,
    };

    Ok(success(dashboard, "Organiser dashboard").into_response())
}

/// GET /organiser/create-event — blank form payload.
pub async fn create_event_page(_session: OrganiserSession) -> Response {
    empty_success("Create event").into_response()
}

/// POST /organiser/create-event — new events start as drafts owned by the
/// logged-in organiser.
pub async fn create_event(
    session: OrganiserSession,
    State(state): State<AppState>,
    Form(form): Form<EventForm>,
) -> Result<Response, AppError> {
    let new_event = form.validate()?;
    let event = state
        .store
        .create_event(new_event, session.organiser_id)
        .await?;

    tracing::info!(event_id = event.event_id, "Event created");

    Ok(created(event, "Event created").into_response())
}

/// GET /organiser/edit-event/:id — any status; 404 for unknown ids.
pub async fn edit_event_page(
    _session: OrganiserSession,
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Response, AppError> {
    let event = state
        .store
        .get_event(event_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {event_id} does not exist")))?;

    Ok(success(event, "Edit event").into_response())
}

/// POST /organiser/edit-event/:id — editable in both states; status is
/// never changed here.
pub async fn edit_event(
    _session: OrganiserSession,
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Form(form): Form<EventForm>,
) -> Result<Response, AppError> {
    let new_event = form.validate()?;
    let event = state.store.update_event(event_id, new_event).await?;

    Ok(success(event, "Event updated").into_response())
}

/// POST /organiser/publish-event/:id — silent no-op unless the event is
/// currently a draft.
pub async fn publish_event(
    _session: OrganiserSession,
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Response, AppError> {
    state.store.publish_event(event_id).await?;

    tracing::info!(event_id, "Publish requested");

    Ok(empty_success("Event published").into_response())
}

/// POST /organiser/delete-event/:id — works in any state; bookings cascade.
pub async fn delete_event(
    _session: OrganiserSession,
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Response, AppError> {
    state.store.delete_event(event_id).await?;

    tracing::info!(event_id, "Event deleted");

    Ok(empty_success("Event deleted").into_response())
}
