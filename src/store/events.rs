use crate::models::event::{Event, EventWithBookings, NewEvent, STATUS_DRAFT, STATUS_PUBLISHED};
use crate::utils::error::AppError;

use super::Store;

/// Shared projection for event rows annotated with booking aggregates.
const EVENT_WITH_BOOKINGS: &str = r#"
    SELECT e.*,
           COALESCE(SUM(b.full_price_tickets_booked), 0)::INT AS full_booked,
           COALESCE(SUM(b.concession_tickets_booked), 0)::INT AS concession_booked,
           (e.full_price_tickets - COALESCE(SUM(b.full_price_tickets_booked), 0))::INT
               AS full_available,
           (e.concession_tickets - COALESCE(SUM(b.concession_tickets_booked), 0))::INT
               AS concession_available
    FROM events e
    LEFT JOIN bookings b ON b.event_id = e.event_id
"#;

impl Store {
    /// New events always start life as drafts.
    pub async fn create_event(
        &self,
        new_event: NewEvent,
        organiser_id: i64,
    ) -> Result<Event, AppError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events
                (title, description, event_date,
                 full_price_tickets, full_price_cost,
                 concession_tickets, concession_cost,
                 status, organiser_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&new_event.title)
        .bind(&new_event.description)
        .bind(new_event.event_date)
        .bind(new_event.full_price_tickets)
        .bind(new_event.full_price_cost)
        .bind(new_event.concession_tickets)
        .bind(new_event.concession_cost)
        .bind(STATUS_DRAFT)
        .bind(organiser_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Replaces the editable fields in any state. Status and publication
    /// timestamps are untouched; `last_modified` is bumped.
    pub async fn update_event(
        &self,
        event_id: i64,
        new_event: NewEvent,
    ) -> Result<Event, AppError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET title = $2,
                description = $3,
                event_date = $4,
                full_price_tickets = $5,
                full_price_cost = $6,
                concession_tickets = $7,
                concession_cost = $8,
                last_modified = now()
            WHERE event_id = $1
            RETURNING *
            "#,
        )
        .bind(event_id)
        .bind(&new_event.title)
        .bind(&new_event.description)
        .bind(new_event.event_date)
        .bind(new_event.full_price_tickets)
        .bind(new_event.full_price_cost)
        .bind(new_event.concession_tickets)
        .bind(new_event.concession_cost)
        .fetch_optional(&self.pool)
        .await?;

        event.ok_or_else(|| AppError::NotFound(format!("Event {event_id} does not exist")))
    }

    /// One-way draft-to-published transition. The status guard makes a
    /// repeat publish (or a publish of an unknown id) a silent no-op, so
    /// `published_date` is set at most once.
    pub async fn publish_event(&self, event_id: i64) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE events SET status = $2, published_date = now() \
             WHERE event_id = $1 AND status = $3",
        )
        .bind(event_id)
        .bind(STATUS_PUBLISHED)
        .bind(STATUS_DRAFT)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Removes the event in any state; its bookings go with it via the
    /// ON DELETE CASCADE constraint. Unknown ids succeed silently.
    pub async fn delete_event(&self, event_id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(event_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Any-status lookup, for the organiser edit screen.
    pub async fn get_event(&self, event_id: i64) -> Result<Option<Event>, AppError> {
        let event = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE event_id = $1")
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(event)
    }

    /// Published-only lookup with booking aggregates, for attendee pages.
    pub async fn get_published_event(
        &self,
        event_id: i64,
    ) -> Result<Option<EventWithBookings>, AppError> {
        let query = format!(
            "{EVENT_WITH_BOOKINGS} WHERE e.event_id = $1 AND e.status = $2 GROUP BY e.event_id"
        );
        let event = sqlx::query_as::<_, EventWithBookings>(&query)
            .bind(event_id)
            .bind(STATUS_PUBLISHED)
            .fetch_optional(&self.pool)
            .await?;

        Ok(event)
    }

    /// Published events in date order, each annotated with booking totals.
    pub async fn list_published(&self) -> Result<Vec<EventWithBookings>, AppError> {
        let query = format!(
            "{EVENT_WITH_BOOKINGS} WHERE e.status = $1 \
             GROUP BY e.event_id ORDER BY e.event_date ASC, e.event_id ASC"
        );
        let events = sqlx::query_as::<_, EventWithBookings>(&query)
            .bind(STATUS_PUBLISHED)
            .fetch_all(&self.pool)
            .await?;

        Ok(events)
    }

    /// Drafts, newest first. No booking aggregates: drafts cannot be booked.
    pub async fn list_drafts(&self) -> Result<Vec<Event>, AppError> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE status = $1 ORDER BY created_date DESC, event_id DESC",
        )
        .bind(STATUS_DRAFT)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }
}
