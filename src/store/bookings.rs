use rust_decimal::Decimal;

use crate::models::booking::{Booking, BookingRequest, BookingTotals};
use crate::models::event::{Event, STATUS_PUBLISHED};
use crate::utils::error::AppError;

use super::Store;

impl Store {
    /// Creates a booking against a published event.
    ///
    /// The event row is locked for the duration of the transaction, so the
    /// availability check and the insert cannot interleave with another
    /// booking for the same event: two concurrent requests serialize on the
    /// lock and the second sees the first one's tickets.
    pub async fn create_booking(
        &self,
        event_id: i64,
        request: BookingRequest,
    ) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await?;

        let event = sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE event_id = $1 AND status = $2 FOR UPDATE",
        )
        .bind(event_id)
        .bind(STATUS_PUBLISHED)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {event_id} is not open for booking")))?;

        let totals = sqlx::query_as::<_, BookingTotals>(
            r#"
            SELECT COALESCE(SUM(full_price_tickets_booked), 0)::INT AS full_booked,
                   COALESCE(SUM(concession_tickets_booked), 0)::INT AS concession_booked
            FROM bookings
            WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .fetch_one(&mut *tx)
        .await?;

        let full_available = event.full_price_tickets - totals.full_booked;
        if request.full_price_tickets > full_available {
            return Err(AppError::InsufficientAvailability(format!(
                "Only {full_available} full price ticket(s) available for '{}'",
                event.title
            )));
        }

        let concession_available = event.concession_tickets - totals.concession_booked;
        if request.concession_tickets > concession_available {
            return Err(AppError::InsufficientAvailability(format!(
                "Only {concession_available} concession ticket(s) available for '{}'",
                event.title
            )));
        }

        let total_cost = Decimal::from(request.full_price_tickets) * event.full_price_cost
            + Decimal::from(request.concession_tickets) * event.concession_cost;

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings
                (event_id, attendee_name,
                 full_price_tickets_booked, concession_tickets_booked, total_cost)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(event_id)
        .bind(&request.attendee_name)
        .bind(request.full_price_tickets)
        .bind(request.concession_tickets)
        .bind(total_cost)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(booking)
    }
}
