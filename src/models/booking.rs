use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub booking_id: i64,
    pub event_id: i64,
    pub attendee_name: String,
    pub full_price_tickets_booked: i32,
    pub concession_tickets_booked: i32,
    pub total_cost: Decimal,
    pub booking_date: DateTime<Utc>,
}

/// Booked-ticket sums for one event, computed over its bookings.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct BookingTotals {
    pub full_booked: i32,
    pub concession_booked: i32,
}

/// Raw form body for the attendee booking screen.
#[derive(Debug, Deserialize)]
pub struct BookingForm {
    pub attendee_name: Option<String>,
    pub full_price_tickets: Option<String>,
    pub concession_tickets: Option<String>,
}

/// A validated booking request: trimmed attendee name and non-negative
/// ticket counts, at least one of which is positive.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub attendee_name: String,
    pub full_price_tickets: i32,
    pub concession_tickets: i32,
}

/// Ticket counts arrive as free-text form values. Absent, unparsable and
/// negative values all count as zero.
pub fn parse_ticket_count(raw: Option<&str>) -> i32 {
    raw.and_then(|s| s.trim().parse::<i32>().ok())
        .filter(|n| *n >= 0)
        .unwrap_or(0)
}

impl BookingForm {
    pub fn validate(self) -> Result<BookingRequest, AppError> {
        let attendee_name = self.attendee_name.unwrap_or_default().trim().to_string();
        if attendee_name.is_empty() {
            return Err(AppError::InvalidInput(
                "Attendee name is required".to_string(),
            ));
        }

        let full_price_tickets = parse_ticket_count(self.full_price_tickets.as_deref());
        let concession_tickets = parse_ticket_count(self.concession_tickets.as_deref());
        if full_price_tickets == 0 && concession_tickets == 0 {
            return Err(AppError::InvalidInput(
                "At least one ticket must be requested".to_string(),
            ));
        }

        Ok(BookingRequest {
            attendee_name,
            full_price_tickets,
            concession_tickets,
        })
    }
}
