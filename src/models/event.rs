use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::booking::parse_ticket_count;
use crate::utils::error::AppError;

pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_PUBLISHED: &str = "published";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub event_id: i64,
    pub title: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub full_price_tickets: i32,
    pub full_price_cost: Decimal,
    pub concession_tickets: i32,
    pub concession_cost: Decimal,
    pub status: String,
    pub organiser_id: Option<i64>,
    pub created_date: DateTime<Utc>,
    pub published_date: Option<DateTime<Utc>>,
    pub last_modified: DateTime<Utc>,
}

/// A published event annotated with its aggregated booking totals and the
/// remaining availability per ticket tier.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EventWithBookings {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub event: Event,
    pub full_booked: i32,
    pub concession_booked: i32,
    pub full_available: i32,
    pub concession_available: i32,
}

/// Raw form body for the create/edit event screens.
#[derive(Debug, Deserialize)]
pub struct EventForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<String>,
    pub full_price_tickets: Option<String>,
    pub full_price_cost: Option<String>,
    pub concession_tickets: Option<String>,
    pub concession_cost: Option<String>,
}

/// Validated event fields ready for persistence.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub full_price_tickets: i32,
    pub full_price_cost: Decimal,
    pub concession_tickets: i32,
    pub concession_cost: Decimal,
}

/// Dates arrive either as a plain date or as a datetime-local value; both
/// normalize to the stored calendar date.
fn parse_event_date(raw: &str) -> Result<NaiveDate, AppError> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M") {
        return Ok(datetime.date());
    }
    Err(AppError::InvalidInput(format!(
        "Event date '{trimmed}' is not a valid date (expected YYYY-MM-DD)"
    )))
}

/// Costs arrive as free-text form values. Absent, unparsable and negative
/// values all count as zero, matching the ticket-count rules.
fn parse_cost(raw: Option<&str>) -> Decimal {
    raw.and_then(|s| s.trim().parse::<Decimal>().ok())
        .filter(|d| !d.is_sign_negative())
        .unwrap_or(Decimal::ZERO)
}

impl EventForm {
    pub fn validate(self) -> Result<NewEvent, AppError> {
        let title = self.title.unwrap_or_default().trim().to_string();
        if title.is_empty() {
            return Err(AppError::InvalidInput("Title is required".to_string()));
        }

        let description = self.description.unwrap_or_default().trim().to_string();
        if description.is_empty() {
            return Err(AppError::InvalidInput(
                "Description is required".to_string(),
            ));
        }

        let raw_date = self.event_date.unwrap_or_default();
        if raw_date.trim().is_empty() {
            return Err(AppError::InvalidInput("Event date is required".to_string()));
        }
        let event_date = parse_event_date(&raw_date)?;

        Ok(NewEvent {
            title,
            description,
            event_date,
            full_price_tickets: parse_ticket_count(self.full_price_tickets.as_deref()),
            full_price_cost: parse_cost(self.full_price_cost.as_deref()),
            concession_tickets: parse_ticket_count(self.concession_tickets.as_deref()),
            concession_cost: parse_cost(self.concession_cost.as_deref()),
        })
    }
}
