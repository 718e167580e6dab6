use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Organiser {
    pub organiser_id: i64,
    pub name: String,
    pub description: String,
}
