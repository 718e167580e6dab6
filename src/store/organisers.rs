use crate::models::organiser::Organiser;
use crate::utils::error::AppError;

use super::Store;

impl Store {
    pub async fn get_organiser(&self, organiser_id: i64) -> Result<Option<Organiser>, AppError> {
        let organiser = sqlx::query_as::<_, Organiser>(
            "SELECT organiser_id, name, description FROM organisers WHERE organiser_id = $1",
        )
        .bind(organiser_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(organiser)
    }

    pub async fn list_organisers(&self) -> Result<Vec<Organiser>, AppError> {
        let organisers = sqlx::query_as::<_, Organiser>(
            "SELECT organiser_id, name, description FROM organisers ORDER BY organiser_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(organisers)
    }
}
