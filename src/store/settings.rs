use crate::models::settings::{SiteSettings, SETTINGS_ID};
use crate::utils::error::AppError;

use super::Store;

impl Store {
    /// The singleton settings row, or `None` before the first write. The
    /// caller decides what a missing row means.
    pub async fn get_settings(&self) -> Result<Option<SiteSettings>, AppError> {
        let settings = sqlx::query_as::<_, SiteSettings>(
            "SELECT settings_id, site_name, site_description FROM site_settings WHERE settings_id = $1",
        )
        .bind(SETTINGS_ID)
        .fetch_optional(&self.pool)
        .await?;

        Ok(settings)
    }

    /// Full replace of the singleton row; there is never more than one.
    pub async fn upsert_settings(
        &self,
        site_name: &str,
        site_description: &str,
    ) -> Result<SiteSettings, AppError> {
        let settings = sqlx::query_as::<_, SiteSettings>(
            r#"
            INSERT INTO site_settings (settings_id, site_name, site_description)
            VALUES ($1, $2, $3)
            ON CONFLICT (settings_id) DO UPDATE
                SET site_name = EXCLUDED.site_name,
                    site_description = EXCLUDED.site_description
            RETURNING settings_id, site_name, site_description
            "#,
        )
        .bind(SETTINGS_ID)
        .bind(site_name)
        .bind(site_description)
        .fetch_one(&self.pool)
        .await?;

        Ok(settings)
    }
}
