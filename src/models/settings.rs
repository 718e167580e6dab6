use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::error::AppError;

/// Fixed primary key of the singleton settings row.
pub const SETTINGS_ID: i64 = 1;

pub const DEFAULT_SITE_NAME: &str = "Event Manager";
pub const DEFAULT_SITE_DESCRIPTION: &str = "Book your events";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SiteSettings {
    pub settings_id: i64,
    pub site_name: String,
    pub site_description: String,
}

impl SiteSettings {
    /// Fallback shown before any settings row has been written. Applied at
    /// the handler boundary; the store itself reports the row as absent.
    pub fn fallback() -> Self {
        Self {
            settings_id: SETTINGS_ID,
            site_name: DEFAULT_SITE_NAME.to_string(),
            site_description: DEFAULT_SITE_DESCRIPTION.to_string(),
        }
    }
}

/// Raw form body for the settings screen.
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    pub site_name: Option<String>,
    pub site_description: Option<String>,
}

impl SettingsForm {
    /// Both fields are required and must be non-empty after trimming.
    pub fn validate(self) -> Result<(String, String), AppError> {
        let site_name = self.site_name.unwrap_or_default().trim().to_string();
        let site_description = self.site_description.unwrap_or_default().trim().to_string();

        if site_name.is_empty() {
            return Err(AppError::InvalidInput("Site name is required".to_string()));
        }
        if site_description.is_empty() {
            return Err(AppError::InvalidInput(
                "Site description is required".to_string(),
            ));
        }

        Ok((site_name, site_description))
    }
}
