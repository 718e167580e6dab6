use std::collections::HashMap;
use std::env;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const ORGANISER_PASSWORD_PREFIX: &str = "ORGANISER_PASSWORD_";

pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub organiser_secrets: HashMap<i64, String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/marquee".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            organiser_secrets: organiser_secrets_from_env(),
        }
    }
}

/// Collects ORGANISER_PASSWORD_<id> variables into an id-to-secret map.
/// Organiser login secrets only ever live in the environment.
fn organiser_secrets_from_env() -> HashMap<i64, String> {
    let mut secrets = HashMap::new();

    for (key, value) in env::vars() {
        let Some(suffix) = key.strip_prefix(ORGANISER_PASSWORD_PREFIX) else {
            continue;
        };
        match suffix.parse::<i64>() {
            Ok(organiser_id) => {
                secrets.insert(organiser_id, value);
            }
            Err(_) => {
                tracing::warn!("Ignoring {key}: organiser id '{suffix}' is not numeric");
            }
        }
    }

    if secrets.is_empty() {
        tracing::warn!("No organiser passwords configured; organiser login will always fail");
    }

    secrets
}
