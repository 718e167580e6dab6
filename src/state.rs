use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::SessionStore;
use crate::store::Store;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub sessions: SessionStore,
    /// Organiser id to login secret, from environment configuration.
    /// Secrets are never persisted.
    pub organiser_secrets: Arc<HashMap<i64, String>>,
}

impl AppState {
    pub fn new(store: Store, organiser_secrets: HashMap<i64, String>) -> Self {
        Self {
            store,
            sessions: SessionStore::new(),
            organiser_secrets: Arc::new(organiser_secrets),
        }
    }
}
