mod bookings;
mod events;
mod organisers;
mod settings;

use sqlx::PgPool;

/// Persistence store for the whole application. Owns the connection pool
/// and is handed to the router state at construction; nothing else holds a
/// database handle.
#[derive(Debug, Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
