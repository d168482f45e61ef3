//! Shared application state for all routes.

use crate::store::Backend;
use sqlx::AnyPool;

/// Built once in `main` (or a test harness) and handed to the routers; handlers never reach for a global pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
    /// Dialect behind `pool`, for the few statements that differ.
    pub backend: Backend,
}

impl AppState {
    pub fn new(pool: AnyPool, backend: Backend) -> Self {
        AppState { pool, backend }
    }
}
