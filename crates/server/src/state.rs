use std::sync::Arc;

use proximity_query::QueryService;
use proximity_store::PointStore;

/// Shared handler state. The point store inside is immutable, so no locks.
pub struct AppState {
    pub query: QueryService,
}

impl AppState {
    pub fn new(store: PointStore) -> Self {
        Self {
            query: QueryService::new(Arc::new(store)),
        }
    }
}
