//! Proximity search over the point store.

use std::sync::Arc;

use tracing::info;

use proximity_core::{QueryError, ScoredPoint};
use proximity_store::PointStore;

use crate::params::{ProximityQuery, QueryParams};

/// Answers proximity queries against a shared, read-only [`PointStore`].
///
/// Cheap to clone; every query allocates its own result records, so one
/// service can be used from any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct QueryService {
    store: Arc<PointStore>,
}

impl QueryService {
    pub fn new(store: Arc<PointStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &PointStore {
        &self.store
    }

    /// Validate raw parameters, then run the search.
    pub fn query(&self, params: &QueryParams) -> Result<Vec<ScoredPoint>, QueryError> {
        let query = ProximityQuery::from_params(params)?;
        Ok(self.search(&query))
    }

    /// All stored points within `query.radius` of `query.origin`, nearest first.
    ///
    /// Points at equal distance keep their store order.
    pub fn search(&self, query: &ProximityQuery) -> Vec<ScoredPoint> {
        let origin = query.origin;
        info!(
            "Searching points within {} units of ({}, {})",
            query.radius, origin.x, origin.y
        );

        let mut matches: Vec<ScoredPoint> = self
            .store
            .all()
            .iter()
            .map(|p| p.scored_against(&origin))
            .filter(|sp| query.contains(sp.distance))
            .collect();
        // sort_by_key is stable
        matches.sort_by_key(|sp| sp.distance);

        info!("Found {} points matching criteria", matches.len());
        matches
    }
}
