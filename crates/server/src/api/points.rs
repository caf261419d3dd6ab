//! Proximity search endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, Method, Uri};
use axum::response::{IntoResponse, Response};
use tracing::info;

use proximity_query::QueryParams;

use crate::state::AppState;

use super::ApiError;

/// `GET /api/points?x=..&y=..&distance=..`
///
/// Registered for every method so non-GET requests get a plain-text 405.
pub async fn points(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Result<Response, ApiError> {
    info!("{} {}", method, uri);
    if method != Method::GET {
        return Err(ApiError::MethodNotAllowed);
    }

    let params = QueryParams::from_query_string(uri.query().unwrap_or_default());
    let matches = state.query.query(&params)?;
    let body = serde_json::to_vec_pretty(&matches)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
