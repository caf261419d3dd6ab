//! HTTP router construction.

use std::sync::Arc;

use axum::routing::{any, get};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::state::AppState;

/// Build the application router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/points", any(api::points))
        .route("/health", get(api::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use proximity_core::{Point, ScoredPoint};
    use proximity_store::PointStore;

    fn fixture_router() -> Router {
        let store = PointStore::from_points(vec![
            Point::new(0, 0),
            Point::new(5, 0),
            Point::new(0, 5),
            Point::new(10, 10),
        ]);
        build_router(Arc::new(AppState::new(store)))
    }

    async fn send(method: Method, uri: &str) -> (StatusCode, Option<String>, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = fixture_router().oneshot(request).await.unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn get_points_returns_json_array() {
        let (status, content_type, body) =
            send(Method::GET, "/api/points?x=1&y=2&distance=20").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let parsed: Vec<ScoredPoint> = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.len(), 4);
    }

    #[tokio::test]
    async fn end_to_end_example_is_sorted_and_indented() {
        let (status, _, body) = send(Method::GET, "/api/points?x=0&y=0&distance=5").await;
        assert_eq!(status, StatusCode::OK);

        let expected = vec![
            ScoredPoint { x: 0, y: 0, distance: 0 },
            ScoredPoint { x: 5, y: 0, distance: 5 },
            ScoredPoint { x: 0, y: 5, distance: 5 },
        ];
        assert_eq!(body, serde_json::to_string_pretty(&expected).unwrap());
        assert!(body.starts_with("[\n  {\n    \"x\": 0,"));
    }

    #[tokio::test]
    async fn no_matches_is_empty_array() {
        let (status, _, body) = send(Method::GET, "/api/points?x=100&y=100&distance=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn repeated_queries_are_byte_identical() {
        let uri = "/api/points?x=3&y=3&distance=30";
        let (_, _, first) = send(Method::GET, uri).await;
        let (_, _, second) = send(Method::GET, uri).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn invalid_requests_get_plain_text_400() {
        let cases = [
            // Invalid integer
            ("/api/points?x=something&y=5&distance=5", "Must be a valid integer: x"),
            ("/api/points?x=5&y=something&distance=5", "Must be a valid integer: y"),
            ("/api/points?x=5&y=5&distance=something", "Must be a valid integer: distance"),
            // Missing parameters
            ("/api/points", "Missing required parameter: x"),
            ("/api/points?y=5&distance=5", "Missing required parameter: x"),
            ("/api/points?x=5&distance=5", "Missing required parameter: y"),
            ("/api/points?x=5&y=5", "Missing required parameter: distance"),
        ];

        for (uri, expected) in cases {
            let (status, content_type, body) = send(Method::GET, uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body, expected, "{}", uri);
            assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
        }
    }

    #[tokio::test]
    async fn non_get_methods_are_rejected() {
        let methods = [
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ];
        for method in methods {
            for uri in ["/api/points", "/api/points?x=0&y=0&distance=5"] {
                let (status, _, body) = send(method.clone(), uri).await;
                assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, uri);
                // HEAD responses never carry a body.
                if method == Method::HEAD {
                    assert!(body.is_empty());
                } else {
                    assert_eq!(body, "Method Not Allowed");
                }
            }
        }
    }

    #[tokio::test]
    async fn malformed_pairs_read_as_missing() {
        let cases = [
            ("/api/points?x=%zz&y=5&distance=5", "Missing required parameter: x"),
            ("/api/points?x=1;y=2&y=5&distance=5", "Missing required parameter: x"),
            ("/api/points?x=1&y=5&distance=%G0", "Missing required parameter: distance"),
        ];
        for (uri, expected) in cases {
            let (status, _, body) = send(Method::GET, uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(body, expected, "{}", uri);
        }
    }

    #[tokio::test]
    async fn origin_beyond_32_bits_is_accepted() {
        let (status, _, body) =
            send(Method::GET, "/api/points?x=3000000000&y=0&distance=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn health_reports_point_count() {
        let (status, _, body) = send(Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["point_count"], 4);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let (status, _, _) = send(Method::GET, "/api/other").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
