use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    api_health_handler, health_handler, not_found_handler, redirect_handler, shorten_handler,
    stats_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(health_handler))
            .route("/{short_code}", get(redirect_handler))
            .route("/api/health", get(api_health_handler))
            .route("/api/shorten", post(shorten_handler))
            .route("/api/stats/{short_code}", get(stats_handler))
            .fallback(not_found_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::header::{CONTENT_TYPE, LOCATION};
    use axum::http::{Request, StatusCode};
    use jiff::Timestamp;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use stubby_core::shortcode::LENGTH;
    use stubby_generator::RandomGenerator;
    use stubby_shortener::ShortenerService;
    use stubby_storage::InMemoryUrlStore;
    use tower::ServiceExt;

    const BASE_URL: &str = "http://localhost:5000";

    fn test_router() -> Router {
        let service = ShortenerService::new(InMemoryUrlStore::new(), RandomGenerator::new());
        App::router(AppState::new(Arc::new(service), BASE_URL))
    }

    async fn send(
        router: &Router,
        request: Request<Body>,
    ) -> (StatusCode, Option<String>, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, location, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn shorten(router: &Router, url: &str) -> String {
        let request = post_json("/api/shorten", &json!({ "url": url }));
        let (status, _, body) = send(router, request).await;
        assert_eq!(status, StatusCode::CREATED);
        body["short_code"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn health_check() {
        let router = test_router();

        let (status, _, body) = send(&router, get_req("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "URL Shortener API");

        let (status, _, body) = send(&router, get_req("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["message"], "URL Shortener API is running");
    }

    #[tokio::test]
    async fn shorten_success() {
        let router = test_router();
        let long_url = "https://www.example.com/very/long/url/for/testing";

        let (status, _, body) =
            send(&router, post_json("/api/shorten", &json!({ "url": long_url }))).await;

        assert_eq!(status, StatusCode::CREATED);
        let code = body["short_code"].as_str().unwrap();
        let short_url = body["short_url"].as_str().unwrap();
        assert_eq!(code.len(), LENGTH);
        assert_eq!(short_url, format!("{}/{}", BASE_URL, code));

        let (status, _, body) = send(&router, get_req(&format!("/api/stats/{}", code))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["url"], long_url);
        assert_eq!(body["clicks"], 0);
    }

    #[tokio::test]
    async fn shorten_invalid_url() {
        let router = test_router();

        for url in ["invalid-url-format", "ftp://example.com", "www.example.com"] {
            let (status, _, body) =
                send(&router, post_json("/api/shorten", &json!({ "url": url }))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "Invalid URL provided.");
        }
    }

    #[tokio::test]
    async fn shorten_rejects_unredirectable_urls() {
        let router = test_router();

        for url in [
            "https://example.com/a\nb",
            "https://example.com/a\tb",
            "http:example.com",
            "https:/example.com",
            "https:///example.com",
        ] {
            let (status, _, body) =
                send(&router, post_json("/api/shorten", &json!({ "url": url }))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{url:?}");
            assert_eq!(body["error"], "Invalid URL provided.");
        }
    }

    #[tokio::test]
    async fn redirect_non_ascii_target() {
        let router = test_router();
        let code = shorten(&router, "https://example.com/caf\u{e9}").await;

        let (status, location, _) = send(&router, get_req(&format!("/{}", code))).await;
        assert_eq!(status, StatusCode::FOUND);
        assert_eq!(location.as_deref(), Some("https://example.com/caf%C3%A9"));

        let (_, _, body) = send(&router, get_req(&format!("/api/stats/{}", code))).await;
        assert_eq!(body["clicks"], 1);
        assert_eq!(body["url"], "https://example.com/caf\u{e9}");
    }

    #[tokio::test]
    async fn shorten_missing_url() {
        let router = test_router();

        let (status, _, body) = send(&router, post_json("/api/shorten", &json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "URL is required in request body.");

        let (status, _, body) =
            send(&router, post_json("/api/shorten", &json!({ "url": null }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "URL is required in request body.");

        let request = Request::builder()
            .method("POST")
            .uri("/api/shorten")
            .body(Body::empty())
            .unwrap();
        let (status, _, body) = send(&router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "URL is required in request body.");
    }

    #[tokio::test]
    async fn redirect_and_click_count() {
        let router = test_router();
        let long_url = "https://www.google.com";
        let code = shorten(&router, long_url).await;

        let stats_uri = format!("/api/stats/{}", code);
        let (_, _, body) = send(&router, get_req(&stats_uri)).await;
        assert_eq!(body["clicks"], 0);

        let (status, location, _) = send(&router, get_req(&format!("/{}", code))).await;
        assert_eq!(status, StatusCode::FOUND);
        assert_eq!(location.as_deref(), Some(long_url));

        let (_, _, body) = send(&router, get_req(&stats_uri)).await;
        assert_eq!(body["clicks"], 1);

        let (status, location, _) = send(&router, get_req(&format!("/{}", code))).await;
        assert_eq!(status, StatusCode::FOUND);
        assert_eq!(location.as_deref(), Some(long_url));

        let (_, _, body) = send(&router, get_req(&stats_uri)).await;
        assert_eq!(body["clicks"], 2);
    }

    #[tokio::test]
    async fn redirect_nonexistent() {
        let router = test_router();

        for uri in ["/nonexistent1", "/zzz999"] {
            let (status, location, body) = send(&router, get_req(uri)).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert!(location.is_none());
            assert_eq!(body["error"], "Resource not found.");
        }
    }

    #[tokio::test]
    async fn stats_success() {
        let router = test_router();
        let long_url = "https://www.github.com/myrepo";
        let before = Timestamp::now();
        let code = shorten(&router, long_url).await;

        send(&router, get_req(&format!("/{}", code))).await;
        send(&router, get_req(&format!("/{}", code))).await;

        let (status, _, body) = send(&router, get_req(&format!("/api/stats/{}", code))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["url"], long_url);
        assert_eq!(body["clicks"], 2);

        let created_at: Timestamp = body["created_at"].as_str().unwrap().parse().unwrap();
        assert!(created_at >= before);
    }

    #[tokio::test]
    async fn stats_nonexistent() {
        let router = test_router();

        for uri in ["/api/stats/nonexistent2", "/api/stats/zzz999"] {
            let (status, _, body) = send(&router, get_req(uri)).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["error"], "Resource not found.");
        }
    }

    #[tokio::test]
    async fn unknown_route() {
        let router = test_router();

        let (status, _, body) = send(&router, get_req("/some/deep/path")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Resource not found.");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_redirects_count_every_click() {
        let router = test_router();
        let code = shorten(&router, "https://concurrency.test").await;

        let handles: Vec<_> = (0..100)
            .map(|_| {
                let router = router.clone();
                let uri = format!("/{}", code);
                tokio::spawn(async move { router.oneshot(get_req(&uri)).await.unwrap().status() })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap(), StatusCode::FOUND);
        }

        let (_, _, body) = send(&router, get_req(&format!("/api/stats/{}", code))).await;
        assert_eq!(body["clicks"], 100);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_shortens_receive_distinct_codes() {
        let router = test_router();

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let router = router.clone();
                tokio::spawn(async move {
                    shorten(&router, &format!("https://example{}.com", i)).await
                })
            })
            .collect();

        let mut codes = Vec::new();
        for handle in handles {
            codes.push(handle.await.unwrap());
        }
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 50);
    }
}
