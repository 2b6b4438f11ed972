use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use linkboard_server::{
    api::app_router,
    build_state,
    config::{Config, UpstreamConfig},
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn build_test_router(link_preview_url: &str, api_key: Option<&str>) -> Router {
    let config = Config {
        upstream_timeout: Duration::from_secs(2),
        link_preview: UpstreamConfig {
            api_key: api_key.map(str::to_string),
            api_url: link_preview_url.to_string(),
        },
        opengraph: UpstreamConfig {
            api_key: api_key.map(str::to_string),
            api_url: link_preview_url.to_string(),
        },
        ..Config::default()
    };
    app_router(build_state(&config), &config)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn empty_url_is_bad_request() {
    let app = build_test_router("http://127.0.0.1:1", Some("KEY"));

    let (status, body) = get_json(app, "/resolve?url=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "URL is required" }));
}

#[tokio::test]
async fn absent_url_is_bad_request_even_without_key() {
    let app = build_test_router("http://127.0.0.1:1", None);

    let (status, body) = get_json(app, "/resolve").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "URL is required" }));
}

#[tokio::test]
async fn missing_key_is_internal_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    let app = build_test_router(&mock_server.uri(), None);

    let (status, body) = get_json(app, "/resolve?url=example.com").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "API key is missing" }));
}

#[tokio::test]
async fn resolves_bare_domain_with_fallbacks() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("key", "KEY"))
        .and(query_param("q", "https://example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Example",
            "description": "",
            "image": "",
            "url": "https://example.com"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    let app = build_test_router(&mock_server.uri(), Some("KEY"));

    let (status, body) = get_json(app, "/resolve?url=example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "title": "Example",
            "description": "Sem descrição",
            "image": "",
            "url": "https://example.com"
        })
    );
}

#[tokio::test]
async fn preview_alias_serves_same_contract() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "http://blog.example/post?id=7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;
    let app = build_test_router(&mock_server.uri(), Some("KEY"));

    let (status, body) =
        get_json(app, "/api/preview?url=http%3A%2F%2Fblog.example%2Fpost%3Fid%3D7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "http://blog.example/post?id=7");
    assert_eq!(body["url"], "http://blog.example/post?id=7");
    assert_eq!(body["description"], "Sem descrição");
}

#[tokio::test]
async fn upstream_rejection_keeps_status_and_details() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .expect(1)
        .mount(&mock_server)
        .await;
    let app = build_test_router(&mock_server.uri(), Some("WRONG"));

    let (status, body) = get_json(app, "/resolve?url=example.com").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({ "error": "Failed to fetch preview", "details": "Invalid API key" })
    );
}

#[tokio::test]
async fn upstream_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;
    let app = build_test_router(&mock_server.uri(), Some("KEY"));

    let (status, body) = get_json(app, "/resolve?url=example.com").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Failed to fetch preview");
}

#[tokio::test]
async fn non_json_upstream_is_internal_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"),
        )
        .mount(&mock_server)
        .await;
    let app = build_test_router(&mock_server.uri(), Some("KEY"));

    let (status, body) = get_json(app, "/resolve?url=example.com").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Invalid response from metadata provider");
    assert!(body["details"].as_str().unwrap().contains("text/html"));
}

#[tokio::test]
async fn opengraph_route_reads_hybrid_graph() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/site/.+$"))
        .and(query_param("app_id", "KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hybridGraph": {
                "title": "Example Domain",
                "image": "https://example.com/og.png"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    let app = build_test_router(&mock_server.uri(), Some("KEY"));

    let (status, body) = get_json(app, "/api/opengraph?url=example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "title": "Example Domain",
            "description": "Sem descrição",
            "image": "https://example.com/og.png",
            "url": "https://example.com"
        })
    );
}

#[tokio::test]
async fn opengraph_without_data_is_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": null })))
        .mount(&mock_server)
        .await;
    let app = build_test_router(&mock_server.uri(), Some("KEY"));

    let (status, body) = get_json(app, "/api/opengraph?url=example.com").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No metadata found" }));
}

#[tokio::test]
async fn invalid_url_is_bad_request() {
    let app = build_test_router("http://127.0.0.1:1", Some("KEY"));

    let (status, body) = get_json(app, "/resolve?url=https%3A%2F%2F").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid URL");
}

#[tokio::test]
async fn unreachable_upstream_does_not_expose_key() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let closed = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let app = build_test_router(&closed, Some("SECRET-KEY-123"));

    let (status, body) = get_json(app, "/resolve?url=example.com").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to retrieve preview data");
    assert!(body["details"].is_string());
    assert!(!body.to_string().contains("SECRET-KEY-123"));
}
