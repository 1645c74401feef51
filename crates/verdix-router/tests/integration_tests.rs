//! Integration tests for the Router service

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for oneshot
use verdix_classifier::MockClassifier;
use verdix_router::{
    build_analyzer,
    config::RouterConfig,
    handlers::{create_router, AppState, BannerResponse, ErrorResponse, HealthCheckResponse},
};
use verdix_search::{MockSearchProvider, SearchHit};
use verdix_signals::SignalExtractor;
use verdix_verifier::{Analyzer, Verifier, VerifierConfig};

/// Helper to create an app with a mock classifier and search provider
fn create_test_app(hits: Option<Vec<SearchHit>>, real: f64) -> Router {
    let mut analyzer = Analyzer::new(
        Arc::new(MockClassifier::new(real)),
        SignalExtractor::default(),
    );

    if let Some(hits) = hits {
        let verifier = Verifier::new(
            Arc::new(MockSearchProvider::new(hits)),
            VerifierConfig::default(),
        )
        .unwrap();
        analyzer = analyzer.with_verifier(verifier);
    }

    create_router(AppState {
        analyzer: Arc::new(analyzer),
        max_text_length: 200,
    })
}

fn analyze_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn test_root_banner() {
    let app = create_test_app(None, 0.5);

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let banner: BannerResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(banner.message, "VerdiX AI Fake News Checker API is running!");
}

#[tokio::test]
async fn test_health_reports_verification() {
    for (hits, expected) in [(None, false), (Some(Vec::new()), true)] {
        let app = create_test_app(hits, 0.5);

        let request = Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let health: HealthCheckResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.verification_enabled, expected);
    }
}

#[tokio::test]
async fn test_analyze_full_result() {
    let app = create_test_app(
        Some(vec![
            SearchHit::new("Fact check: vaccine outbreak claim is false", "https://www.snopes.com/a", 1),
        ]),
        0.4,
    );

    let response = app
        .oneshot(analyze_request(
            r#"{"text": "BREAKING: Vaccine causes outbreak, act now!!! http://192.168.1.5/page"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["status"], "Fake");
    // base 60, +15
    assert_eq!(json["confidence"], 75);
    assert_eq!(json["genome_map"]["manipulation_score"], 12);
    assert_eq!(json["virality"]["risk"], "Medium");
    assert_eq!(json["link_report"]["verdict"], "High Risk");
    assert_eq!(json["link_report"]["domain"], "192.168.1.5");
    assert_eq!(json["verification"]["sources"][0]["stance"], "contradicts");
    assert_eq!(json["verification"]["sources"][0]["publisher"], "www.snopes.com");
}

#[tokio::test]
async fn test_analyze_fallback_without_verification() {
    let app = create_test_app(None, 0.8);

    let response = app
        .oneshot(analyze_request(r#"{"text": "The council met on Tuesday"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["status"], "Real");
    assert_eq!(json["confidence"], 80);
    assert!(json["verification"].is_null());
    assert!(json["link_report"].is_null());
}

#[tokio::test]
async fn test_blank_text_is_422() {
    let app = create_test_app(None, 0.5);

    let response = app.oneshot(analyze_request(r#"{"text": " \n\t"}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(!error.error.is_empty());
}

#[tokio::test]
async fn test_oversized_text_is_413() {
    let app = create_test_app(None, 0.5);
    let body = serde_json::json!({ "text": "a".repeat(201) }).to_string();

    let response = app.oneshot(analyze_request(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let app = create_test_app(None, 0.5);

    let response = app.oneshot(analyze_request(r#"{"txt": 1}"#)).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = create_test_app(None, 0.5);

    let request = Request::builder()
        .uri("/health")
        .header("origin", "https://example.org")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_build_analyzer_from_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("model.json");
    std::fs::write(
        &model_path,
        r#"{"vocabulary": {"official": 0}, "idf": [1.0], "coefficients": [2.0], "intercept": 0.0}"#,
    )
    .unwrap();

    let mut config = RouterConfig::default_test_config();
    config.model_path = model_path;

    // No key: verification stays off even though it is enabled
    let analyzer = build_analyzer(&config, None).unwrap();
    assert!(!analyzer.verification_enabled());

    let analyzer = build_analyzer(&config, Some("test-key".to_string())).unwrap();
    assert!(analyzer.verification_enabled());

    config.verification.enabled = false;
    let analyzer = build_analyzer(&config, Some("test-key".to_string())).unwrap();
    assert!(!analyzer.verification_enabled());
}

#[test]
fn test_shipped_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/router.toml");
    let config = RouterConfig::from_file(path).unwrap();

    assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    assert_eq!(config.verification.trusted_domains.len(), 12);
    assert_eq!(config.signals.panic_keywords.len(), 6);
}
