//! HTTP request handlers for the Router service.
//!
//! Implements the analysis, health and banner endpoints using axum.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;
use verdix_domain::AnalysisResult;
use verdix_verifier::Analyzer;

const BANNER: &str = "VerdiX AI Fake News Checker API is running!";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Analysis pipeline shared by every request
    pub analyzer: Arc<Analyzer>,
    /// Longest accepted input text, in characters
    pub max_text_length: usize,
}

/// Analysis request body
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Text to analyze
    pub text: String,
}

/// Banner response for `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct BannerResponse {
    /// Service greeting
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Whether evidence verification runs for each request
    pub verification_enabled: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Text is empty or whitespace only
    EmptyText,
    /// Text exceeds the configured limit
    TextTooLong {
        /// Submitted length in characters
        length: usize,
        /// Configured limit
        limit: usize,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::EmptyText => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "text must not be empty".to_string(),
            ),
            AppError::TextTooLong { length, limit } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("text is {} characters, limit is {}", length, limit),
            ),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

/// GET / - Service banner
async fn root() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: BANNER.to_string(),
    })
}

/// GET /health - Liveness and verification availability
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        verification_enabled: state.analyzer.verification_enabled(),
    })
}

/// POST /analyze - Run the full analysis pipeline on a text
async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::EmptyText);
    }

    let length = request.text.chars().count();
    if length > state.max_text_length {
        debug!("Rejecting text of {} characters", length);
        return Err(AppError::TextTooLong {
            length,
            limit: state.max_text_length,
        });
    }

    Ok(Json(state.analyzer.analyze(&request.text).await))
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    AxumRouter::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/analyze", post(analyze))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt; // for oneshot
    use verdix_classifier::MockClassifier;
    use verdix_signals::SignalExtractor;

    fn create_test_state(max_text_length: usize) -> AppState {
        let analyzer = Analyzer::new(
            Arc::new(MockClassifier::new(0.7)),
            SignalExtractor::default(),
        );

        AppState {
            analyzer: Arc::new(analyzer),
            max_text_length,
        }
    }

    fn post_analyze(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(create_test_state(100));

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_analyze_ok() {
        let app = create_router(create_test_state(100));

        let response = app
            .oneshot(post_analyze(r#"{"text": "The council met today"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_whitespace_text_rejected() {
        let app = create_router(create_test_state(100));

        let response = app.oneshot(post_analyze(r#"{"text": "   "}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_limit_counts_characters() {
        // Five characters, ten bytes
        let app = create_router(create_test_state(5));

        let response = app.oneshot(post_analyze(r#"{"text": "ééééé"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
