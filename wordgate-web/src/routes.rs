use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use wordgate::{WordTranslator, translate_word};

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub result: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<dyn WordTranslator>,
}

impl AppState {
    pub fn new(translator: Arc<dyn WordTranslator>) -> Self {
        Self { translator }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/translate/{word}", get(translate))
        .route("/ping", get(ping))
        .route("/hello", get(hello))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn translate(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<ErrorResponse>)> {
    match translate_word(state.translator.as_ref(), &word).await {
        Ok(result) => {
            info!("Translated: {} → {}", &word, &result);
            Ok(Json(TranslateResponse { result }))
        }
        Err(e) => {
            warn!("Failed to translate '{}': {}", &word, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

async fn ping() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "pong".to_string(),
    })
}

async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "world!".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::time::Duration;
    use tower::ServiceExt;
    use wordgate::{GoogleTranslateProvider, MockMode, MockTranslator, TranslateError};

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn mock_app(mode: MockMode) -> (Router, Arc<MockTranslator>) {
        let mock = Arc::new(MockTranslator::new(mode));
        let app = router(AppState::new(mock.clone()));
        (app, mock)
    }

    /// Stand-in for the gtx endpoint that always answers with `body`
    async fn spawn_upstream(body: &'static str) -> String {
        let app = Router::new().route("/translate_a/single", get(move || async move { body }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/translate_a/single", addr)
    }

    #[tokio::test]
    async fn test_ping() {
        let (app, mock) = mock_app(MockMode::Echo);
        let (status, body) = get_json(app, "/ping").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "pong"}));
        assert!(mock.received().is_empty());
    }

    #[tokio::test]
    async fn test_hello() {
        let (app, mock) = mock_app(MockMode::Echo);
        let (status, body) = get_json(app, "/hello").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "world!"}));
        assert!(mock.received().is_empty());
    }

    #[tokio::test]
    async fn test_translate_success() {
        let mut map = HashMap::new();
        map.insert("ev".to_string(), "house".to_string());
        let (app, _) = mock_app(MockMode::Mappings(map));

        let (status, body) = get_json(app, "/translate/ev").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"result": "house"}));
    }

    #[tokio::test]
    async fn test_translate_normalizes_percent_encoded_word() {
        let (app, mock) = mock_app(MockMode::Echo);

        // "güneş" percent-encoded in the path
        let (status, body) = get_json(app, "/translate/g%C3%BCne%C5%9F").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"result": "gunes"}));
        assert_eq!(mock.received(), vec!["gunes".to_string()]);
    }

    #[tokio::test]
    async fn test_translate_error_maps_to_500() {
        let cases = [
            (TranslateError::InvalidRequest, "invalid request"),
            (TranslateError::NoTranslation, "no translation found"),
            (
                TranslateError::Transport("connection refused".to_string()),
                "connection refused",
            ),
            (
                TranslateError::MalformedResponse("expected value at line 1".to_string()),
                "malformed response: expected value at line 1",
            ),
        ];

        for (err, message) in cases {
            let (app, _) = mock_app(MockMode::Error(err));
            let (status, body) = get_json(app, "/translate/ev").await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, json!({"error": message}));
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (app, _) = mock_app(MockMode::Echo);
        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // ========== End to end against a stub upstream ==========

    #[tokio::test]
    async fn test_e2e_translate_with_stub_upstream() {
        let url = spawn_upstream(r#"[[["house","ev"]],null,"tr"]"#).await;
        let provider = GoogleTranslateProvider::new(&url, Duration::from_secs(5)).unwrap();
        let app = router(AppState::new(Arc::new(provider)));

        let (status, body) = get_json(app, "/translate/ev").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"result": "house"}));
    }

    #[tokio::test]
    async fn test_e2e_upstream_returns_empty_array() {
        let url = spawn_upstream("[]").await;
        let provider = GoogleTranslateProvider::new(&url, Duration::from_secs(5)).unwrap();
        let app = router(AppState::new(Arc::new(provider)));

        let (status, body) = get_json(app, "/translate/ev").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "no translation found"}));
    }
}
