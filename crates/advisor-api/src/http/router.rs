//! Axum router configuration with middleware.
//!
//! Routes: `POST /api/chat` and `GET /health`.
//! Middleware: CORS (any origin), tracing.
//!
//! The browser UI is served from `web_dir` (default `public/`). API routes
//! take priority; unknown paths fall through to `index.html`. If the
//! directory does not exist, only the API is served.

use std::path::Path;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let web_dir = state.config.web_dir.clone();

    let mut router = Router::new()
        .route("/api/chat", post(handlers::chat::chat))
        .route("/health", get(health_check));

    if Path::new(&web_dir).exists() {
        let index_path = Path::new(&web_dir).join("index.html");
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "static file serving enabled");
    } else {
        tracing::warn!(path = %web_dir, "web directory not found, serving API only");
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use secrecy::SecretString;
    use tower::ServiceExt;

    use advisor_core::llm::box_provider::BoxGenerationProvider;
    use advisor_core::llm::provider::GenerationProvider;
    use advisor_core::relay::{RelayService, RelaySettings};
    use advisor_core::repository::secret::{BoxSecretProvider, SecretProvider};
    use advisor_types::config::AdvisorConfig;
    use advisor_types::error::SecretError;
    use advisor_types::llm::{GenerationRequest, GenerationResponse, LlmError, Usage};

    use super::*;

    /// Replays scripted results, repeating the last one when exhausted.
    struct StubProvider {
        script: Mutex<VecDeque<Result<String, String>>>,
        last: Result<String, String>,
        calls: Arc<AtomicUsize>,
    }

    impl GenerationProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        fn generate(
            &self,
            _credential: &SecretString,
            request: &GenerationRequest,
        ) -> impl Future<Output = Result<GenerationResponse, LlmError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self
                .script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| self.last.clone());
            let model = request.model.clone();
            async move {
                match next {
                    Ok(text) => Ok(GenerationResponse {
                        text,
                        model,
                        finish_reason: Some("STOP".to_string()),
                        usage: Usage::default(),
                    }),
                    Err(message) => Err(LlmError::Provider { message }),
                }
            }
        }
    }

    struct FixedSecret(Option<&'static str>);

    impl SecretProvider for FixedSecret {
        async fn get(&self, _key: &str) -> Result<Option<SecretString>, SecretError> {
            Ok(self.0.map(SecretString::from))
        }
    }

    fn test_config() -> AdvisorConfig {
        AdvisorConfig {
            web_dir: "/nonexistent/ogun-advisor-web".to_string(),
            ..AdvisorConfig::default()
        }
    }

    fn app_with(
        script: Vec<Result<String, String>>,
        key: Option<&'static str>,
        config: AdvisorConfig,
    ) -> (Router, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = StubProvider {
            last: script.last().cloned().unwrap(),
            script: Mutex::new(script.into()),
            calls: calls.clone(),
        };
        let relay = RelayService::new(
            BoxGenerationProvider::new(provider),
            BoxSecretProvider::new(FixedSecret(key)),
            RelaySettings::default(),
        );
        (build_router(AppState::new(relay, config)), calls)
    }

    fn post_chat(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    const POULTRY: &str =
        r#"{"messages":[{"role":"user","content":"I want to start a poultry farm with ₦50,000"}]}"#;

    #[tokio::test]
    async fn test_chat_returns_generated_text() {
        let (app, calls) = app_with(vec![Ok("Great start...".to_string())], Some("k"), test_config());

        let response = app.oneshot(post_chat(POULTRY)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            serde_json::json!({ "text": "Great start..." })
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_credential_is_500_without_calling_provider() {
        let (app, calls) = app_with(vec![Ok("unused".to_string())], None, test_config());

        let response = app.oneshot(post_chat(POULTRY)).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("GEMINI_API_KEY"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_is_500_and_later_success_recovers() {
        let (app, calls) = app_with(
            vec![
                Err("quota exceeded".to_string()),
                Err("quota exceeded".to_string()),
                Ok("Back online".to_string()),
            ],
            Some("k"),
            test_config(),
        );

        for _ in 0..2 {
            let response = app.clone().oneshot(post_chat(POULTRY)).await.unwrap();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                read_json(response).await,
                serde_json::json!({ "error": "provider error: quota exceeded" })
            );
        }

        let response = app.oneshot(post_chat(POULTRY)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["text"], "Back online");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_multi_turn_transcript_is_relayed() {
        let (app, calls) = app_with(vec![Ok("Start with 50 birds.".to_string())], Some("k"), test_config());
        let body = r#"{"messages":[
            {"role":"user","content":"I want to start a poultry farm"},
            {"role":"assistant","content":"What is your budget?"},
            {"role":"user","content":"₦50,000"}
        ]}"#;

        let response = app.oneshot(post_chat(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["text"], "Start with 50 birds.");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_messages_is_400() {
        let (app, calls) = app_with(vec![Ok("unused".to_string())], Some("k"), test_config());

        let response = app.oneshot(post_chat(r#"{"messages":[]}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await,
            serde_json::json!({ "error": "messages must contain at least one entry" })
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_body_is_400_with_error_body() {
        let (app, calls) = app_with(vec![Ok("unused".to_string())], Some("k"), test_config());

        let response = app.oneshot(post_chat(r#"{"msgs": 1}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert!(body["error"].is_string());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _) = app_with(vec![Ok("unused".to_string())], Some("k"), test_config());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_serves_index_from_web_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Ogun</h1>").unwrap();
        let config = AdvisorConfig {
            web_dir: dir.path().to_string_lossy().into_owned(),
            ..AdvisorConfig::default()
        };
        let (app, _) = app_with(vec![Ok("unused".to_string())], Some("k"), config);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"<h1>Ogun</h1>");
    }

    const SHIPPED_WEB_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../public");

    fn shipped_config() -> AdvisorConfig {
        AdvisorConfig {
            web_dir: SHIPPED_WEB_DIR.to_string(),
            ..AdvisorConfig::default()
        }
    }

    async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_shipped_ui_is_served_at_root() {
        let (app, _) = app_with(vec![Ok("unused".to_string())], Some("k"), shipped_config());

        let (status, body) = get_text(app.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Ogun Startup Advisor"));
        assert!(body.contains("/app.js"));

        // Unknown paths fall through to the same page.
        let (status, fallback) = get_text(app, "/some/client/route").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fallback, body);
    }

    #[tokio::test]
    async fn test_shipped_client_uses_the_session_strings() {
        use advisor_core::chat::session::{
            CONNECTION_ERROR_REPLY, SERVICE_ERROR_REPLY, WELCOME_MESSAGE,
        };

        let (app, _) = app_with(vec![Ok("unused".to_string())], Some("k"), shipped_config());

        let (status, script) = get_text(app, "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(script.contains(WELCOME_MESSAGE));
        assert!(script.contains(SERVICE_ERROR_REPLY));
        assert!(script.contains(CONNECTION_ERROR_REPLY));
        assert!(script.contains("turn.id !== WELCOME_ID"));
        assert!(script.contains("|| busy"));
    }

    #[tokio::test]
    async fn test_static_assets_get_cors_headers() {
        let (app, _) = app_with(vec![Ok("unused".to_string())], Some("k"), shipped_config());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/app.js")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
