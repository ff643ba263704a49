//! Axum router configuration with middleware.
//!
//! Routes: `/api/chat` (every method, see the handler) and `GET /health`.
//! Middleware: CORS, tracing, panic recovery.
//!
//! When `server.web_dir` points at an existing directory the built site is
//! served from it. API routes take priority; unknown paths fall through to
//! `index.html`. Without it only the API is served.

use std::any::Any as PanicPayload;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use folio_types::chat::ErrorBody;

use crate::http::error::INTERNAL_ERROR;
use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let web_dir = state.config.server.web_dir.clone();

    let mut router = Router::new()
        .route("/api/chat", any(handlers::chat::chat))
        .route("/health", get(health_check))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if let Some(web_dir) = web_dir.filter(|dir| dir.is_dir()) {
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(web_dir.join("index.html")));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir.display(), "static site serving enabled");
    }

    router
}

/// GET /health - Liveness plus the chat mode the server started in.
async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "mode": state.chat_service.mode(),
    }))
}

fn panic_response(_payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    tracing::error!("handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::message(INTERNAL_ERROR)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use tower::ServiceExt;

    use folio_core::chat::service::ChatService;
    use folio_types::config::GlobalConfig;

    use super::*;

    fn app(config: GlobalConfig) -> Router {
        let service = ChatService::new(&config.chat, None);
        build_router(AppState::from_parts(config, service))
    }

    #[tokio::test]
    async fn test_health_reports_mode() {
        let response = app(GlobalConfig::default())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["mode"], "mock");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_cors_preflight_is_answered() {
        let response = app(GlobalConfig::default())
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/chat")
                    .header(header::ORIGIN, "https://example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
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

    #[tokio::test]
    async fn test_static_site_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>folio</h1>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();

        let mut config = GlobalConfig::default();
        config.server.web_dir = Some(dir.path().to_path_buf());

        let response = app(config.clone())
            .oneshot(Request::get("/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"console.log(1)");

        let response = app(config)
            .oneshot(Request::get("/projects/42").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<h1>folio</h1>");
    }

    #[tokio::test]
    async fn test_unknown_path_without_site_is_404() {
        let response = app(GlobalConfig::default())
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
