//! Console HTTP server
//!
//! Serves the single-page console: the app shell, the compiled site bundle,
//! the endpoint discovery document, and a health probe. The claim API itself
//! lives in the backend services; this process only tells the browser where
//! to find it.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::config::Config;

/// Well-known path of the endpoint discovery document
pub const WELL_KNOWN_ENDPOINTS: &str = "/.well-known/eclipsecon-2022/endpoints";

/// Shared server state
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
}

/// Build the console axum router
pub fn build_router(config: Config) -> Router {
    let site_root = config.server.site_root.clone();
    let state = ServerState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(index_handler))
        .route(WELL_KNOWN_ENDPOINTS, get(endpoints_handler))
        .route("/health", get(health_handler))
        .nest_service("/pkg", ServeDir::new(format!("{}/pkg", site_root)))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn endpoints_handler(State(state): State<ServerState>) -> impl IntoResponse {
    Json(state.config.endpoints.clone())
}

async fn index_handler() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Device Console</title>
    <link rel="modulepreload" href="/pkg/console.js">
    <link rel="preload" href="/pkg/console_bg.wasm" as="fetch" type="application/wasm" crossorigin="">
</head>
<body>
    <script type="module">
        import init, { hydrate } from '/pkg/console.js';
        await init();
        hydrate();
    </script>
</body>
</html>"#,
    )
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::EndpointsConfig;

    fn setup_config() -> Config {
        Config {
            endpoints: EndpointsConfig {
                auth_server_url: "https://auth.example/realms/hackathon".to_string(),
                api: None,
                ws: None,
                simulator_url: Some("https://simulator.example".to_string()),
            },
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = build_router(setup_config());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn well_known_returns_endpoint_document() {
        let app = build_router(setup_config());
        let response = app
            .oneshot(
                Request::builder()
                    .uri(WELL_KNOWN_ENDPOINTS)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["authServerUrl"],
            "https://auth.example/realms/hackathon"
        );
        assert_eq!(json["simulatorUrl"], "https://simulator.example");
        assert!(json.get("api").is_none());
        assert!(json.get("ws").is_none());
    }

    #[tokio::test]
    async fn well_known_allows_cross_origin_reads() {
        let app = build_router(setup_config());
        let response = app
            .oneshot(
                Request::builder()
                    .uri(WELL_KNOWN_ENDPOINTS)
                    .header("Origin", "https://other.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key("access-control-allow-origin"));
    }

    #[tokio::test]
    async fn index_serves_the_app_shell() {
        let app = build_router(setup_config());
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Device Console"));
        assert!(html.contains("/pkg/console.js"));
    }
}
