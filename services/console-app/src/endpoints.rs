//! Runtime endpoint discovery
//!
//! The console learns its backend base URLs from a small JSON document
//! fetched once at application start from a well-known path on the document
//! origin. The resolved [`Endpoints`] value is immutable for the session and
//! safe to share; resolution failure is terminal until the page reloads.

use url::Url;

use crate::api::EndpointsDocument;
use crate::error::{ApiError, Result};
use crate::io::{check_response, HttpClient};
use crate::service::Service;

/// Well-known path of the endpoint discovery document
pub const WELL_KNOWN_ENDPOINTS: &str = "/.well-known/eclipsecon-2022/endpoints";

/// Resolved backend endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    document: EndpointsDocument,
    origin: String,
}

impl Endpoints {
    /// Wrap a discovery document; `origin` is the origin the console
    /// document itself was loaded from
    pub fn new(document: EndpointsDocument, origin: impl Into<String>) -> Self {
        Self {
            document,
            origin: origin.into(),
        }
    }

    pub fn auth_server_url(&self) -> &str {
        &self.document.auth_server_url
    }

    /// REST base: the `api` override when present, else the document origin
    pub fn api_base(&self) -> &str {
        self.document.api.as_deref().unwrap_or(&self.origin)
    }

    /// WebSocket base: the `ws` override when present, else the REST base
    /// with the scheme mapped `http -> ws`, anything else `-> wss`, and the
    /// path dropped
    pub fn ws_base(&self) -> String {
        if let Some(ws) = &self.document.ws {
            return ws.clone();
        }

        let api_base = self.api_base();
        match Url::parse(api_base) {
            Ok(url) => {
                let scheme = if url.scheme() == "http" { "ws" } else { "wss" };
                let host = url.host_str().unwrap_or_default();
                match url.port() {
                    Some(port) => format!("{}://{}:{}", scheme, host, port),
                    None => format!("{}://{}", scheme, host),
                }
            }
            // Not a parseable absolute URL; swap the scheme textually
            Err(_) => match api_base.split_once("://") {
                Some(("http", rest)) => format!("ws://{}", rest),
                Some((_, rest)) => format!("wss://{}", rest),
                None => format!("wss://{}", api_base),
            },
        }
    }

    /// REST URL for `path`
    pub fn api(&self, path: &str) -> String {
        join(self.api_base(), path)
    }

    /// WebSocket URL for `path`
    pub fn ws(&self, path: &str) -> String {
        join(&self.ws_base(), path)
    }

    pub fn simulator_url(&self) -> Option<&str> {
        self.document.simulator_url.as_deref()
    }
}

/// Join base and path with exactly one slash between them
fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

/// Fetch and parse the discovery document into a [`Service`]
///
/// One uncached GET, no retry; consumers render nothing on `Error` for the
/// rest of the session.
pub async fn resolve_endpoints(http: &impl HttpClient, origin: &str) -> Service<Endpoints> {
    log::info!("Fetching backend endpoint information");
    let result = fetch_endpoints(http, origin).await;
    if let Err(e) = &result {
        log::error!("Failed to load backend endpoint information: {}", e);
    }
    result.into()
}

async fn fetch_endpoints(http: &impl HttpClient, origin: &str) -> Result<Endpoints> {
    let url = join(origin, WELL_KNOWN_ENDPOINTS);
    let response = check_response(http.get(&url).await?)?;
    let document: EndpointsDocument =
        serde_json::from_str(&response.body).map_err(|e| ApiError::Json(e.to_string()))?;
    log::info!("Loaded endpoints: {:?}", document);
    Ok(Endpoints::new(document, origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{HttpResponse, MockHttpClient};
    use proptest::prelude::*;

    const ORIGIN: &str = "https://console.example";

    fn document(api: Option<&str>, ws: Option<&str>) -> EndpointsDocument {
        EndpointsDocument {
            auth_server_url: "https://auth.example/realm".to_string(),
            api: api.map(str::to_string),
            ws: ws.map(str::to_string),
            simulator_url: None,
        }
    }

    #[test]
    fn api_base_defaults_to_document_origin() {
        let endpoints = Endpoints::new(document(None, None), ORIGIN);
        assert_eq!(endpoints.api_base(), "https://console.example");
    }

    #[test]
    fn api_base_prefers_override() {
        let endpoints = Endpoints::new(document(Some("https://api.example"), None), ORIGIN);
        assert_eq!(endpoints.api_base(), "https://api.example");
    }

    #[test]
    fn ws_base_maps_https_to_wss() {
        let endpoints = Endpoints::new(document(None, None), ORIGIN);
        assert_eq!(endpoints.ws_base(), "wss://console.example");
    }

    #[test]
    fn ws_base_maps_http_to_ws() {
        let endpoints = Endpoints::new(document(None, None), "http://localhost:8080");
        assert_eq!(endpoints.ws_base(), "ws://localhost:8080");
    }

    #[test]
    fn ws_base_drops_api_path() {
        let endpoints = Endpoints::new(document(Some("https://api.example/gateway"), None), ORIGIN);
        assert_eq!(endpoints.ws_base(), "wss://api.example");
    }

    #[test]
    fn ws_base_prefers_override() {
        let endpoints = Endpoints::new(document(None, Some("wss://push.example")), ORIGIN);
        assert_eq!(endpoints.ws_base(), "wss://push.example");
    }

    #[test]
    fn api_joins_with_single_slash() {
        let endpoints = Endpoints::new(document(Some("https://api.example/"), None), ORIGIN);
        assert_eq!(
            endpoints.api("/api/deviceClaims/v1alpha1"),
            "https://api.example/api/deviceClaims/v1alpha1"
        );
        assert_eq!(endpoints.api("health"), "https://api.example/health");
        assert_eq!(endpoints.api(""), "https://api.example");
    }

    proptest! {
        #[test]
        fn join_never_doubles_the_boundary_slash(
            slashes_base in 0usize..4,
            slashes_path in 0usize..4,
            path in "[a-z]([a-z]|/[a-z]){0,10}",
        ) {
            let base = format!("https://api.example{}", "/".repeat(slashes_base));
            let padded = format!("{}{}", "/".repeat(slashes_path), path);
            let joined = join(&base, &padded);
            prop_assert!(joined.starts_with("https://api.example/"));
            prop_assert!(!joined["https://".len()..].contains("//"));
        }
    }

    #[tokio::test]
    async fn resolve_loads_document_from_well_known_path() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url| url == "https://console.example/.well-known/eclipsecon-2022/endpoints")
            .returning(|_| {
                Box::pin(async {
                    Ok(HttpResponse {
                        status: 200,
                        status_text: "OK".to_string(),
                        body: r#"{"authServerUrl": "https://auth.example/realm"}"#.to_string(),
                    })
                })
            });

        let service = resolve_endpoints(&mock, ORIGIN).await;
        let endpoints = service.loaded().expect("endpoints should load");
        assert_eq!(endpoints.auth_server_url(), "https://auth.example/realm");
        assert_eq!(endpoints.api_base(), ORIGIN);
    }

    #[tokio::test]
    async fn resolve_maps_http_500_to_error() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 500,
                    status_text: "Internal Server Error".to_string(),
                    body: "broken".to_string(),
                })
            })
        });

        let service = resolve_endpoints(&mock, ORIGIN).await;
        assert_eq!(
            service,
            Service::Error(ApiError::Request {
                status: 500,
                status_text: "Internal Server Error".to_string(),
                description: "broken".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn resolve_maps_invalid_json_to_error() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 200,
                    status_text: "OK".to_string(),
                    body: "not json".to_string(),
                })
            })
        });

        let service = resolve_endpoints(&mock, ORIGIN).await;
        assert!(matches!(service, Service::Error(ApiError::Json(_))));
    }

    #[tokio::test]
    async fn resolve_maps_transport_failure_to_error() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_| {
            Box::pin(async { Err(ApiError::Fetch("connection refused".to_string())) })
        });

        let service = resolve_endpoints(&mock, ORIGIN).await;
        assert_eq!(
            service,
            Service::Error(ApiError::Fetch("connection refused".to_string()))
        );
    }
}
