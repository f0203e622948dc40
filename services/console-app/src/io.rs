//! HTTP client abstraction for testability
//!
//! The browser build sends requests through `gloo-net`; native builds (SSR,
//! tests) use `reqwest`. Both resolve to the same `HttpResponse`, so the API
//! modules and their tests stay target-independent. A client carries its
//! bearer token; every request is sent uncached, once, with no retry.

use async_trait::async_trait;

use crate::error::{ApiError, Result};

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

/// Abstraction over the fetch layer for dependency injection
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient {
    /// Send a GET request
    async fn get(&self, url: &str) -> Result<HttpResponse>;

    /// Send a PUT request with an empty body
    async fn put(&self, url: &str) -> Result<HttpResponse>;

    /// Send a DELETE request
    async fn delete(&self, url: &str) -> Result<HttpResponse>;

    /// Send a POST request with a JSON body
    async fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse>;
}

/// Map a non-2xx response into [`ApiError::Request`], reading the body as
/// plain text for diagnostic display
pub fn check_response(response: HttpResponse) -> Result<HttpResponse> {
    if (200..300).contains(&response.status) {
        Ok(response)
    } else {
        Err(ApiError::Request {
            status: response.status,
            status_text: response.status_text,
            description: response.body,
        })
    }
}

/// Client for the current build target
#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
pub fn default_client(bearer: Option<String>) -> GlooHttpClient {
    GlooHttpClient::new(bearer)
}

/// Client for the current build target
#[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
pub fn default_client(bearer: Option<String>) -> ReqwestHttpClient {
    ReqwestHttpClient::new(bearer)
}

/// Native HTTP client using reqwest
#[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
#[derive(Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    bearer: Option<String>,
}

#[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
impl ReqwestHttpClient {
    pub fn new(bearer: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            bearer,
        }
    }

    async fn execute(
        &self,
        method: &str,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<HttpResponse> {
        log::debug!("{} {}", method, url);
        let mut request = request.header("Cache-Control", "no-cache");
        if let Some(token) = &self.bearer {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Fetch(format!("{} {} failed: {}", method, url, e)))?;

        let status = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Fetch(format!("Reading response body: {}", e)))?;

        log::debug!("{} {} -> {} ({} bytes)", method, url, status, body.len());
        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

#[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        self.execute("GET", url, self.client.get(url)).await
    }

    async fn put(&self, url: &str) -> Result<HttpResponse> {
        self.execute("PUT", url, self.client.put(url)).await
    }

    async fn delete(&self, url: &str) -> Result<HttpResponse> {
        self.execute("DELETE", url, self.client.delete(url)).await
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse> {
        let request = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body.to_string());
        self.execute("POST", url, request).await
    }
}

/// Browser HTTP client using the fetch API through gloo-net
#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
#[derive(Default)]
pub struct GlooHttpClient {
    bearer: Option<String>,
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
impl GlooHttpClient {
    pub fn new(bearer: Option<String>) -> Self {
        Self { bearer }
    }

    fn apply_headers(
        &self,
        request: gloo_net::http::RequestBuilder,
    ) -> gloo_net::http::RequestBuilder {
        let request = request.header("Cache-Control", "no-cache");
        match &self.bearer {
            Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn execute(&self, url: &str, request: gloo_net::http::Request) -> Result<HttpResponse> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Fetch(format!("{} failed: {}", url, e)))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Fetch(format!("Reading response body: {}", e)))?;

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
#[async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let request = self
            .apply_headers(gloo_net::http::Request::get(url))
            .build()
            .map_err(|e| ApiError::Fetch(format!("{} failed: {}", url, e)))?;
        self.execute(url, request).await
    }

    async fn put(&self, url: &str) -> Result<HttpResponse> {
        let request = self
            .apply_headers(gloo_net::http::Request::put(url))
            .build()
            .map_err(|e| ApiError::Fetch(format!("{} failed: {}", url, e)))?;
        self.execute(url, request).await
    }

    async fn delete(&self, url: &str) -> Result<HttpResponse> {
        let request = self
            .apply_headers(gloo_net::http::Request::delete(url))
            .build()
            .map_err(|e| ApiError::Fetch(format!("{} failed: {}", url, e)))?;
        self.execute(url, request).await
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse> {
        let request = self
            .apply_headers(
                gloo_net::http::Request::post(url).header("Content-Type", "application/json"),
            )
            .body(body.to_string())
            .map_err(|e| ApiError::Fetch(format!("{} failed: {}", url, e)))?;
        self.execute(url, request).await
    }
}
