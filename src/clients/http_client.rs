//! Reqwest-backed transport for the TCGplayer API.
//!
//! This module provides the [`HttpClient`] type, the default [`Transport`]
//! used by [`CatalogClient`](crate::api::CatalogClient).

use std::collections::HashMap;

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::TcgConfig;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for the TCGplayer API.
///
/// The client handles:
/// - Base URI construction from the configured API host
/// - Default headers (`User-Agent`, `Accept`)
/// - Query string encoding and body content types
///
/// It performs no retries and never inspects the response body; non-2xx
/// responses are returned as ordinary [`HttpResponse`] values.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use tcgplayer_api::TcgConfig;
/// use tcgplayer_api::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
///
/// let client = HttpClient::new(&TcgConfig::default())?;
/// let request = HttpRequest::builder(HttpMethod::Get, "catalog/categories")
///     .header("Authorization", "bearer abc")
///     .build()?;
///
/// let response = client.send(request).await?;
/// println!("{} {}", response.code, response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &TcgConfig) -> Result<Self, TransportError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}TCGplayer API Library v{CLIENT_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_uri: config.api_host().as_ref().to_string(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the absolute URL for a relative request path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_uri, path.trim_start_matches('/'))
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        for (key, value) in &request.extra_headers {
            headers.insert(key.clone(), value.clone());
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }
        if let Some(body) = request.body {
            req_builder = req_builder.body(body);
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "Sending request to TCGplayer API"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        tracing::debug!(status = code, path = %request.path, "Received TCGplayer API response");

        Ok(HttpResponse::new(code, res_headers, body))
    }
}
