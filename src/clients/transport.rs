//! The abstract "send a request, get status and body" capability.

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Sends one HTTP request and returns the raw response.
///
/// Implementations own everything below the vendor contract: connection
/// handling, TLS, timeouts and cancellation. They must return non-2xx
/// responses as `Ok`; only failures that produced no response at all are
/// reported as [`TransportError`].
///
/// [`HttpClient`](crate::clients::HttpClient) is the reqwest-backed
/// implementation used by default.
///
/// ## Implementing a Transport
///
/// ```ignore
/// struct CannedTransport(HttpResponse);
///
/// #[async_trait]
/// impl Transport for CannedTransport {
///     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the status, headers and body received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}
