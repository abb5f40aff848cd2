//! Transport layer for TCGplayer API communication.
//!
//! The contract layer in [`crate::api`] never opens sockets itself. It hands
//! an [`HttpRequest`] to a [`Transport`] and gets back an [`HttpResponse`]
//! carrying the raw status and body.
//!
//! # Overview
//!
//! - [`Transport`]: The abstract send-request capability
//! - [`HttpClient`]: The reqwest-backed transport used by default
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: A request to be sent
//! - [`HttpResponse`]: The raw response (status, headers, body)
//! - [`TransportError`]: Failures below the HTTP layer
//!
//! # Example
//!
//! ```rust,ignore
//! use tcgplayer_api::TcgConfig;
//! use tcgplayer_api::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
//!
//! let client = HttpClient::new(&TcgConfig::default())?;
//! let request = HttpRequest::builder(HttpMethod::Get, "catalog/categories").build()?;
//! let response = client.send(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{InvalidHttpRequestError, TransportError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::Transport;
