//! Transport-level error types for the TCGplayer API client.
//!
//! These errors describe failures below the vendor's status-code contract:
//! the request never produced a usable response. They are kept apart from
//! the vendor taxonomy in [`ApiError`](crate::api::ApiError), which wraps
//! them in its `Transport` variant.
//!
//! # Example
//!
//! ```rust,ignore
//! use tcgplayer_api::clients::TransportError;
//!
//! match transport.send(request).await {
//!     Ok(response) => println!("status {}", response.code),
//!     Err(TransportError::Network(e)) => println!("Network error: {}", e),
//!     Err(TransportError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(TransportError::MalformedBody { status, reason }) => {
//!         println!("Unreadable {} response: {}", status, reason);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation before it is sent.
///
/// # Example
///
/// ```rust
/// use tcgplayer_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Failure below the vendor's HTTP contract.
///
/// Timeouts, refused connections and unreadable bodies all land here. The
/// client never retries them.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or connection error, including timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request validation failed before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A success response whose body could not be read as the expected envelope.
    #[error("Malformed response body for status {status}: {reason}")]
    MalformedBody {
        /// The HTTP status code that carried the body.
        status: u16,
        /// Why the body was rejected.
        reason: String,
    },
}
