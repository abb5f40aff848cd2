//! Configuration error types for the TCGplayer API client.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use tcgplayer_api::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

use crate::api::Operation;

/// Errors that can occur while building client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client id cannot be empty.
    #[error("Client id cannot be empty. Please provide the public key issued for your application.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the private key issued for your application.")]
    EmptyClientSecret,

    /// Bearer token cannot be empty.
    #[error("Bearer token cannot be empty. Request a new one with obtain_token.")]
    EmptyBearerToken,

    /// API host URL is invalid.
    #[error("Invalid API host '{url}'. Please provide a URL with scheme (e.g., 'https://api.tcgplayer.com').")]
    InvalidApiHost {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A batch minimum override is outside the range the vendor accepts.
    #[error("Invalid minimum batch size {min} for {operation}. Expected a value between 1 and {max}.")]
    InvalidBatchMinimum {
        /// The operation the override was set for.
        operation: Operation,
        /// The rejected minimum.
        min: usize,
        /// The hard maximum for the operation.
        max: usize,
    },

    /// A batch minimum override was set on an operation that takes a single id.
    #[error("{operation} does not accept a list of ids, so it has no minimum batch size.")]
    NotBatchOperation {
        /// The single-entity operation the override was set for.
        operation: Operation,
    },
}
