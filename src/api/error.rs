//! The closed failure taxonomy for catalog and pricing calls.
//!
//! Every non-success path of every operation ends in one [`ApiError`]
//! variant, so callers can match exhaustively instead of inspecting status
//! codes.
//!
//! | Variant | Trigger |
//! |---|---|
//! | [`ApiError::TokenRequestFailed`] | token endpoint answered anything but a usable 200 |
//! | [`ApiError::InvalidListLength`] | id list outside the operation's bounds (never sent) |
//! | [`ApiError::InvalidBearerToken`] | 401 from any catalog or pricing endpoint |
//! | [`ApiError::InvalidCategoryId`] | 400 from a category-scoped single call |
//! | [`ApiError::InvalidGroupId`] | 400 from a group-scoped single call |
//! | [`ApiError::InvalidId`] | 400 from a product-scoped single call or any batch call |
//! | [`ApiError::NotFound`] | 404, worded by scope |
//! | [`ApiError::UnexpectedStatus`] | a status outside the operation's table |
//! | [`ApiError::Transport`] | failure below the HTTP layer |
//!
//! # Example
//!
//! ```rust,ignore
//! use tcgplayer_api::api::ApiError;
//!
//! match client.group_details(&token, &[3, 4]).await {
//!     Ok(outcome) => println!("{} groups", outcome.payload().len()),
//!     Err(ApiError::InvalidBearerToken) => { /* request a new token and retry */ }
//!     Err(ApiError::InvalidListLength { size, .. }) => println!("bad list of {size}"),
//!     Err(e) => println!("lookup failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::api::operation::{EntityScope, Operation};
use crate::clients::TransportError;

/// Failure of a token request or a catalog/pricing call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The token endpoint did not return a usable access token.
    ///
    /// The cause (bad credentials, revoked application, vendor outage) is
    /// not distinguished.
    #[error("the request for a bearer token failed, check that the client id and secret are correct")]
    TokenRequestFailed,

    /// An id list was outside the operation's allowed length.
    ///
    /// Raised before any request is sent.
    #[error("{size} -> length of the list is out of range for the endpoint (expected {min} to {max} ids)")]
    InvalidListLength {
        /// The number of ids supplied.
        size: usize,
        /// The minimum the operation accepts.
        min: usize,
        /// The maximum the operation accepts.
        max: usize,
    },

    /// The vendor rejected the bearer token (HTTP 401).
    #[error("bearer token is invalid")]
    InvalidBearerToken,

    /// The category id was equal to or less than 0 (HTTP 400).
    #[error("category id was equal to or less than 0")]
    InvalidCategoryId,

    /// The group id was equal to or less than 0 (HTTP 400).
    #[error("group id was equal to or less than 0")]
    InvalidGroupId,

    /// One or more ids were out of range or malformed (HTTP 400).
    #[error("one or more ids were equal to or less than 0")]
    InvalidId,

    /// No data exists for the requested id(s) (HTTP 404).
    #[error("{}", .scope.not_found_message())]
    NotFound {
        /// The entity family the lookup was scoped to.
        scope: EntityScope,
    },

    /// The vendor answered with a status the operation does not define.
    #[error("unexpected status {status} from {operation} endpoint")]
    UnexpectedStatus {
        /// The operation that was called.
        operation: Operation,
        /// The status code received.
        status: u16,
    },

    /// The request failed below the HTTP layer.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ApiError {
    /// Returns `true` if re-authenticating could fix the failure.
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::InvalidBearerToken | Self::TokenRequestFailed)
    }
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
};
