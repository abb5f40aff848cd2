//! The request/response contract for catalog and pricing calls.
//!
//! A call flows through four stages:
//!
//! 1. **Validation**: id lists are checked against [`BatchBounds`] before
//!    anything is sent ([`IdentifierBatch`]).
//! 2. **Execution**: the [`RequestSpec`] for the [`Operation`] is filled in,
//!    authenticated with a bearer token and handed to the transport.
//! 3. **Classification**: [`classify`] turns the status and body into an
//!    [`Outcome`] or an [`ApiError`], keyed by the operation's
//!    [`OperationKind`].
//! 4. **Typing** (optional): [`Outcome::deserialize`] converts the generic
//!    payload into records such as [`SkuMarketPrice`].
//!
//! # Example
//!
//! ```rust,ignore
//! use tcgplayer_api::api::{ApiError, GroupSearchQuery};
//!
//! let groups = client.group_search(&token, &GroupSearchQuery::new(1)).await?;
//! match client.group_details(&token, &[3, 4, 12]).await {
//!     Ok(outcome) if outcome.is_partial() => retry_later(outcome.unresolved()),
//!     Ok(outcome) => store(outcome.into_payload()),
//!     Err(ApiError::InvalidBearerToken) => refresh_token(),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

mod batch;
mod catalog;
mod classify;
mod client;
mod error;
mod models;
mod operation;
mod outcome;
mod params;
mod pricing;

#[cfg(test)]
mod testing;

pub use batch::{BatchBounds, IdentifierBatch};
pub use classify::classify;
pub use client::CatalogClient;
pub use error::ApiError;
pub use models::SkuMarketPrice;
pub use operation::{
    Cardinality, EntityScope, Operation, OperationKind, RequestSpec, MAX_BATCH_SIZE,
};
pub use outcome::Outcome;
pub use params::{
    CategoryListQuery, GroupSearchQuery, Paging, ProductDetailsQuery, ProductListQuery, QueryPairs,
};
