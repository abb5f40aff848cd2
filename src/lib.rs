//! # TCGplayer API Client
//!
//! A Rust client for the TCGplayer catalog and pricing REST API, turning the
//! vendor's status-code conventions into typed outcomes.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`TcgConfig`] and [`TcgConfigBuilder`]
//! - Validated newtypes for application credentials and the API host
//! - Bearer token exchange via [`obtain_token`]
//! - Local id-list validation before any request is sent
//! - Every catalog and pricing endpoint on [`CatalogClient`]
//! - A closed error taxonomy ([`ApiError`]) and partial-success handling
//!   ([`Outcome`])
//! - A pluggable [`Transport`](clients::Transport), with a reqwest-backed
//!   default
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use tcgplayer_api::{ClientId, ClientSecret, Credentials, TcgConfig};
//!
//! let config = TcgConfig::builder()
//!     .user_agent_prefix("CardShop/2.1")
//!     .timeout(Duration::from_secs(15))
//!     .build()
//!     .unwrap();
//!
//! let credentials = Credentials::new(
//!     ClientId::new("your-public-key").unwrap(),
//!     ClientSecret::new("your-private-key").unwrap(),
//! );
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use tcgplayer_api::{ApiError, CatalogClient, TcgConfig};
//! use tcgplayer_api::api::Paging;
//!
//! let client = CatalogClient::new(&config)?;
//! let token = client.obtain_token(&credentials).await?;
//!
//! // Single-entity call
//! let groups = client.category_groups(&token, 1, Paging::new(0, 100)).await?;
//!
//! // Batch call; a 207 comes back as a partial success
//! let prices = client.sku_market_prices(&token, &[101, 202, 99999]).await?;
//! if prices.is_partial() {
//!     println!("unresolved: {:?}", prices.unresolved());
//! }
//!
//! // Tokens expire; a 401 on any call means obtain a new one
//! match client.group_media(&token, 3).await {
//!     Err(ApiError::InvalidBearerToken) => { /* re-authenticate */ }
//!     other => { /* ... */ }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and id lists validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Caller-owned tokens**: The client never caches or refreshes a token

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{ApiHost, ClientId, ClientSecret, TcgConfig, TcgConfigBuilder};
pub use error::ConfigError;

// Re-export authentication types
pub use auth::{obtain_token, BearerToken, Credentials};

// Re-export the call contract
pub use api::{
    ApiError, BatchBounds, CatalogClient, EntityScope, IdentifierBatch, Operation, Outcome,
    SkuMarketPrice,
};
