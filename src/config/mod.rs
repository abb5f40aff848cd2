//! Configuration types for the TCGplayer API client.
//!
//! # Overview
//!
//! - [`TcgConfig`]: The configuration struct holding all client settings
//! - [`TcgConfigBuilder`]: A builder for constructing [`TcgConfig`] instances
//! - [`ClientId`] / [`ClientSecret`]: Validated application credentials
//! - [`ApiHost`]: A validated base URL for the vendor API
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use tcgplayer_api::{Operation, TcgConfig};
//!
//! let config = TcgConfig::builder()
//!     .user_agent_prefix("CardShop/2.1")
//!     .timeout(Duration::from_secs(10))
//!     .min_batch_size(Operation::SkuMarketPrice, 2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.batch_bounds(Operation::SkuMarketPrice).unwrap().min, 2);
//! ```

mod newtypes;

pub use newtypes::{ApiHost, ClientId, ClientSecret};

use std::collections::HashMap;
use std::time::Duration;

use crate::api::{BatchBounds, Operation, MAX_BATCH_SIZE};
use crate::error::ConfigError;

/// Configuration for the TCGplayer API client.
///
/// # Thread Safety
///
/// `TcgConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Batch minimums
///
/// Every batch operation has a default minimum list size (see
/// [`Operation::default_min_batch_size`]). Older revisions of the vendor API
/// required at least two ids on some pricing lists, so the minimum can be
/// overridden per operation with [`TcgConfigBuilder::min_batch_size`].
#[derive(Clone, Debug, Default)]
pub struct TcgConfig {
    api_host: ApiHost,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    min_batch_overrides: HashMap<Operation, usize>,
}

impl TcgConfig {
    /// Creates a new builder for constructing a `TcgConfig`.
    #[must_use]
    pub fn builder() -> TcgConfigBuilder {
        TcgConfigBuilder::new()
    }

    /// Returns the API host.
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        &self.api_host
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the list bounds in effect for `operation`.
    ///
    /// Returns `None` for operations that take a single id.
    #[must_use]
    pub fn batch_bounds(&self, operation: Operation) -> Option<BatchBounds> {
        let default_min = operation.default_min_batch_size()?;
        let min = self
            .min_batch_overrides
            .get(&operation)
            .copied()
            .unwrap_or(default_min);
        Some(BatchBounds::new(min, MAX_BATCH_SIZE))
    }
}

// Verify TcgConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TcgConfig>();
};

/// Builder for constructing [`TcgConfig`] instances.
///
/// # Defaults
///
/// - `api_host`: `https://api.tcgplayer.com`
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (the transport's own default applies)
/// - batch minimums: [`Operation::default_min_batch_size`]
#[derive(Debug, Default)]
pub struct TcgConfigBuilder {
    api_host: Option<ApiHost>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    min_batch_overrides: HashMap<Operation, usize>,
}

impl TcgConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API host.
    #[must_use]
    pub fn api_host(mut self, host: ApiHost) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the request timeout handed to the transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the minimum number of ids accepted by a batch operation.
    #[must_use]
    pub fn min_batch_size(mut self, operation: Operation, min: usize) -> Self {
        self.min_batch_overrides.insert(operation, min);
        self
    }

    /// Builds the [`TcgConfig`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotBatchOperation`] if a minimum was set on a
    ///   single-entity operation
    /// - [`ConfigError::InvalidBatchMinimum`] if a minimum is 0 or above 250
    pub fn build(self) -> Result<TcgConfig, ConfigError> {
        for (&operation, &min) in &self.min_batch_overrides {
            if !operation.is_batch() {
                return Err(ConfigError::NotBatchOperation { operation });
            }
            if min == 0 || min > MAX_BATCH_SIZE {
                return Err(ConfigError::InvalidBatchMinimum {
                    operation,
                    min,
                    max: MAX_BATCH_SIZE,
                });
            }
        }

        Ok(TcgConfig {
            api_host: self.api_host.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
            min_batch_overrides: self.min_batch_overrides,
        })
    }
}
