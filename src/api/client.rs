//! The catalog and pricing client.
//!
//! [`CatalogClient`] ties the pieces together: it validates id lists against
//! the configured bounds, builds the authenticated request for an
//! [`Operation`], hands it to the transport and classifies the response.
//! Endpoint methods live in the `catalog` and `pricing` modules.

use serde_json::Value;

use crate::api::batch::{BatchBounds, IdentifierBatch};
use crate::api::classify::classify;
use crate::api::error::ApiError;
use crate::api::operation::{Operation, RequestSpec};
use crate::api::outcome::Outcome;
use crate::api::params::QueryPairs;
use crate::auth::{self, BearerToken, Credentials};
use crate::clients::{HttpClient, HttpRequest, HttpResponse, Transport, TransportError};
use crate::config::TcgConfig;

/// What an operation's path placeholder is filled with.
#[derive(Debug, Clone, Copy)]
pub(crate) enum RequestTarget<'a> {
    /// No placeholder (list and search endpoints).
    Collection,
    /// One category, group or product id.
    Id(u32),
    /// A list of ids, validated against the operation's bounds.
    Ids(&'a [u32]),
}

/// Client for the vendor's catalog and pricing endpoints.
///
/// The client holds no token. Callers obtain one with
/// [`obtain_token`](Self::obtain_token) and pass it to every call; on
/// [`ApiError::InvalidBearerToken`] they obtain a new one and retry.
///
/// # Thread Safety
///
/// `CatalogClient` is `Send + Sync` when its transport is, so one client can
/// serve many concurrent calls.
///
/// # Example
///
/// ```rust,ignore
/// use tcgplayer_api::{CatalogClient, ClientId, ClientSecret, Credentials, TcgConfig};
///
/// let client = CatalogClient::new(&TcgConfig::default())?;
/// let credentials = Credentials::new(ClientId::new("public")?, ClientSecret::new("private")?);
/// let token = client.obtain_token(&credentials).await?;
///
/// let outcome = client.sku_market_prices(&token, &[101, 202, 99999]).await?;
/// for id in outcome.unresolved() {
///     println!("no price for sku {id}");
/// }
/// ```
#[derive(Debug)]
pub struct CatalogClient<T: Transport = HttpClient> {
    transport: T,
    config: TcgConfig,
}

impl CatalogClient<HttpClient> {
    /// Creates a client backed by [`HttpClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &TcgConfig) -> Result<Self, ApiError> {
        let transport = HttpClient::new(config)?;
        Ok(Self::with_transport(transport, config.clone()))
    }
}

impl<T: Transport> CatalogClient<T> {
    /// Creates a client over any [`Transport`].
    #[must_use]
    pub const fn with_transport(transport: T, config: TcgConfig) -> Self {
        Self { transport, config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &TcgConfig {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the id-list bounds for `operation`, or `None` if it takes a single id.
    #[must_use]
    pub fn bounds(&self, operation: Operation) -> Option<BatchBounds> {
        self.config.batch_bounds(operation)
    }

    /// Exchanges credentials for a bearer token through this client's transport.
    ///
    /// # Errors
    ///
    /// See [`auth::obtain_token`].
    pub async fn obtain_token(&self, credentials: &Credentials) -> Result<BearerToken, ApiError> {
        auth::obtain_token(&self.transport, credentials).await
    }

    /// Sends one authenticated request and returns the raw response.
    ///
    /// `segment` replaces the template's `{id}` or `{ids}` placeholder. The
    /// response is not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the request could not be sent.
    pub async fn execute(
        &self,
        spec: &RequestSpec,
        segment: Option<&str>,
        query: QueryPairs,
        token: &BearerToken,
    ) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest::builder(spec.http_method, spec.build_path(segment))
            .query_pairs(query)
            .header("Authorization", token.authorization_header())
            .build()
            .map_err(TransportError::from)?;
        Ok(self.transport.send(request).await?)
    }

    /// Validates, executes and classifies one call.
    pub(crate) async fn call(
        &self,
        operation: Operation,
        target: RequestTarget<'_>,
        query: QueryPairs,
        token: &BearerToken,
    ) -> Result<Outcome<Vec<Value>>, ApiError> {
        let spec = operation.spec();
        let (segment, batch) = match target {
            RequestTarget::Collection => (None, None),
            RequestTarget::Id(id) => (Some(id.to_string()), None),
            RequestTarget::Ids(ids) => {
                let bounds = self.bounds(operation).unwrap_or_default();
                let batch = IdentifierBatch::new(ids.to_vec(), bounds)?;
                (Some(batch.joined()), Some(batch))
            }
        };

        let response = self
            .execute(&spec, segment.as_deref(), query, token)
            .await?;
        classify(&spec, response.code, &response.body, batch.as_ref())
    }
}

// Verify CatalogClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CatalogClient>();
};
