//! Client-credentials token exchange.
//!
//! The vendor issues bearer tokens from a single `token` endpoint. The request
//! is a form-encoded POST carrying the application's public and private keys;
//! the response is a JSON object whose `access_token` is the bearer token.
//! Tokens are valid for about two weeks and are not refreshed by this crate.

use std::fmt;

use serde::Deserialize;

use crate::api::ApiError;
use crate::auth::Credentials;
use crate::clients::{DataType, HttpMethod, HttpRequest, Transport};
use crate::error::ConfigError;

/// Path of the token endpoint, relative to the API host.
pub const TOKEN_PATH: &str = "token";

const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// An opaque bearer token for catalog and pricing calls.
///
/// # Security
///
/// The `Debug` implementation masks the token value.
///
/// ```rust
/// use tcgplayer_api::BearerToken;
///
/// let token = BearerToken::new("abc123").unwrap();
/// assert_eq!(token.authorization_header(), "bearer abc123");
/// assert_eq!(format!("{:?}", token), "BearerToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wraps an existing token string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBearerToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyBearerToken);
        }
        Ok(Self(token))
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("bearer {}", self.0)
    }
}

impl AsRef<str> for BearerToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(*****)")
    }
}

/// Body of a successful token response.
#[derive(Clone, Debug, Deserialize)]
pub struct AccessTokenResponse {
    /// The bearer token.
    pub access_token: String,
    /// Token type, normally `bearer`.
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime of the token in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
}

fn form_body(credentials: &Credentials) -> String {
    format!(
        "grant_type={}&client_id={}&client_secret={}",
        CLIENT_CREDENTIALS_GRANT_TYPE,
        urlencoding::encode(credentials.client_id.as_ref()),
        urlencoding::encode(credentials.client_secret.as_ref()),
    )
}

/// Exchanges application credentials for a bearer token.
///
/// # Errors
///
/// - [`ApiError::TokenRequestFailed`] if the endpoint answers anything but
///   200, or a 200 without a non-empty `access_token`. The cause is not
///   recorded.
/// - [`ApiError::Transport`] if no response was received.
///
/// # Example
///
/// ```rust,ignore
/// use tcgplayer_api::{obtain_token, ClientId, ClientSecret, Credentials, TcgConfig};
/// use tcgplayer_api::clients::HttpClient;
///
/// let transport = HttpClient::new(&TcgConfig::default())?;
/// let credentials = Credentials::new(ClientId::new("public")?, ClientSecret::new("private")?);
/// let token = obtain_token(&transport, &credentials).await?;
/// ```
pub async fn obtain_token<T: Transport + ?Sized>(
    transport: &T,
    credentials: &Credentials,
) -> Result<BearerToken, ApiError> {
    let request = HttpRequest::builder(HttpMethod::Post, TOKEN_PATH)
        .body(form_body(credentials))
        .body_type(DataType::FormUrlEncoded)
        .build()
        .map_err(crate::clients::TransportError::from)?;

    let response = transport.send(request).await?;
    if response.code != 200 {
        return Err(ApiError::TokenRequestFailed);
    }

    let token_response: AccessTokenResponse =
        serde_json::from_str(&response.body).map_err(|_| ApiError::TokenRequestFailed)?;
    BearerToken::new(token_response.access_token).map_err(|_| ApiError::TokenRequestFailed)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BearerToken>();
    assert_send_sync::<AccessTokenResponse>();
};
