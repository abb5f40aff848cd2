//! Authentication for the TCGplayer API.
//!
//! Every catalog and pricing call carries a bearer token obtained by
//! exchanging the application's public key (client id) and private key
//! (client secret) at the token endpoint.
//!
//! # Overview
//!
//! - [`Credentials`]: The application's key pair
//! - [`BearerToken`]: The token attached to each call
//! - [`obtain_token`]: The client-credentials exchange
//!
//! # Example
//!
//! ```rust
//! use tcgplayer_api::{ClientId, ClientSecret, Credentials};
//!
//! let credentials = Credentials::new(
//!     ClientId::new("public-key").unwrap(),
//!     ClientSecret::new("private-key").unwrap(),
//! );
//!
//! // The secret never shows up in debug output
//! assert!(!format!("{:?}", credentials).contains("private-key"));
//! ```

mod token;

pub use token::{obtain_token, AccessTokenResponse, BearerToken, TOKEN_PATH};

use crate::config::{ClientId, ClientSecret};

/// An application's client id and secret.
#[derive(Clone, Debug)]
pub struct Credentials {
    /// The public key.
    pub client_id: ClientId,
    /// The private key.
    pub client_secret: ClientSecret,
}

impl Credentials {
    /// Pairs a client id with its secret.
    #[must_use]
    pub const fn new(client_id: ClientId, client_secret: ClientSecret) -> Self {
        Self {
            client_id,
            client_secret,
        }
    }
}
