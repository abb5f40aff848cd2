//! Success values for catalog and pricing calls.
//!
//! A call that did not fail yields an [`Outcome`]: either every requested id
//! resolved, or (batch calls only, HTTP 207) some did and some did not.
//! Partial success is not an error; it carries both halves so the caller can
//! decide whether to retry the unresolved subset.

use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::clients::TransportError;

/// The success side of a call.
///
/// # Example
///
/// ```rust
/// use tcgplayer_api::api::Outcome;
///
/// let outcome = Outcome::PartialSuccess {
///     payload: vec!["101", "202"],
///     unresolved: vec![99999],
///     errors: vec!["No data for id 99999".to_string()],
/// };
///
/// assert!(outcome.is_partial());
/// assert_eq!(outcome.unresolved(), &[99999]);
/// assert_eq!(outcome.payload().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Every requested id or query resolved.
    Success(T),
    /// Some ids resolved; the rest are named in `unresolved`.
    PartialSuccess {
        /// The resolved entities.
        payload: T,
        /// Requested ids absent from `payload`, in request order.
        unresolved: Vec<u32>,
        /// The vendor's error messages, verbatim.
        errors: Vec<String>,
    },
}

impl<T> Outcome<T> {
    /// Returns `true` for [`Outcome::PartialSuccess`].
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        matches!(self, Self::PartialSuccess { .. })
    }

    /// Returns the resolved payload.
    #[must_use]
    pub const fn payload(&self) -> &T {
        match self {
            Self::Success(payload) | Self::PartialSuccess { payload, .. } => payload,
        }
    }

    /// Consumes the outcome and returns the resolved payload.
    #[must_use]
    pub fn into_payload(self) -> T {
        match self {
            Self::Success(payload) | Self::PartialSuccess { payload, .. } => payload,
        }
    }

    /// Returns the ids that did not resolve (empty on full success).
    #[must_use]
    pub fn unresolved(&self) -> &[u32] {
        match self {
            Self::Success(_) => &[],
            Self::PartialSuccess { unresolved, .. } => unresolved,
        }
    }

    /// Returns the vendor's error messages (empty on full success).
    #[must_use]
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Success(_) => &[],
            Self::PartialSuccess { errors, .. } => errors,
        }
    }

    /// Maps the payload, keeping the partial-success details.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(payload) => Outcome::Success(f(payload)),
            Self::PartialSuccess {
                payload,
                unresolved,
                errors,
            } => Outcome::PartialSuccess {
                payload: f(payload),
                unresolved,
                errors,
            },
        }
    }

    /// Fallibly maps the payload, keeping the partial-success details.
    ///
    /// # Errors
    ///
    /// Returns whatever `f` returns.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Outcome<U>, E> {
        Ok(match self {
            Self::Success(payload) => Outcome::Success(f(payload)?),
            Self::PartialSuccess {
                payload,
                unresolved,
                errors,
            } => Outcome::PartialSuccess {
                payload: f(payload)?,
                unresolved,
                errors,
            },
        })
    }
}

impl Outcome<Vec<serde_json::Value>> {
    /// Deserializes each payload entry into `U`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] with [`TransportError::MalformedBody`]
    /// if an entry does not match `U`.
    pub fn deserialize<U: DeserializeOwned>(self) -> Result<Outcome<Vec<U>>, ApiError> {
        let status = if self.is_partial() { 207 } else { 200 };
        self.try_map(|entries| {
            entries
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<U>, _>>()
                .map_err(|e| {
                    ApiError::Transport(TransportError::MalformedBody {
                        status,
                        reason: e.to_string(),
                    })
                })
        })
    }
}
