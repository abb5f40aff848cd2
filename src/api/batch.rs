//! Identifier batches and their cardinality bounds.
//!
//! The vendor rejects id lists that are too long (more than 250) or, for some
//! revisions, too short. [`IdentifierBatch::new`] enforces the bounds locally
//! so a bad list never reaches the network.

use std::collections::HashSet;

use crate::api::error::ApiError;
use crate::api::operation::MAX_BATCH_SIZE;

/// Inclusive bounds on the number of ids in one batch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchBounds {
    /// Fewest ids accepted.
    pub min: usize,
    /// Most ids accepted.
    pub max: usize,
}

impl BatchBounds {
    /// Creates bounds of `min..=max`.
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Checks a list length against the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidListLength`] carrying the offending size.
    pub fn validate(&self, size: usize) -> Result<(), ApiError> {
        if size < self.min || size > self.max {
            return Err(ApiError::InvalidListLength {
                size,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for BatchBounds {
    fn default() -> Self {
        Self::new(1, MAX_BATCH_SIZE)
    }
}

/// An ordered list of ids whose length is known to be within bounds.
///
/// Order is kept as supplied, so the comma-joined path segment matches the
/// caller's list exactly.
///
/// # Example
///
/// ```rust
/// use tcgplayer_api::api::{ApiError, BatchBounds, IdentifierBatch};
///
/// let batch = IdentifierBatch::new(vec![101, 202], BatchBounds::default()).unwrap();
/// assert_eq!(batch.joined(), "101,202");
///
/// let empty = IdentifierBatch::new(Vec::new(), BatchBounds::default());
/// assert!(matches!(empty, Err(ApiError::InvalidListLength { size: 0, .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierBatch {
    ids: Vec<u32>,
}

impl IdentifierBatch {
    /// Creates a batch, validating its length against `bounds`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidListLength`] if `ids.len()` is outside `bounds`.
    pub fn new(ids: Vec<u32>, bounds: BatchBounds) -> Result<Self, ApiError> {
        bounds.validate(ids.len())?;
        Ok(Self { ids })
    }

    /// Returns the ids in caller order.
    #[must_use]
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Returns the number of ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the batch holds no ids.
    ///
    /// Only possible when constructed with a minimum of zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns `true` if `id` is part of the batch.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Returns the ids comma-joined, as embedded in the request path.
    #[must_use]
    pub fn joined(&self) -> String {
        self.ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Returns the ids not in `resolved`, in batch order and without repeats.
    #[must_use]
    pub fn missing_from(&self, resolved: &HashSet<u32>) -> Vec<u32> {
        let mut seen = HashSet::new();
        self.ids
            .iter()
            .copied()
            .filter(|id| !resolved.contains(id) && seen.insert(*id))
            .collect()
    }
}
