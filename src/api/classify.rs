//! Maps a raw status and body to an [`Outcome`] or an [`ApiError`].
//!
//! Classification is a pure function of the operation's [`OperationKind`],
//! the status code, the body and (for batch calls) the batch that was sent.
//! The same inputs always produce the same result.
//!
//! | Status | Single | Batch |
//! |---|---|---|
//! | 200 | `Success` | `Success` |
//! | 207 | `UnexpectedStatus` | `PartialSuccess` |
//! | 400 | by scope (category, group, product) | `InvalidId` |
//! | 401 | `InvalidBearerToken` | `InvalidBearerToken` |
//! | 404 | `NotFound { scope }` | `NotFound { scope }` |
//! | other | `UnexpectedStatus` | `UnexpectedStatus` |

use std::collections::HashSet;

use serde_json::Value;

use crate::api::batch::IdentifierBatch;
use crate::api::error::ApiError;
use crate::api::operation::{Cardinality, EntityScope, RequestSpec};
use crate::api::outcome::Outcome;
use crate::clients::TransportError;

/// Classifies one response for the operation described by `spec`.
///
/// `batch` is the id list that was sent, if the call was a batch call. It is
/// used to work out which ids a 207 left unresolved.
///
/// # Errors
///
/// Returns the [`ApiError`] the status maps to, or
/// [`ApiError::Transport`] with [`TransportError::MalformedBody`] if a
/// success body is not a JSON object with a `results` array.
pub fn classify(
    spec: &RequestSpec,
    status: u16,
    body: &str,
    batch: Option<&IdentifierBatch>,
) -> Result<Outcome<Vec<Value>>, ApiError> {
    let kind = spec.kind;
    match (status, kind.cardinality) {
        (200, _) => {
            let envelope = parse_envelope(status, body)?;
            Ok(Outcome::Success(take_results(status, &envelope)?))
        }
        (207, Cardinality::Batch) => {
            let envelope = parse_envelope(status, body)?;
            let payload = take_results(status, &envelope)?;
            let errors = take_errors(&envelope);
            let unresolved = batch.map_or_else(Vec::new, |batch| {
                unresolved_ids(batch, spec.id_field, &payload, &errors)
            });
            Ok(Outcome::PartialSuccess {
                payload,
                unresolved,
                errors,
            })
        }
        (400, Cardinality::Batch) => Err(ApiError::InvalidId),
        (400, Cardinality::Single) => match kind.scope {
            EntityScope::Category => Err(ApiError::InvalidCategoryId),
            EntityScope::Group => Err(ApiError::InvalidGroupId),
            EntityScope::Product => Err(ApiError::InvalidId),
            EntityScope::Sku | EntityScope::Pricing => Err(unexpected(spec, status)),
        },
        (401, _) => Err(ApiError::InvalidBearerToken),
        (404, _) => Err(ApiError::NotFound { scope: kind.scope }),
        _ => Err(unexpected(spec, status)),
    }
}

const fn unexpected(spec: &RequestSpec, status: u16) -> ApiError {
    ApiError::UnexpectedStatus {
        operation: spec.operation,
        status,
    }
}

fn malformed(status: u16, reason: impl Into<String>) -> ApiError {
    ApiError::Transport(TransportError::MalformedBody {
        status,
        reason: reason.into(),
    })
}

fn parse_envelope(status: u16, body: &str) -> Result<Value, ApiError> {
    serde_json::from_str(body).map_err(|e| malformed(status, e.to_string()))
}

fn take_results(status: u16, envelope: &Value) -> Result<Vec<Value>, ApiError> {
    match envelope.get("results") {
        Some(Value::Array(results)) => Ok(results.clone()),
        Some(_) => Err(malformed(status, "`results` is not an array")),
        None => Err(malformed(status, "missing `results` field")),
    }
}

// Vendor error entries are usually strings; anything else is kept as its JSON text.
fn take_errors(envelope: &Value) -> Vec<String> {
    match envelope.get("errors") {
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| match entry {
                Value::String(message) => message.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(Value::String(message)) => vec![message.clone()],
        _ => Vec::new(),
    }
}

fn unresolved_ids(
    batch: &IdentifierBatch,
    id_field: Option<&str>,
    payload: &[Value],
    errors: &[String],
) -> Vec<u32> {
    let resolved: HashSet<u32> = id_field
        .map(|field| {
            payload
                .iter()
                .filter_map(|entry| entry.get(field))
                .filter_map(Value::as_u64)
                .filter_map(|id| u32::try_from(id).ok())
                .collect()
        })
        .unwrap_or_default();

    if !payload.is_empty() && resolved.is_empty() {
        let mut named = ids_named_in(batch, errors);
        // Every payload entry resolves one id, so at most the rest are unresolved.
        named.truncate(batch.len().saturating_sub(payload.len()));
        return named;
    }
    batch.missing_from(&resolved)
}

// Words after which a number in a vendor error message is an identifier.
const ID_LABELS: [&str; 14] = [
    "id",
    "ids",
    "category",
    "categories",
    "categoryid",
    "group",
    "groups",
    "groupid",
    "product",
    "products",
    "productid",
    "sku",
    "skus",
    "skuid",
];

/// Batch ids that an error message names after an id label ("sku 99999",
/// "groupId=12", "ids 3, 4"), in batch order.
fn ids_named_in(batch: &IdentifierBatch, errors: &[String]) -> Vec<u32> {
    let mut mentioned = HashSet::new();
    for message in errors {
        let mut after_label = false;
        for word in message
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|word| !word.is_empty())
        {
            match word.parse::<u32>() {
                Ok(id) if after_label => {
                    mentioned.insert(id);
                }
                Ok(_) => {}
                Err(_) => after_label = ID_LABELS.contains(&word.to_ascii_lowercase().as_str()),
            }
        }
    }
    let resolved: HashSet<u32> = batch
        .ids()
        .iter()
        .copied()
        .filter(|id| !mentioned.contains(id))
        .collect();
    batch.missing_from(&resolved)
}
