//! Envelope codec for stored entries.
//!
//! Every entry this layer writes is the JSON envelope `{"value": <payload>}`.
//! Wrapping keeps string-typed backends lossless: `false` and `""` survive
//! the trip, and a bare `"true"` typed by hand stays distinguishable from a
//! flag this layer wrote.
//!
//! Decoding is total. Anything that is not a well-formed envelope holding a
//! representable payload, whether a pre-envelope bare string, truncated
//! JSON, or a foreign writer's entry, comes back unchanged as text.

use serde::{Deserialize, Serialize};

use crate::domain::StoredValue;
use crate::error::StorageResult;

/// On-wire shape of every entry written by this layer.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    value: StoredValue,
}

/// Wrap `value` in the envelope and serialize it.
///
/// # Errors
///
/// Returns [`StorageError::Serialization`](crate::error::StorageError::Serialization)
/// if the serializer rejects the payload; the stored domain contains no
/// such payload, so this only plumbs the error type through.
pub fn encode(value: StoredValue) -> StorageResult<String> {
    let envelope = Envelope { value };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parse a raw store entry back into a [`StoredValue`].
///
/// Entries that do not parse as an envelope decode to the raw text
/// unchanged, so callers never lose data that was stored under a key
/// before the envelope format existed.
#[must_use]
pub fn decode(raw: &str) -> StoredValue {
    serde_json::from_str::<Envelope>(raw).map_or_else(
        |_| StoredValue::Text(raw.to_owned()),
        |envelope| envelope.value,
    )
}
