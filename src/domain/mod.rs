//! Domain models.
//!
//! The key namespace and the payload type shared by the codec, the
//! gateway, and embedders.

pub mod key;
pub mod value;

pub use key::{ActiveKey, DeprecatedKey, StorageKey};
pub use value::StoredValue;
