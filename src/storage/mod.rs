//! Storage layer module.
//!
//! This module provides trait-based store abstraction allowing different
//! backends to be used without changing the gateway.

pub mod factory;
pub mod file;
pub mod memory;
pub mod traits;

pub use factory::create_store;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::{DynStoreBackend, StoreBackend};
