//! Database layer - connection pool, repositories and store backends
//!
//! # Design Principles
//!
//! - One shared connection pool, injected; no global handle
//! - Writes are followed by a re-read through the same mapping path
//! - Rely on DB keys for idempotent membership inserts
//! - Transaction for the one multi-step operation (collection delete)

pub mod memory;
pub mod pool;
pub mod repos;
pub mod sql;
pub mod store;

#[cfg(test)]
pub(crate) mod conformance;

pub use memory::MemoryStore;
pub use pool::create_pool;
pub use sql::SqlStore;
pub use store::{CatalogStore, Record, RecordKind, StoreError};
