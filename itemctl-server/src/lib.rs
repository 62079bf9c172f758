//! itemctl-server: HTTP service for items and collections
//!
//! Exposes CRUD endpoints for items and collections, plus the
//! many-to-many membership relation between them, backed by MariaDB.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::DatabaseConfig;
pub use db::{CatalogStore, MemoryStore, Record, SqlStore, StoreError};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
