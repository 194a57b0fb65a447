//! # rntly-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `rntly-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `rntly-app` (for port traits) and `rntly-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod pool;

mod codec;
pub mod lease_repo;
pub mod property_repo;
pub mod tenant_repo;

pub use lease_repo::SqliteLeaseRepository;
pub use pool::{Config, Database};
pub use property_repo::SqlitePropertyRepository;
pub use tenant_repo::SqliteTenantRepository;
