//! # rntly-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PropertyRepository` — CRUD for properties
//!   - `TenantRepository` — CRUD for tenants
//!   - `LeaseRepository` — CRUD for leases plus lookups by property and tenant
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PropertyService` — create, update, list, get, delete
//!   - `TenantService` — create, update, list, get, delete
//!   - `LeaseService` — sign, amend, end, list, delete; keeps the leased
//!     property's occupancy status in step with the lease lifecycle
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `rntly-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
