//! # rntly-domain
//!
//! Pure domain model for the rntly property-management system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Properties** (rentable units with an occupancy status)
//! - Define **Tenants** (people renting properties)
//! - Define **Leases** (agreements binding a tenant to a property)
//! - Define the create/update payloads exchanged over the REST API
//! - Contain all invariant enforcement that does not need IO
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, `client`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod lease;
pub mod property;
pub mod tenant;
