//! # rntly-client
//!
//! Client side of the rntly REST API, shared by the browser dashboard and
//! native tests.
//!
//! ## Responsibilities
//! - Describe each resource (endpoint, labels, payload types, table cells)
//! - Map the five CRUD intents onto HTTP requests ([`api::ResourceClient`])
//! - Hold the state of a list-and-form screen and orchestrate
//!   fetch-on-mount, submit-to-create and delete-then-refetch
//!   ([`view::ResourceView`])
//!
//! ## Dependency rule
//! Depends on `domain` only. The network is reached through the
//! [`transport::Transport`] port so no browser API leaks in here.

pub mod api;
pub mod error;
pub mod record;
pub mod resource;
pub mod transport;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use api::ResourceClient;
pub use error::ClientError;
pub use record::{LeaseRecord, PropertyRecord};
pub use resource::{Cell, Leases, Properties, Resource, Tenants, Tone};
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
pub use view::{Confirm, ResourceView, ViewState, ViewStore};
