//! # rntly-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** under `/api`
//!   (`/api/properties`, `/api/tenants`, `/api/leases`, …)
//! - Serve the compiled single page dashboard from a directory, falling back
//!   to its `index.html` so client-side routes survive a reload
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `rntly-app` (for port traits and services) and `rntly-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
