//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`RntlyError`]
//! via `#[from]`. Storage adapters box their concrete error type into
//! [`RntlyError::Storage`] so the domain never depends on a database crate.

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum RntlyError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    #[error("conflict")]
    Conflict(#[from] ConflictError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A payload broke one of the domain invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("address is required")]
    EmptyAddress,

    #[error("first name is required")]
    EmptyFirstName,

    #[error("last name is required")]
    EmptyLastName,

    #[error("email is required")]
    EmptyEmail,

    #[error("rent amount must be positive")]
    NonPositiveRent,

    #[error("deposit cannot be negative")]
    NegativeDeposit,

    #[error("end date must be after start date")]
    InvalidDateRange,

    #[error("property not found")]
    UnknownProperty,

    #[error("tenant not found")]
    UnknownTenant,

    /// The submitted body could not be decoded into a payload.
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

/// A record looked up by id does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Human-readable record kind (`"property"`, `"tenant"`, `"lease"`).
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}

/// The request is valid on its own but clashes with current state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("property is not vacant")]
    PropertyNotVacant,
}

/// A stored or submitted string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariantError {
    /// Which enumeration was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}
