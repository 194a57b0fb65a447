//! Lease — a rental agreement binding a tenant to a property for a period.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RntlyError, UnknownVariantError, ValidationError};
use crate::id::{LeaseId, PropertyId, TenantId};
use crate::time::{self, Date, Timestamp};

/// Lifecycle stage of a lease.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaseStatus {
    #[default]
    Active,
    Ended,
    Upcoming,
}

impl LeaseStatus {
    /// Wire name of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Ended => "ended",
            Self::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for LeaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaseStatus {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "ended" => Ok(Self::Ended),
            "upcoming" => Ok(Self::Upcoming),
            other => Err(UnknownVariantError {
                kind: "lease status",
                value: other.to_string(),
            }),
        }
    }
}

/// A lease as stored by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lease {
    pub id: LeaseId,
    pub property_id: PropertyId,
    pub tenant_id: TenantId,
    pub start_date: Date,
    pub end_date: Date,
    pub rent_amount: f64,
    pub deposit: f64,
    pub status: LeaseStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Lease {
    /// Build a new active lease from a creation payload.
    ///
    /// Only the payload's own invariants are checked here; whether the
    /// referenced property and tenant exist is the service's concern.
    ///
    /// # Errors
    ///
    /// Returns [`RntlyError::Validation`] when the payload is invalid.
    pub fn create(payload: LeaseCreate) -> Result<Self, RntlyError> {
        payload.validate()?;
        let now = time::now();
        Ok(Self {
            id: LeaseId::new(),
            property_id: payload.property_id,
            tenant_id: payload.tenant_id,
            start_date: payload.start_date,
            end_date: payload.end_date,
            rent_amount: payload.rent_amount,
            deposit: payload.deposit,
            status: LeaseStatus::Active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace every mutable field with the update payload.
    ///
    /// The property and tenant references cannot be changed.
    ///
    /// # Errors
    ///
    /// Returns [`RntlyError::Validation`] when the payload is invalid; the
    /// lease is left untouched in that case.
    pub fn apply(&mut self, payload: LeaseUpdate) -> Result<(), RntlyError> {
        payload.validate()?;
        self.start_date = payload.start_date;
        self.end_date = payload.end_date;
        self.rent_amount = payload.rent_amount;
        self.deposit = payload.deposit;
        self.status = payload.status;
        self.updated_at = time::now();
        Ok(())
    }
}

/// Fields submitted when creating a lease. Also the creation form state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseCreate {
    pub property_id: PropertyId,
    pub tenant_id: TenantId,
    pub start_date: Date,
    pub end_date: Date,
    pub rent_amount: f64,
    pub deposit: f64,
}

impl Default for LeaseCreate {
    fn default() -> Self {
        let today = time::today();
        Self {
            property_id: PropertyId::from(String::new()),
            tenant_id: TenantId::from(String::new()),
            start_date: today,
            end_date: today,
            rent_amount: 0.0,
            deposit: 0.0,
        }
    }
}

impl LeaseCreate {
    /// Check the payload's own invariants.
    ///
    /// # Errors
    ///
    /// See [`validate_terms`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_terms(self.start_date, self.end_date, self.rent_amount, self.deposit)
    }
}

/// Full replacement of a lease's mutable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseUpdate {
    pub start_date: Date,
    pub end_date: Date,
    pub rent_amount: f64,
    pub deposit: f64,
    pub status: LeaseStatus,
}

impl LeaseUpdate {
    /// Check the payload's own invariants.
    ///
    /// # Errors
    ///
    /// See [`validate_terms`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_terms(self.start_date, self.end_date, self.rent_amount, self.deposit)
    }
}

impl From<&Lease> for LeaseUpdate {
    fn from(lease: &Lease) -> Self {
        Self {
            start_date: lease.start_date,
            end_date: lease.end_date,
            rent_amount: lease.rent_amount,
            deposit: lease.deposit,
            status: lease.status,
        }
    }
}

/// Shared lease term rules.
///
/// # Errors
///
/// - [`ValidationError::InvalidDateRange`] unless `end` is strictly after `start`
/// - [`ValidationError::NonPositiveRent`] unless the rent is positive
/// - [`ValidationError::NegativeDeposit`] when the deposit is below zero
pub fn validate_terms(
    start: Date,
    end: Date,
    rent_amount: f64,
    deposit: f64,
) -> Result<(), ValidationError> {
    if end <= start {
        return Err(ValidationError::InvalidDateRange);
    }
    if rent_amount.is_nan() || rent_amount <= 0.0 {
        return Err(ValidationError::NonPositiveRent);
    }
    if deposit.is_nan() || deposit < 0.0 {
        return Err(ValidationError::NegativeDeposit);
    }
    Ok(())
}
