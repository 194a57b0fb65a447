//! Tenant — a person renting a property.

use serde::{Deserialize, Serialize};

use crate::error::{RntlyError, ValidationError};
use crate::id::TenantId;
use crate::time::{self, Timestamp};

/// A tenant as stored by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Tenant {
    /// Build a new tenant from a creation payload.
    ///
    /// # Errors
    ///
    /// Returns [`RntlyError::Validation`] when a required field is blank.
    pub fn create(payload: TenantCreate) -> Result<Self, RntlyError> {
        payload.validate()?;
        let now = time::now();
        Ok(Self {
            id: TenantId::new(),
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            phone: payload.phone,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace every mutable field with the update payload.
    ///
    /// # Errors
    ///
    /// Returns [`RntlyError::Validation`] when a required field is blank.
    pub fn apply(&mut self, payload: TenantUpdate) -> Result<(), RntlyError> {
        payload.validate()?;
        self.first_name = payload.first_name;
        self.last_name = payload.last_name;
        self.email = payload.email;
        self.phone = payload.phone;
        self.updated_at = time::now();
        Ok(())
    }

    /// `"First Last"`, as shown in tables and pickers.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields submitted when creating a tenant. Also the creation form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Tenants are updated with the same shape they are created with.
pub type TenantUpdate = TenantCreate;

impl TenantCreate {
    /// Check domain invariants. The phone number is optional.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first blank required field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(ValidationError::EmptyFirstName);
        }
        if self.last_name.trim().is_empty() {
            return Err(ValidationError::EmptyLastName);
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        Ok(())
    }
}

impl From<&Tenant> for TenantUpdate {
    fn from(tenant: &Tenant) -> Self {
        Self {
            first_name: tenant.first_name.clone(),
            last_name: tenant.last_name.clone(),
            email: tenant.email.clone(),
            phone: tenant.phone.clone(),
        }
    }
}
