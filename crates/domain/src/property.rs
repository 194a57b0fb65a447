//! Property — a rentable unit (apartment, house, studio).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RntlyError, UnknownVariantError, ValidationError};
use crate::id::PropertyId;
use crate::time::{self, Timestamp};

/// Kind of dwelling. Serialized under the `type` key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    #[default]
    Apartment,
    House,
    Studio,
}

impl PropertyKind {
    /// Every kind, in the order offered by the creation form.
    pub const ALL: [Self; 3] = [Self::Apartment, Self::House, Self::Studio];

    /// Wire name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::House => "house",
            Self::Studio => "studio",
        }
    }

    /// Capitalized label for select options.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Studio => "Studio",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyKind {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownVariantError {
                kind: "property type",
                value: s.to_string(),
            })
    }
}

/// Occupancy of a property. Maintained by the lease lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Vacant,
    Occupied,
}

impl PropertyStatus {
    /// Wire name of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vacant => "vacant",
            Self::Occupied => "occupied",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vacant" => Ok(Self::Vacant),
            "occupied" => Ok(Self::Occupied),
            other => Err(UnknownVariantError {
                kind: "property status",
                value: other.to_string(),
            }),
        }
    }
}

/// A rentable property as stored by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub bedrooms: u32,
    pub rent_amount: f64,
    pub status: PropertyStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Property {
    /// Build a new vacant property from a creation payload.
    ///
    /// # Errors
    ///
    /// Returns [`RntlyError::Validation`] when the payload is invalid.
    pub fn create(payload: PropertyCreate) -> Result<Self, RntlyError> {
        payload.validate()?;
        let now = time::now();
        Ok(Self {
            id: PropertyId::new(),
            address: payload.address,
            kind: payload.kind,
            bedrooms: payload.bedrooms,
            rent_amount: payload.rent_amount,
            status: PropertyStatus::Vacant,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace every mutable field with the update payload.
    ///
    /// # Errors
    ///
    /// Returns [`RntlyError::Validation`] when the payload is invalid; the
    /// property is left untouched in that case.
    pub fn apply(&mut self, payload: PropertyUpdate) -> Result<(), RntlyError> {
        payload.validate()?;
        self.address = payload.address;
        self.kind = payload.kind;
        self.bedrooms = payload.bedrooms;
        self.rent_amount = payload.rent_amount;
        self.status = payload.status;
        self.touch();
        Ok(())
    }

    /// Change the occupancy status, bumping `updated_at`.
    pub fn set_status(&mut self, status: PropertyStatus) {
        self.status = status;
        self.touch();
    }

    /// Whether a new lease may be signed on this property.
    #[must_use]
    pub fn is_vacant(&self) -> bool {
        self.status == PropertyStatus::Vacant
    }

    fn touch(&mut self) {
        self.updated_at = time::now();
    }
}

/// Fields submitted when creating a property. Also the creation form state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyCreate {
    pub address: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub bedrooms: u32,
    pub rent_amount: f64,
}

impl Default for PropertyCreate {
    fn default() -> Self {
        Self {
            address: String::new(),
            kind: PropertyKind::Apartment,
            bedrooms: 1,
            rent_amount: 0.0,
        }
    }
}

impl PropertyCreate {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyAddress`] for a blank address and
    /// [`ValidationError::NonPositiveRent`] when the rent is not positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.address, self.rent_amount)
    }
}

/// Full replacement of a property's mutable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyUpdate {
    pub address: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub bedrooms: u32,
    pub rent_amount: f64,
    pub status: PropertyStatus,
}

impl PropertyUpdate {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Same rules as [`PropertyCreate::validate`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.address, self.rent_amount)
    }
}

impl From<&Property> for PropertyUpdate {
    fn from(property: &Property) -> Self {
        Self {
            address: property.address.clone(),
            kind: property.kind,
            bedrooms: property.bedrooms,
            rent_amount: property.rent_amount,
            status: property.status,
        }
    }
}

fn validate_fields(address: &str, rent_amount: f64) -> Result<(), ValidationError> {
    if address.trim().is_empty() {
        return Err(ValidationError::EmptyAddress);
    }
    if rent_amount.is_nan() || rent_amount <= 0.0 {
        return Err(ValidationError::NonPositiveRent);
    }
    Ok(())
}
