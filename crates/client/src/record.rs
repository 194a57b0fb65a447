//! Records as the client reads them back from the API.
//!
//! The server only ever writes the statuses its enums know, but the client
//! treats `status` as free text: a value it has never seen still renders as a
//! row instead of failing the whole list.

use rntly_domain::id::{LeaseId, PropertyId, TenantId};
use rntly_domain::lease::Lease;
use rntly_domain::property::{Property, PropertyKind, PropertyStatus};
use rntly_domain::time::{Date, Timestamp};
use serde::{Deserialize, Serialize};

/// A property as listed by `GET /properties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: PropertyId,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub bedrooms: u32,
    pub rent_amount: f64,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PropertyRecord {
    /// Whether the status reads `vacant`. Every other value counts as taken.
    #[must_use]
    pub fn is_vacant(&self) -> bool {
        self.status == PropertyStatus::Vacant.as_str()
    }
}

impl From<Property> for PropertyRecord {
    fn from(property: Property) -> Self {
        Self {
            id: property.id,
            address: property.address,
            kind: property.kind,
            bedrooms: property.bedrooms,
            rent_amount: property.rent_amount,
            status: property.status.as_str().to_string(),
            created_at: property.created_at,
            updated_at: property.updated_at,
        }
    }
}

/// A lease as listed by `GET /leases`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseRecord {
    pub id: LeaseId,
    pub property_id: PropertyId,
    pub tenant_id: TenantId,
    pub start_date: Date,
    pub end_date: Date,
    pub rent_amount: f64,
    pub deposit: f64,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Lease> for LeaseRecord {
    fn from(lease: Lease) -> Self {
        Self {
            id: lease.id,
            property_id: lease.property_id,
            tenant_id: lease.tenant_id,
            start_date: lease.start_date,
            end_date: lease.end_date,
            rent_amount: lease.rent_amount,
            deposit: lease.deposit,
            status: lease.status.as_str().to_string(),
            created_at: lease.created_at,
            updated_at: lease.updated_at,
        }
    }
}
