//! Storage port — repository traits for persistence.
//!
//! `update` and `delete` report [`RntlyError::NotFound`] when no row matched,
//! so services can surface a 404 without a separate lookup.
//!
//! [`RntlyError::NotFound`]: rntly_domain::error::RntlyError::NotFound

use std::future::Future;

use rntly_domain::error::RntlyError;
use rntly_domain::id::{LeaseId, PropertyId, TenantId};
use rntly_domain::lease::Lease;
use rntly_domain::property::Property;
use rntly_domain::tenant::Tenant;

/// Repository for persisting and querying [`Property`] records.
pub trait PropertyRepository {
    /// Insert a new property.
    fn create(
        &self,
        property: Property,
    ) -> impl Future<Output = Result<Property, RntlyError>> + Send;

    /// Get a property by its identifier.
    fn get_by_id(
        &self,
        id: PropertyId,
    ) -> impl Future<Output = Result<Option<Property>, RntlyError>> + Send;

    /// Get all properties, newest first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Property>, RntlyError>> + Send;

    /// Overwrite an existing property.
    fn update(
        &self,
        property: Property,
    ) -> impl Future<Output = Result<Property, RntlyError>> + Send;

    /// Delete a property by its identifier.
    fn delete(&self, id: PropertyId) -> impl Future<Output = Result<(), RntlyError>> + Send;
}

/// Repository for persisting and querying [`Tenant`] records.
pub trait TenantRepository {
    /// Insert a new tenant.
    fn create(&self, tenant: Tenant) -> impl Future<Output = Result<Tenant, RntlyError>> + Send;

    /// Get a tenant by its identifier.
    fn get_by_id(
        &self,
        id: TenantId,
    ) -> impl Future<Output = Result<Option<Tenant>, RntlyError>> + Send;

    /// Get all tenants, newest first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Tenant>, RntlyError>> + Send;

    /// Overwrite an existing tenant.
    fn update(&self, tenant: Tenant) -> impl Future<Output = Result<Tenant, RntlyError>> + Send;

    /// Delete a tenant by its identifier.
    fn delete(&self, id: TenantId) -> impl Future<Output = Result<(), RntlyError>> + Send;
}

/// Repository for persisting and querying [`Lease`] records.
pub trait LeaseRepository {
    /// Insert a new lease.
    fn create(&self, lease: Lease) -> impl Future<Output = Result<Lease, RntlyError>> + Send;

    /// Get a lease by its identifier.
    fn get_by_id(
        &self,
        id: LeaseId,
    ) -> impl Future<Output = Result<Option<Lease>, RntlyError>> + Send;

    /// Get all leases, newest first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Lease>, RntlyError>> + Send;

    /// Get the leases signed on a property, latest start date first.
    fn find_by_property(
        &self,
        property_id: PropertyId,
    ) -> impl Future<Output = Result<Vec<Lease>, RntlyError>> + Send;

    /// Get the leases held by a tenant, latest start date first.
    fn find_by_tenant(
        &self,
        tenant_id: TenantId,
    ) -> impl Future<Output = Result<Vec<Lease>, RntlyError>> + Send;

    /// Overwrite an existing lease.
    fn update(&self, lease: Lease) -> impl Future<Output = Result<Lease, RntlyError>> + Send;

    /// Delete a lease by its identifier.
    fn delete(&self, id: LeaseId) -> impl Future<Output = Result<(), RntlyError>> + Send;
}
