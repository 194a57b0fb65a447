//! Shared application state for axum handlers.

use std::sync::Arc;

use rntly_app::ports::{LeaseRepository, PropertyRepository, TenantRepository};
use rntly_app::services::lease_service::LeaseService;
use rntly_app::services::property_service::PropertyService;
use rntly_app::services::tenant_service::TenantService;

/// Application state shared across all axum handlers.
///
/// Generic over the three repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<PR, TR, LR> {
    /// Property CRUD service.
    pub property_service: Arc<PropertyService<PR>>,
    /// Tenant CRUD service.
    pub tenant_service: Arc<TenantService<TR>>,
    /// Lease service, which also drives property occupancy.
    pub lease_service: Arc<LeaseService<LR, PR, TR>>,
}

impl<PR, TR, LR> Clone for AppState<PR, TR, LR> {
    fn clone(&self) -> Self {
        Self {
            property_service: Arc::clone(&self.property_service),
            tenant_service: Arc::clone(&self.tenant_service),
            lease_service: Arc::clone(&self.lease_service),
        }
    }
}

impl<PR, TR, LR> AppState<PR, TR, LR>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        property_service: PropertyService<PR>,
        tenant_service: TenantService<TR>,
        lease_service: LeaseService<LR, PR, TR>,
    ) -> Self {
        Self {
            property_service: Arc::new(property_service),
            tenant_service: Arc::new(tenant_service),
            lease_service: Arc::new(lease_service),
        }
    }
}

impl<PR, TR, LR> AppState<PR, TR, LR>
where
    PR: PropertyRepository + Clone + Send + Sync + 'static,
    TR: TenantRepository + Clone + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    /// Build every service from the repositories.
    ///
    /// The property and tenant repositories are shared with the lease
    /// service, hence the `Clone` bound.
    pub fn from_repositories(properties: PR, tenants: TR, leases: LR) -> Self {
        Self::new(
            PropertyService::new(properties.clone()),
            TenantService::new(tenants.clone()),
            LeaseService::new(leases, properties, tenants),
        )
    }
}
