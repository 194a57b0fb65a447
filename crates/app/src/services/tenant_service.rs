//! Tenant service — use-cases for managing tenants.

use rntly_domain::error::{NotFoundError, RntlyError};
use rntly_domain::id::TenantId;
use rntly_domain::tenant::{Tenant, TenantCreate, TenantUpdate};

use crate::ports::TenantRepository;

/// Application service for tenant CRUD operations.
pub struct TenantService<R> {
    repo: R,
}

impl<R: TenantRepository> TenantService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new tenant.
    ///
    /// # Errors
    ///
    /// Returns [`RntlyError::Validation`] if a required field is blank, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, payload))]
    pub async fn create_tenant(&self, payload: TenantCreate) -> Result<Tenant, RntlyError> {
        let tenant = Tenant::create(payload)?;
        let created = self.repo.create(tenant).await?;
        tracing::info!(tenant_id = %created.id, "tenant created");
        Ok(created)
    }

    /// Look up a tenant by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RntlyError::NotFound`] when no tenant with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_tenant(&self, id: TenantId) -> Result<Tenant, RntlyError> {
        let found = self.repo.get_by_id(id.clone()).await?;
        found.ok_or_else(|| {
            NotFoundError {
                entity: "tenant",
                id: id.into_inner(),
            }
            .into()
        })
    }

    /// List all tenants, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_tenants(&self) -> Result<Vec<Tenant>, RntlyError> {
        self.repo.get_all().await
    }

    /// Replace the mutable fields of an existing tenant.
    ///
    /// # Errors
    ///
    /// Returns [`RntlyError::NotFound`] when the tenant does not exist,
    /// [`RntlyError::Validation`] if the payload is invalid, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update_tenant(
        &self,
        id: TenantId,
        payload: TenantUpdate,
    ) -> Result<Tenant, RntlyError> {
        let mut tenant = self.get_tenant(id).await?;
        tenant.apply(payload)?;
        self.repo.update(tenant).await
    }

    /// Delete a tenant by id.
    ///
    /// # Errors
    ///
    /// Returns [`RntlyError::NotFound`] when the tenant does not exist, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_tenant(&self, id: TenantId) -> Result<(), RntlyError> {
        self.repo.delete(id).await
    }
}
