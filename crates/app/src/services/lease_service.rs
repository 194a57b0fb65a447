//! Lease service — use-cases for signing, amending and ending leases.
//!
//! Besides CRUD on leases, this service keeps the leased property's
//! occupancy in step with the lease lifecycle:
//!
//! | Event                               | Property status |
//! |-------------------------------------|-----------------|
//! | lease created                       | `occupied`      |
//! | lease updated to `ended`            | `vacant`        |
//! | `active` lease deleted              | `vacant`        |
//!
//! The status writes are best-effort and not transactional with the lease
//! write: a failure is logged and the lease operation still succeeds.

use rntly_domain::error::{ConflictError, NotFoundError, RntlyError, ValidationError};
use rntly_domain::id::{LeaseId, PropertyId, TenantId};
use rntly_domain::lease::{Lease, LeaseCreate, LeaseStatus, LeaseUpdate};
use rntly_domain::property::PropertyStatus;

use crate::ports::{LeaseRepository, PropertyRepository, TenantRepository};

/// Application service for lease operations.
pub struct LeaseService<L, P, T> {
    leases: L,
    properties: P,
    tenants: T,
}

impl<L, P, T> LeaseService<L, P, T>
where
    L: LeaseRepository,
    P: PropertyRepository,
    T: TenantRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(leases: L, properties: P, tenants: T) -> Self {
        Self {
            leases,
            properties,
            tenants,
        }
    }

    /// Sign a new lease on a vacant property and mark the property occupied.
    ///
    /// # Errors
    ///
    /// - [`RntlyError::Validation`] when the property or tenant does not
    ///   exist, or the lease terms are invalid
    /// - [`RntlyError::Conflict`] when the property is not vacant
    /// - a storage error propagated from a repository
    #[tracing::instrument(skip(self, payload), fields(property_id = %payload.property_id, tenant_id = %payload.tenant_id))]
    pub async fn create_lease(&self, payload: LeaseCreate) -> Result<Lease, RntlyError> {
        let Some(mut property) = self
            .properties
            .get_by_id(payload.property_id.clone())
            .await?
        else {
            return Err(ValidationError::UnknownProperty.into());
        };
        if !property.is_vacant() {
            return Err(ConflictError::PropertyNotVacant.into());
        }
        if self
            .tenants
            .get_by_id(payload.tenant_id.clone())
            .await?
            .is_none()
        {
            return Err(ValidationError::UnknownTenant.into());
        }

        let lease = Lease::create(payload)?;
        let created = self.leases.create(lease).await?;
        tracing::info!(lease_id = %created.id, "lease created");

        property.set_status(PropertyStatus::Occupied);
        if let Err(err) = self.properties.update(property).await {
            tracing::warn!(error = %err, "failed to mark property occupied");
        }

        Ok(created)
    }

    /// Look up a lease by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RntlyError::NotFound`] when no lease with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_lease(&self, id: LeaseId) -> Result<Lease, RntlyError> {
        let found = self.leases.get_by_id(id.clone()).await?;
        found.ok_or_else(|| {
            NotFoundError {
                entity: "lease",
                id: id.into_inner(),
            }
            .into()
        })
    }

    /// List all leases, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_leases(&self) -> Result<Vec<Lease>, RntlyError> {
        self.leases.get_all().await
    }

    /// List the leases signed on a property.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_leases_for_property(
        &self,
        property_id: PropertyId,
    ) -> Result<Vec<Lease>, RntlyError> {
        self.leases.find_by_property(property_id).await
    }

    /// List the leases held by a tenant.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_leases_for_tenant(
        &self,
        tenant_id: TenantId,
    ) -> Result<Vec<Lease>, RntlyError> {
        self.leases.find_by_tenant(tenant_id).await
    }

    /// Replace the mutable fields of a lease.
    ///
    /// Ending a lease frees its property.
    ///
    /// # Errors
    ///
    /// Returns [`RntlyError::NotFound`] when the lease does not exist,
    /// [`RntlyError::Validation`] if the terms are invalid, or a storage
    /// error from a repository.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update_lease(
        &self,
        id: LeaseId,
        payload: LeaseUpdate,
    ) -> Result<Lease, RntlyError> {
        let mut lease = self.get_lease(id).await?;
        let previous = lease.status;
        lease.apply(payload)?;

        if lease.status == LeaseStatus::Ended && previous != LeaseStatus::Ended {
            self.release_property(lease.property_id.clone()).await;
        }

        self.leases.update(lease).await
    }

    /// Delete a lease. Deleting an active lease frees its property.
    ///
    /// # Errors
    ///
    /// Returns [`RntlyError::NotFound`] when the lease does not exist, or a
    /// storage error from a repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_lease(&self, id: LeaseId) -> Result<(), RntlyError> {
        let lease = self.get_lease(id).await?;
        if lease.status == LeaseStatus::Active {
            self.release_property(lease.property_id).await;
        }
        self.leases.delete(lease.id).await
    }

    async fn release_property(&self, property_id: PropertyId) {
        let mut property = match self.properties.get_by_id(property_id).await {
            Ok(Some(property)) => property,
            Ok(None) => {
                tracing::warn!("leased property no longer exists");
                return;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load leased property");
                return;
            }
        };
        property.set_status(PropertyStatus::Vacant);
        if let Err(err) = self.properties.update(property).await {
            tracing::warn!(error = %err, "failed to mark property vacant");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{InMemoryLeaseRepo, InMemoryPropertyRepo, InMemoryTenantRepo};
    use chrono::NaiveDate;
    use rntly_domain::property::{Property, PropertyCreate};
    use rntly_domain::tenant::{Tenant, TenantCreate};

    struct Fixture {
        svc: LeaseService<InMemoryLeaseRepo, InMemoryPropertyRepo, InMemoryTenantRepo>,
        properties: InMemoryPropertyRepo,
        property: Property,
        tenant: Tenant,
    }

    async fn setup() -> Fixture {
        let properties = InMemoryPropertyRepo::default();
        let tenants = InMemoryTenantRepo::default();

        let property = Property::create(PropertyCreate {
            address: "1 Main St".to_string(),
            rent_amount: 1500.0,
            ..PropertyCreate::default()
        })
        .unwrap();
        properties.create(property.clone()).await.unwrap();

        let tenant = Tenant::create(TenantCreate {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
        })
        .unwrap();
        tenants.create(tenant.clone()).await.unwrap();

        Fixture {
            svc: LeaseService::new(InMemoryLeaseRepo::default(), properties.clone(), tenants),
            properties,
            property,
            tenant,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn payload(fx: &Fixture) -> LeaseCreate {
        LeaseCreate {
            property_id: fx.property.id.clone(),
            tenant_id: fx.tenant.id.clone(),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 12, 31),
            rent_amount: 1500.0,
            deposit: 3000.0,
        }
    }

    async fn property_status(fx: &Fixture) -> PropertyStatus {
        fx.properties
            .get_by_id(fx.property.id.clone())
            .await
            .unwrap()
            .unwrap()
            .status
    }

    #[tokio::test]
    async fn should_create_active_lease_and_occupy_property() {
        let fx = setup().await;

        let lease = fx.svc.create_lease(payload(&fx)).await.unwrap();
        assert_eq!(lease.status, LeaseStatus::Active);
        assert_eq!(property_status(&fx).await, PropertyStatus::Occupied);
    }

    #[tokio::test]
    async fn should_reject_lease_on_occupied_property() {
        let fx = setup().await;
        fx.svc.create_lease(payload(&fx)).await.unwrap();

        let result = fx.svc.create_lease(payload(&fx)).await;
        assert!(matches!(
            result,
            Err(RntlyError::Conflict(ConflictError::PropertyNotVacant))
        ));
    }

    #[tokio::test]
    async fn should_reject_lease_for_unknown_property() {
        let fx = setup().await;
        let mut input = payload(&fx);
        input.property_id = PropertyId::from("missing");

        let result = fx.svc.create_lease(input).await;
        assert!(matches!(
            result,
            Err(RntlyError::Validation(ValidationError::UnknownProperty))
        ));
    }

    #[tokio::test]
    async fn should_reject_lease_for_unknown_tenant() {
        let fx = setup().await;
        let mut input = payload(&fx);
        input.tenant_id = TenantId::from("missing");

        let result = fx.svc.create_lease(input).await;
        assert!(matches!(
            result,
            Err(RntlyError::Validation(ValidationError::UnknownTenant))
        ));
        assert_eq!(property_status(&fx).await, PropertyStatus::Vacant);
    }

    #[tokio::test]
    async fn should_reject_inverted_dates_without_touching_property() {
        let fx = setup().await;
        let mut input = payload(&fx);
        input.end_date = date(2023, 1, 1);

        let result = fx.svc.create_lease(input).await;
        assert!(matches!(
            result,
            Err(RntlyError::Validation(ValidationError::InvalidDateRange))
        ));
        assert_eq!(property_status(&fx).await, PropertyStatus::Vacant);
    }

    #[tokio::test]
    async fn should_free_property_when_lease_ended() {
        let fx = setup().await;
        let lease = fx.svc.create_lease(payload(&fx)).await.unwrap();

        let mut update = LeaseUpdate::from(&lease);
        update.status = LeaseStatus::Ended;
        let saved = fx.svc.update_lease(lease.id.clone(), update).await.unwrap();

        assert_eq!(saved.status, LeaseStatus::Ended);
        assert_eq!(property_status(&fx).await, PropertyStatus::Vacant);
    }

    #[tokio::test]
    async fn should_keep_property_occupied_when_only_rent_changes() {
        let fx = setup().await;
        let lease = fx.svc.create_lease(payload(&fx)).await.unwrap();

        let mut update = LeaseUpdate::from(&lease);
        update.rent_amount = 1600.0;
        fx.svc.update_lease(lease.id.clone(), update).await.unwrap();

        assert_eq!(property_status(&fx).await, PropertyStatus::Occupied);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_lease() {
        let fx = setup().await;
        let update = LeaseUpdate {
            start_date: date(2024, 1, 1),
            end_date: date(2024, 6, 1),
            rent_amount: 1000.0,
            deposit: 0.0,
            status: LeaseStatus::Active,
        };

        let result = fx.svc.update_lease(LeaseId::from("missing"), update).await;
        assert!(matches!(result, Err(RntlyError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_free_property_when_active_lease_deleted() {
        let fx = setup().await;
        let lease = fx.svc.create_lease(payload(&fx)).await.unwrap();

        fx.svc.delete_lease(lease.id.clone()).await.unwrap();

        assert_eq!(property_status(&fx).await, PropertyStatus::Vacant);
        assert!(fx.svc.list_leases().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_list_leases_by_property_and_tenant() {
        let fx = setup().await;
        let lease = fx.svc.create_lease(payload(&fx)).await.unwrap();

        let by_property = fx
            .svc
            .list_leases_for_property(fx.property.id.clone())
            .await
            .unwrap();
        let by_tenant = fx
            .svc
            .list_leases_for_tenant(fx.tenant.id.clone())
            .await
            .unwrap();
        let other = fx
            .svc
            .list_leases_for_tenant(TenantId::from("someone-else"))
            .await
            .unwrap();

        assert_eq!(by_property, vec![lease.clone()]);
        assert_eq!(by_tenant, vec![lease]);
        assert!(other.is_empty());
    }
}
