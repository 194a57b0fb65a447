//! In-memory repositories shared by the service tests.
//!
//! Each repository is `Clone` and clones share the same map, so a test can
//! hand one copy to a service and inspect the other.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use rntly_domain::error::{NotFoundError, RntlyError};
use rntly_domain::id::{LeaseId, PropertyId, TenantId};
use rntly_domain::lease::Lease;
use rntly_domain::property::Property;
use rntly_domain::tenant::Tenant;

use crate::ports::{LeaseRepository, PropertyRepository, TenantRepository};

type Table<K, V> = Arc<Mutex<HashMap<K, V>>>;

#[derive(Clone, Default)]
pub struct InMemoryPropertyRepo {
    store: Table<PropertyId, Property>,
}

#[derive(Clone, Default)]
pub struct InMemoryTenantRepo {
    store: Table<TenantId, Tenant>,
}

#[derive(Clone, Default)]
pub struct InMemoryLeaseRepo {
    store: Table<LeaseId, Lease>,
}

fn not_found(entity: &'static str, id: impl ToString) -> RntlyError {
    NotFoundError {
        entity,
        id: id.to_string(),
    }
    .into()
}

impl PropertyRepository for InMemoryPropertyRepo {
    fn create(&self, property: Property) -> impl Future<Output = Result<Property, RntlyError>> + Send {
        let mut store = self.store.lock().unwrap();
        store.insert(property.id.clone(), property.clone());
        async { Ok(property) }
    }

    fn get_by_id(
        &self,
        id: PropertyId,
    ) -> impl Future<Output = Result<Option<Property>, RntlyError>> + Send {
        let result = self.store.lock().unwrap().get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Property>, RntlyError>> + Send {
        let mut result: Vec<Property> = self.store.lock().unwrap().values().cloned().collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        async { Ok(result) }
    }

    fn update(&self, property: Property) -> impl Future<Output = Result<Property, RntlyError>> + Send {
        let mut store = self.store.lock().unwrap();
        let result = match store.get_mut(&property.id) {
            Some(slot) => {
                *slot = property.clone();
                Ok(property)
            }
            None => Err(not_found("property", &property.id)),
        };
        async { result }
    }

    fn delete(&self, id: PropertyId) -> impl Future<Output = Result<(), RntlyError>> + Send {
        let removed = self.store.lock().unwrap().remove(&id);
        let result = removed.map(|_| ()).ok_or_else(|| not_found("property", &id));
        async { result }
    }
}

impl TenantRepository for InMemoryTenantRepo {
    fn create(&self, tenant: Tenant) -> impl Future<Output = Result<Tenant, RntlyError>> + Send {
        let mut store = self.store.lock().unwrap();
        store.insert(tenant.id.clone(), tenant.clone());
        async { Ok(tenant) }
    }

    fn get_by_id(
        &self,
        id: TenantId,
    ) -> impl Future<Output = Result<Option<Tenant>, RntlyError>> + Send {
        let result = self.store.lock().unwrap().get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Tenant>, RntlyError>> + Send {
        let mut result: Vec<Tenant> = self.store.lock().unwrap().values().cloned().collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        async { Ok(result) }
    }

    fn update(&self, tenant: Tenant) -> impl Future<Output = Result<Tenant, RntlyError>> + Send {
        let mut store = self.store.lock().unwrap();
        let result = match store.get_mut(&tenant.id) {
            Some(slot) => {
                *slot = tenant.clone();
                Ok(tenant)
            }
            None => Err(not_found("tenant", &tenant.id)),
        };
        async { result }
    }

    fn delete(&self, id: TenantId) -> impl Future<Output = Result<(), RntlyError>> + Send {
        let removed = self.store.lock().unwrap().remove(&id);
        let result = removed.map(|_| ()).ok_or_else(|| not_found("tenant", &id));
        async { result }
    }
}

impl LeaseRepository for InMemoryLeaseRepo {
    fn create(&self, lease: Lease) -> impl Future<Output = Result<Lease, RntlyError>> + Send {
        let mut store = self.store.lock().unwrap();
        store.insert(lease.id.clone(), lease.clone());
        async { Ok(lease) }
    }

    fn get_by_id(&self, id: LeaseId) -> impl Future<Output = Result<Option<Lease>, RntlyError>> + Send {
        let result = self.store.lock().unwrap().get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Lease>, RntlyError>> + Send {
        let mut result: Vec<Lease> = self.store.lock().unwrap().values().cloned().collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        async { Ok(result) }
    }

    fn find_by_property(
        &self,
        property_id: PropertyId,
    ) -> impl Future<Output = Result<Vec<Lease>, RntlyError>> + Send {
        let mut result: Vec<Lease> = self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|lease| lease.property_id == property_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        async { Ok(result) }
    }

    fn find_by_tenant(
        &self,
        tenant_id: TenantId,
    ) -> impl Future<Output = Result<Vec<Lease>, RntlyError>> + Send {
        let mut result: Vec<Lease> = self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|lease| lease.tenant_id == tenant_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        async { Ok(result) }
    }

    fn update(&self, lease: Lease) -> impl Future<Output = Result<Lease, RntlyError>> + Send {
        let mut store = self.store.lock().unwrap();
        let result = match store.get_mut(&lease.id) {
            Some(slot) => {
                *slot = lease.clone();
                Ok(lease)
            }
            None => Err(not_found("lease", &lease.id)),
        };
        async { result }
    }

    fn delete(&self, id: LeaseId) -> impl Future<Output = Result<(), RntlyError>> + Send {
        let removed = self.store.lock().unwrap().remove(&id);
        let result = removed.map(|_| ()).ok_or_else(|| not_found("lease", &id));
        async { result }
    }
}
