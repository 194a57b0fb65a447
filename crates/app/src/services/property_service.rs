//! Property service — use-cases for managing properties.

use rntly_domain::error::{NotFoundError, RntlyError};
use rntly_domain::id::PropertyId;
use rntly_domain::property::{Property, PropertyCreate, PropertyUpdate};

use crate::ports::PropertyRepository;

/// Application service for property CRUD operations.
pub struct PropertyService<R> {
    repo: R,
}

impl<R: PropertyRepository> PropertyService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new vacant property.
    ///
    /// # Errors
    ///
    /// Returns [`RntlyError::Validation`] if the payload is invalid, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, payload), fields(address = %payload.address))]
    pub async fn create_property(&self, payload: PropertyCreate) -> Result<Property, RntlyError> {
        let property = Property::create(payload)?;
        let created = self.repo.create(property).await?;
        tracing::info!(property_id = %created.id, "property created");
        Ok(created)
    }

    /// Look up a property by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RntlyError::NotFound`] when no property with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_property(&self, id: PropertyId) -> Result<Property, RntlyError> {
        let found = self.repo.get_by_id(id.clone()).await?;
        found.ok_or_else(|| {
            NotFoundError {
                entity: "property",
                id: id.into_inner(),
            }
            .into()
        })
    }

    /// List all properties, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_properties(&self) -> Result<Vec<Property>, RntlyError> {
        self.repo.get_all().await
    }

    /// Replace the mutable fields of an existing property.
    ///
    /// # Errors
    ///
    /// Returns [`RntlyError::NotFound`] when the property does not exist,
    /// [`RntlyError::Validation`] if the payload is invalid, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update_property(
        &self,
        id: PropertyId,
        payload: PropertyUpdate,
    ) -> Result<Property, RntlyError> {
        let mut property = self.get_property(id).await?;
        property.apply(payload)?;
        self.repo.update(property).await
    }

    /// Delete a property by id.
    ///
    /// # Errors
    ///
    /// Returns [`RntlyError::NotFound`] when the property does not exist, or
    /// a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_property(&self, id: PropertyId) -> Result<(), RntlyError> {
        self.repo.delete(id).await
    }
}
