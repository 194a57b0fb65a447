//! Typed REST client, one instance per resource.
//!
//! | Call          | Request                    |
//! |---------------|----------------------------|
//! | `list`        | `GET <path>`               |
//! | `get(id)`     | `GET <path>/<id>`          |
//! | `create(p)`   | `POST <path>` with `p`     |
//! | `update(id,p)`| `PUT <path>/<id>` with `p` |
//! | `delete(id)`  | `DELETE <path>/<id>`       |
//!
//! Ids are percent-encoded into a single path segment.
//!
//! No retries and no timeout policy. Any non-2xx response becomes
//! [`ClientError::Status`], carrying the server's `{"error": ...}` message
//! when the body has one.

use std::marker::PhantomData;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::record::LeaseRecord;
use crate::resource::{Leases, Properties, Resource, Tenants};
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Turn a non-2xx response into an error.
fn check_response(resp: ApiResponse) -> Result<ApiResponse, ClientError> {
    if resp.is_success() {
        return Ok(resp);
    }
    let message = match serde_json::from_str::<ErrorBody>(&resp.body) {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", resp.status),
    };
    Err(ClientError::Status {
        status: resp.status,
        message,
    })
}

/// REST client for the resource `R` over transport `T`.
pub struct ResourceClient<R, T> {
    transport: T,
    resource: PhantomData<fn() -> R>,
}

impl<R, T: Clone> Clone for ResourceClient<R, T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            resource: PhantomData,
        }
    }
}

impl<R, T> ResourceClient<R, T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            resource: PhantomData,
        }
    }
}

impl<R, T: Transport> ResourceClient<R, T> {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        tracing::debug!(method = %request.method, path = %request.path, "api request");
        check_response(self.transport.send(request).await?)
    }

    async fn fetch<D: DeserializeOwned>(&self, request: ApiRequest) -> Result<D, ClientError> {
        let resp = self.send(request).await?;
        Ok(serde_json::from_str(&resp.body)?)
    }
}

fn nested_path(parent: &str, id: &str, child: &str) -> String {
    format!("{parent}/{}{child}", urlencoding::encode(id))
}

impl<R: Resource, T: Transport> ResourceClient<R, T> {
    fn item_path(id: &str) -> String {
        nested_path(R::PATH, id, "")
    }

    /// Fetch the whole collection.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on network failure, non-2xx status or an
    /// unexpected body.
    pub async fn list(&self) -> Result<Vec<R::Record>, ClientError> {
        self.fetch(ApiRequest::get(R::PATH)).await
    }

    /// Fetch one record by id.
    ///
    /// # Errors
    ///
    /// See [`Self::list`].
    pub async fn get(&self, id: &str) -> Result<R::Record, ClientError> {
        self.fetch(ApiRequest::get(Self::item_path(id))).await
    }

    /// Create a record and return it as stored by the server.
    ///
    /// # Errors
    ///
    /// See [`Self::list`].
    pub async fn create(&self, payload: &R::Create) -> Result<R::Record, ClientError> {
        let body = serde_json::to_value(payload)?;
        self.fetch(ApiRequest::post(R::PATH, body)).await
    }

    /// Replace the mutable fields of a record.
    ///
    /// # Errors
    ///
    /// See [`Self::list`].
    pub async fn update(&self, id: &str, payload: &R::Update) -> Result<R::Record, ClientError> {
        let body = serde_json::to_value(payload)?;
        self.fetch(ApiRequest::put(Self::item_path(id), body)).await
    }

    /// Delete a record. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on network failure or non-2xx status.
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.send(ApiRequest::delete(Self::item_path(id))).await?;
        Ok(())
    }
}

impl<T: Transport> ResourceClient<Leases, T> {
    /// Leases signed on a property, latest start first.
    ///
    /// # Errors
    ///
    /// See [`Self::list`].
    pub async fn list_for_property(
        &self,
        property_id: &str,
    ) -> Result<Vec<LeaseRecord>, ClientError> {
        self.fetch(ApiRequest::get(nested_path(
            Properties::PATH,
            property_id,
            "/leases",
        )))
        .await
    }

    /// Leases held by a tenant, latest start first.
    ///
    /// # Errors
    ///
    /// See [`Self::list`].
    pub async fn list_for_tenant(&self, tenant_id: &str) -> Result<Vec<LeaseRecord>, ClientError> {
        self.fetch(ApiRequest::get(nested_path(Tenants::PATH, tenant_id, "/leases")))
            .await
    }
}
