//! JSON REST API handler modules.
//!
//! | Route                        | Methods              |
//! |------------------------------|----------------------|
//! | `/properties`                | `GET`, `POST`        |
//! | `/properties/{id}`           | `GET`, `PUT`, `DELETE` |
//! | `/properties/{id}/leases`    | `GET`                |
//! | `/tenants`                   | `GET`, `POST`        |
//! | `/tenants/{id}`              | `GET`, `PUT`, `DELETE` |
//! | `/tenants/{id}/leases`       | `GET`                |
//! | `/leases`                    | `GET`, `POST`        |
//! | `/leases/{id}`               | `GET`, `PUT`, `DELETE` |
//!
//! Any other path below `/api` answers a JSON 404.

#[allow(clippy::missing_errors_doc)]
pub mod leases;
#[allow(clippy::missing_errors_doc)]
pub mod properties;
#[allow(clippy::missing_errors_doc)]
pub mod tenants;

use axum::Json;
use axum::Router;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Serialize;

use rntly_app::ports::{LeaseRepository, PropertyRepository, TenantRepository};
use rntly_domain::error::{NotFoundError, RntlyError};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from a list endpoint.
pub enum ListResponse<T> {
    Ok(Json<Vec<T>>),
}

impl<T: Serialize> IntoResponse for ListResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from a get or update endpoint.
pub enum GetResponse<T> {
    Ok(Json<T>),
}

impl<T: Serialize> IntoResponse for GetResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from a create endpoint.
pub enum CreateResponse<T> {
    Created(Json<T>),
}

impl<T: Serialize> IntoResponse for CreateResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from a delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Build the `/api` sub-router.
pub fn routes<PR, TR, LR>() -> Router<AppState<PR, TR, LR>>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    Router::new()
        // Properties
        .route(
            "/properties",
            get(properties::list::<PR, TR, LR>).post(properties::create::<PR, TR, LR>),
        )
        .route(
            "/properties/{id}",
            get(properties::get::<PR, TR, LR>)
                .put(properties::update::<PR, TR, LR>)
                .delete(properties::delete::<PR, TR, LR>),
        )
        .route(
            "/properties/{id}/leases",
            get(properties::leases::<PR, TR, LR>),
        )
        // Tenants
        .route(
            "/tenants",
            get(tenants::list::<PR, TR, LR>).post(tenants::create::<PR, TR, LR>),
        )
        .route(
            "/tenants/{id}",
            get(tenants::get::<PR, TR, LR>)
                .put(tenants::update::<PR, TR, LR>)
                .delete(tenants::delete::<PR, TR, LR>),
        )
        .route("/tenants/{id}/leases", get(tenants::leases::<PR, TR, LR>))
        // Leases
        .route(
            "/leases",
            get(leases::list::<PR, TR, LR>).post(leases::create::<PR, TR, LR>),
        )
        .route(
            "/leases/{id}",
            get(leases::get::<PR, TR, LR>)
                .put(leases::update::<PR, TR, LR>)
                .delete(leases::delete::<PR, TR, LR>),
        )
        .fallback(route_not_found)
}

async fn route_not_found(uri: Uri) -> ApiError {
    RntlyError::from(NotFoundError {
        entity: "route",
        id: uri.path().to_string(),
    })
    .into()
}
