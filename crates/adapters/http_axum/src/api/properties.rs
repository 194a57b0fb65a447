//! JSON REST handlers for properties.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use rntly_app::ports::{LeaseRepository, PropertyRepository, TenantRepository};
use rntly_domain::id::PropertyId;
use rntly_domain::lease::Lease;
use rntly_domain::property::{Property, PropertyCreate, PropertyUpdate};

use super::{CreateResponse, DeleteResponse, GetResponse, ListResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/properties`
pub async fn list<PR, TR, LR>(
    State(state): State<AppState<PR, TR, LR>>,
) -> Result<ListResponse<Property>, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    let properties = state.property_service.list_properties().await?;
    Ok(ListResponse::Ok(Json(properties)))
}

/// `GET /api/properties/:id`
pub async fn get<PR, TR, LR>(
    State(state): State<AppState<PR, TR, LR>>,
    Path(id): Path<PropertyId>,
) -> Result<GetResponse<Property>, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    let property = state.property_service.get_property(id).await?;
    Ok(GetResponse::Ok(Json(property)))
}

/// `POST /api/properties`
pub async fn create<PR, TR, LR>(
    State(state): State<AppState<PR, TR, LR>>,
    payload: Result<Json<PropertyCreate>, JsonRejection>,
) -> Result<CreateResponse<Property>, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    let Json(payload) = payload?;
    let created = state.property_service.create_property(payload).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/properties/:id`
pub async fn update<PR, TR, LR>(
    State(state): State<AppState<PR, TR, LR>>,
    Path(id): Path<PropertyId>,
    payload: Result<Json<PropertyUpdate>, JsonRejection>,
) -> Result<GetResponse<Property>, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    let Json(payload) = payload?;
    let saved = state.property_service.update_property(id, payload).await?;
    Ok(GetResponse::Ok(Json(saved)))
}

/// `DELETE /api/properties/:id`
pub async fn delete<PR, TR, LR>(
    State(state): State<AppState<PR, TR, LR>>,
    Path(id): Path<PropertyId>,
) -> Result<DeleteResponse, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    state.property_service.delete_property(id).await?;
    Ok(DeleteResponse::NoContent)
}

/// `GET /api/properties/:id/leases`
pub async fn leases<PR, TR, LR>(
    State(state): State<AppState<PR, TR, LR>>,
    Path(id): Path<PropertyId>,
) -> Result<ListResponse<Lease>, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    let leases = state.lease_service.list_leases_for_property(id).await?;
    Ok(ListResponse::Ok(Json(leases)))
}
