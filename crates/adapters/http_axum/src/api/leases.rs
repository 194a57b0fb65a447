//! JSON REST handlers for leases.
//!
//! Creating, ending or deleting a lease also updates the occupancy of the
//! leased property; see `LeaseService`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use rntly_app::ports::{LeaseRepository, PropertyRepository, TenantRepository};
use rntly_domain::id::LeaseId;
use rntly_domain::lease::{Lease, LeaseCreate, LeaseUpdate};

use super::{CreateResponse, DeleteResponse, GetResponse, ListResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/leases`
pub async fn list<PR, TR, LR>(
    State(state): State<AppState<PR, TR, LR>>,
) -> Result<ListResponse<Lease>, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    let leases = state.lease_service.list_leases().await?;
    Ok(ListResponse::Ok(Json(leases)))
}

/// `GET /api/leases/:id`
pub async fn get<PR, TR, LR>(
    State(state): State<AppState<PR, TR, LR>>,
    Path(id): Path<LeaseId>,
) -> Result<GetResponse<Lease>, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    let lease = state.lease_service.get_lease(id).await?;
    Ok(GetResponse::Ok(Json(lease)))
}

/// `POST /api/leases`
pub async fn create<PR, TR, LR>(
    State(state): State<AppState<PR, TR, LR>>,
    payload: Result<Json<LeaseCreate>, JsonRejection>,
) -> Result<CreateResponse<Lease>, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    let Json(payload) = payload?;
    let created = state.lease_service.create_lease(payload).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/leases/:id`
pub async fn update<PR, TR, LR>(
    State(state): State<AppState<PR, TR, LR>>,
    Path(id): Path<LeaseId>,
    payload: Result<Json<LeaseUpdate>, JsonRejection>,
) -> Result<GetResponse<Lease>, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    let Json(payload) = payload?;
    let saved = state.lease_service.update_lease(id, payload).await?;
    Ok(GetResponse::Ok(Json(saved)))
}

/// `DELETE /api/leases/:id`
pub async fn delete<PR, TR, LR>(
    State(state): State<AppState<PR, TR, LR>>,
    Path(id): Path<LeaseId>,
) -> Result<DeleteResponse, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    state.lease_service.delete_lease(id).await?;
    Ok(DeleteResponse::NoContent)
}
