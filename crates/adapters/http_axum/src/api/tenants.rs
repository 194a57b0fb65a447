//! JSON REST handlers for tenants.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use rntly_app::ports::{LeaseRepository, PropertyRepository, TenantRepository};
use rntly_domain::id::TenantId;
use rntly_domain::lease::Lease;
use rntly_domain::tenant::{Tenant, TenantCreate, TenantUpdate};

use super::{CreateResponse, DeleteResponse, GetResponse, ListResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/tenants`
pub async fn list<PR, TR, LR>(
    State(state): State<AppState<PR, TR, LR>>,
) -> Result<ListResponse<Tenant>, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    let tenants = state.tenant_service.list_tenants().await?;
    Ok(ListResponse::Ok(Json(tenants)))
}

/// `GET /api/tenants/:id`
pub async fn get<PR, TR, LR>(
    State(state): State<AppState<PR, TR, LR>>,
    Path(id): Path<TenantId>,
) -> Result<GetResponse<Tenant>, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    let tenant = state.tenant_service.get_tenant(id).await?;
    Ok(GetResponse::Ok(Json(tenant)))
}

/// `POST /api/tenants`
pub async fn create<PR, TR, LR>(
    State(state): State<AppState<PR, TR, LR>>,
    payload: Result<Json<TenantCreate>, JsonRejection>,
) -> Result<CreateResponse<Tenant>, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    let Json(payload) = payload?;
    let created = state.tenant_service.create_tenant(payload).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/tenants/:id`
pub async fn update<PR, TR, LR>(
    State(state): State<AppState<PR, TR, LR>>,
    Path(id): Path<TenantId>,
    payload: Result<Json<TenantUpdate>, JsonRejection>,
) -> Result<GetResponse<Tenant>, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    let Json(payload) = payload?;
    let saved = state.tenant_service.update_tenant(id, payload).await?;
    Ok(GetResponse::Ok(Json(saved)))
}

/// `DELETE /api/tenants/:id`
pub async fn delete<PR, TR, LR>(
    State(state): State<AppState<PR, TR, LR>>,
    Path(id): Path<TenantId>,
) -> Result<DeleteResponse, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    state.tenant_service.delete_tenant(id).await?;
    Ok(DeleteResponse::NoContent)
}

/// `GET /api/tenants/:id/leases`
pub async fn leases<PR, TR, LR>(
    State(state): State<AppState<PR, TR, LR>>,
    Path(id): Path<TenantId>,
) -> Result<ListResponse<Lease>, ApiError>
where
    PR: PropertyRepository + Send + Sync + 'static,
    TR: TenantRepository + Send + Sync + 'static,
    LR: LeaseRepository + Send + Sync + 'static,
{
    let leases = state.lease_service.list_leases_for_tenant(id).await?;
    Ok(ListResponse::Ok(Json(leases)))
}
