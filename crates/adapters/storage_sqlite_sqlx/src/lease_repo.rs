//! `SQLite` implementation of [`LeaseRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use rntly_app::ports::LeaseRepository;
use rntly_domain::error::{NotFoundError, RntlyError};
use rntly_domain::id::{LeaseId, PropertyId, TenantId};
use rntly_domain::lease::Lease;

use crate::codec::{decode, decode_timestamp, encode_timestamp};
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Lease`].
struct Wrapper(Lease);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Lease> {
        value.map(|w| w.0)
    }

    fn all(rows: Vec<Self>) -> Vec<Lease> {
        rows.into_iter().map(|w| w.0).collect()
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let property_id: String = row.try_get("property_id")?;
        let tenant_id: String = row.try_get("tenant_id")?;
        let start_date: String = row.try_get("start_date")?;
        let end_date: String = row.try_get("end_date")?;
        let status: String = row.try_get("status")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Lease {
            id: LeaseId::from(id),
            property_id: PropertyId::from(property_id),
            tenant_id: TenantId::from(tenant_id),
            start_date: decode(&start_date)?,
            end_date: decode(&end_date)?,
            rent_amount: row.try_get("rent_amount")?,
            deposit: row.try_get("deposit")?,
            status: decode(&status)?,
            created_at: decode_timestamp(&created_at)?,
            updated_at: decode_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO leases (id, property_id, tenant_id, start_date, end_date, rent_amount, deposit, status, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM leases WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM leases ORDER BY created_at DESC";
const SELECT_BY_PROPERTY: &str =
    "SELECT * FROM leases WHERE property_id = ? ORDER BY start_date DESC";
const SELECT_BY_TENANT: &str = "SELECT * FROM leases WHERE tenant_id = ? ORDER BY start_date DESC";
const UPDATE: &str = "UPDATE leases SET start_date = ?, end_date = ?, rent_amount = ?, deposit = ?, status = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM leases WHERE id = ?";

fn not_found(id: &LeaseId) -> RntlyError {
    NotFoundError {
        entity: "lease",
        id: id.to_string(),
    }
    .into()
}

/// `SQLite`-backed lease repository.
#[derive(Clone)]
pub struct SqliteLeaseRepository {
    pool: SqlitePool,
}

impl SqliteLeaseRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn select_where(&self, query: &'static str, key: String) -> Result<Vec<Lease>, RntlyError> {
        let rows: Vec<Wrapper> = sqlx::query_as(query)
            .bind(key)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::all(rows))
    }
}

impl LeaseRepository for SqliteLeaseRepository {
    fn create(&self, lease: Lease) -> impl Future<Output = Result<Lease, RntlyError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(lease.id.as_str())
                .bind(lease.property_id.as_str())
                .bind(lease.tenant_id.as_str())
                .bind(lease.start_date.to_string())
                .bind(lease.end_date.to_string())
                .bind(lease.rent_amount)
                .bind(lease.deposit)
                .bind(lease.status.as_str())
                .bind(encode_timestamp(&lease.created_at))
                .bind(encode_timestamp(&lease.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(lease)
        }
    }

    fn get_by_id(
        &self,
        id: LeaseId,
    ) -> impl Future<Output = Result<Option<Lease>, RntlyError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_str())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Lease>, RntlyError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::all(rows))
        }
    }

    fn find_by_property(
        &self,
        property_id: PropertyId,
    ) -> impl Future<Output = Result<Vec<Lease>, RntlyError>> + Send {
        self.select_where(SELECT_BY_PROPERTY, property_id.into_inner())
    }

    fn find_by_tenant(
        &self,
        tenant_id: TenantId,
    ) -> impl Future<Output = Result<Vec<Lease>, RntlyError>> + Send {
        self.select_where(SELECT_BY_TENANT, tenant_id.into_inner())
    }

    fn update(&self, lease: Lease) -> impl Future<Output = Result<Lease, RntlyError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(lease.start_date.to_string())
                .bind(lease.end_date.to_string())
                .bind(lease.rent_amount)
                .bind(lease.deposit)
                .bind(lease.status.as_str())
                .bind(encode_timestamp(&lease.updated_at))
                .bind(lease.id.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(not_found(&lease.id));
            }
            Ok(lease)
        }
    }

    fn delete(&self, id: LeaseId) -> impl Future<Output = Result<(), RntlyError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(not_found(&id));
            }
            Ok(())
        }
    }
}
