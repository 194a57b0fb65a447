//! `SQLite` implementation of [`TenantRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use rntly_app::ports::TenantRepository;
use rntly_domain::error::{NotFoundError, RntlyError};
use rntly_domain::id::TenantId;
use rntly_domain::tenant::Tenant;

use crate::codec::{decode_timestamp, encode_timestamp};
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Tenant`].
struct Wrapper(Tenant);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Tenant> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Tenant {
            id: TenantId::from(id),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            created_at: decode_timestamp(&created_at)?,
            updated_at: decode_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO tenants (id, first_name, last_name, email, phone, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM tenants WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM tenants ORDER BY created_at DESC";
const UPDATE: &str = "UPDATE tenants SET first_name = ?, last_name = ?, email = ?, phone = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM tenants WHERE id = ?";

fn not_found(id: &TenantId) -> RntlyError {
    NotFoundError {
        entity: "tenant",
        id: id.to_string(),
    }
    .into()
}

/// `SQLite`-backed tenant repository.
#[derive(Clone)]
pub struct SqliteTenantRepository {
    pool: SqlitePool,
}

impl SqliteTenantRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TenantRepository for SqliteTenantRepository {
    fn create(&self, tenant: Tenant) -> impl Future<Output = Result<Tenant, RntlyError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(tenant.id.as_str())
                .bind(&tenant.first_name)
                .bind(&tenant.last_name)
                .bind(&tenant.email)
                .bind(&tenant.phone)
                .bind(encode_timestamp(&tenant.created_at))
                .bind(encode_timestamp(&tenant.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(tenant)
        }
    }

    fn get_by_id(
        &self,
        id: TenantId,
    ) -> impl Future<Output = Result<Option<Tenant>, RntlyError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Tenant>, RntlyError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, tenant: Tenant) -> impl Future<Output = Result<Tenant, RntlyError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&tenant.first_name)
                .bind(&tenant.last_name)
                .bind(&tenant.email)
                .bind(&tenant.phone)
                .bind(encode_timestamp(&tenant.updated_at))
                .bind(tenant.id.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(not_found(&tenant.id));
            }
            Ok(tenant)
        }
    }

    fn delete(&self, id: TenantId) -> impl Future<Output = Result<(), RntlyError>> + Send {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use rntly_domain::tenant::TenantCreate;

    async fn setup() -> SqliteTenantRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteTenantRepository::new(db.pool().clone())
    }

    fn test_tenant(first_name: &str) -> Tenant {
        Tenant::create(TenantCreate {
            first_name: first_name.to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_tenant_when_valid() {
        let repo = setup().await;
        let tenant = test_tenant("Ada");
        let id = tenant.id.clone();

        repo.create(tenant.clone()).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched, tenant);
    }

    #[tokio::test]
    async fn should_return_none_when_tenant_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(TenantId::from("nobody")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_all_tenants() {
        let repo = setup().await;
        repo.create(test_tenant("Ada")).await.unwrap();
        repo.create(test_tenant("Grace")).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_update_tenant_when_exists() {
        let repo = setup().await;
        let mut tenant = test_tenant("Ada");
        let id = tenant.id.clone();
        repo.create(tenant.clone()).await.unwrap();

        tenant.phone = "555-0100".to_string();
        repo.update(tenant).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.phone, "555-0100");
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_tenant() {
        let repo = setup().await;
        let result = repo.delete(TenantId::from("nobody")).await;
        assert!(matches!(result, Err(RntlyError::NotFound(_))));
    }
}
