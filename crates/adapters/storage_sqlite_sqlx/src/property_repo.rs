//! `SQLite` implementation of [`PropertyRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use rntly_app::ports::PropertyRepository;
use rntly_domain::error::{NotFoundError, RntlyError};
use rntly_domain::id::PropertyId;
use rntly_domain::property::Property;

use crate::codec::{decode, decode_timestamp, encode_timestamp};
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Property`].
struct Wrapper(Property);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Property> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let address: String = row.try_get("address")?;
        let kind: String = row.try_get("type")?;
        let bedrooms: u32 = row.try_get("bedrooms")?;
        let rent_amount: f64 = row.try_get("rent_amount")?;
        let status: String = row.try_get("status")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Property {
            id: PropertyId::from(id),
            address,
            kind: decode(&kind)?,
            bedrooms,
            rent_amount,
            status: decode(&status)?,
            created_at: decode_timestamp(&created_at)?,
            updated_at: decode_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO properties (id, address, type, bedrooms, rent_amount, status, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM properties WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM properties ORDER BY created_at DESC";
const UPDATE: &str = "UPDATE properties SET address = ?, type = ?, bedrooms = ?, rent_amount = ?, status = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM properties WHERE id = ?";

fn not_found(id: &PropertyId) -> RntlyError {
    NotFoundError {
        entity: "property",
        id: id.to_string(),
    }
    .into()
}

/// `SQLite`-backed property repository.
#[derive(Clone)]
pub struct SqlitePropertyRepository {
    pool: SqlitePool,
}

impl SqlitePropertyRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PropertyRepository for SqlitePropertyRepository {
    fn create(
        &self,
        property: Property,
    ) -> impl Future<Output = Result<Property, RntlyError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(property.id.as_str())
                .bind(&property.address)
                .bind(property.kind.as_str())
                .bind(property.bedrooms)
                .bind(property.rent_amount)
                .bind(property.status.as_str())
                .bind(encode_timestamp(&property.created_at))
                .bind(encode_timestamp(&property.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(property)
        }
    }

    fn get_by_id(
        &self,
        id: PropertyId,
    ) -> impl Future<Output = Result<Option<Property>, RntlyError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Property>, RntlyError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        property: Property,
    ) -> impl Future<Output = Result<Property, RntlyError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&property.address)
                .bind(property.kind.as_str())
                .bind(property.bedrooms)
                .bind(property.rent_amount)
                .bind(property.status.as_str())
                .bind(encode_timestamp(&property.updated_at))
                .bind(property.id.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(not_found(&property.id));
            }
            Ok(property)
        }
    }

    fn delete(&self, id: PropertyId) -> impl Future<Output = Result<(), RntlyError>> + Send {
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
