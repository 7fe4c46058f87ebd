//! PostgreSQL-backed `LicenseRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::License;
use crate::domain::ports::{LicenseRepository, RepositoryError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{LicenseRow, NewLicenseRow};
use super::pool::DbPool;
use super::schema::licenses;

/// Diesel-backed implementation of the `LicenseRepository` port.
#[derive(Clone)]
pub struct DieselLicenseRepository {
    pool: DbPool,
}

impl DieselLicenseRepository {
    /// Create a repository backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_license(row: LicenseRow) -> License {
    License {
        id: row.id,
        player: row.player,
        license_number: row.license_number,
        is_payed: row.is_payed,
    }
}

fn license_to_row(license: &License) -> NewLicenseRow<'_> {
    NewLicenseRow {
        id: license.id,
        player: license.player,
        license_number: &license.license_number,
        is_payed: license.is_payed,
    }
}

#[async_trait]
impl LicenseRepository for DieselLicenseRepository {
    async fn list(&self) -> Result<Vec<License>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<LicenseRow> = licenses::table
            .order(licenses::id.asc())
            .select(LicenseRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_license).collect())
    }

    async fn create(&self, license: &License) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(licenses::table)
            .values(license_to_row(license))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<License>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<LicenseRow> = licenses::table
            .find(id)
            .select(LicenseRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_license))
    }

    async fn update(&self, id: Uuid, license: &License) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(licenses::table.find(id))
            .set(license_to_row(license))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(licenses::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
