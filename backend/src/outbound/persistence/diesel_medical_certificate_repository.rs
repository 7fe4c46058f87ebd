//! PostgreSQL-backed `MedicalCertificateRepository` implementation using
//! Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{MedicalCertificateRepository, RepositoryError};
use crate::domain::{CertificateValidity, MedicalCertificate};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{MedicalCertificateRow, NewMedicalCertificateRow};
use super::pool::DbPool;
use super::schema::medical_certificates;

/// Diesel-backed implementation of the `MedicalCertificateRepository` port.
#[derive(Clone)]
pub struct DieselMedicalCertificateRepository {
    pool: DbPool,
}

impl DieselMedicalCertificateRepository {
    /// Create a repository backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn validity_to_str(validity: CertificateValidity) -> &'static str {
    match validity {
        CertificateValidity::InValidation => "in_validation",
        CertificateValidity::Valid => "valid",
        CertificateValidity::Rejected => "rejected",
    }
}

fn parse_validity(value: &str) -> Result<CertificateValidity, RepositoryError> {
    match value {
        "in_validation" => Ok(CertificateValidity::InValidation),
        "valid" => Ok(CertificateValidity::Valid),
        "rejected" => Ok(CertificateValidity::Rejected),
        other => Err(RepositoryError::query(format!(
            "unrecognised validity value '{other}'"
        ))),
    }
}

fn row_to_certificate(row: MedicalCertificateRow) -> Result<MedicalCertificate, RepositoryError> {
    Ok(MedicalCertificate {
        id: row.id,
        player: row.player,
        start: row.start_date,
        validity: parse_validity(&row.validity)?,
    })
}

fn certificate_to_row(certificate: &MedicalCertificate) -> NewMedicalCertificateRow<'static> {
    NewMedicalCertificateRow {
        id: certificate.id,
        player: certificate.player,
        start_date: certificate.start,
        validity: validity_to_str(certificate.validity),
    }
}

#[async_trait]
impl MedicalCertificateRepository for DieselMedicalCertificateRepository {
    async fn list(&self) -> Result<Vec<MedicalCertificate>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<MedicalCertificateRow> = medical_certificates::table
            .order(medical_certificates::id.asc())
            .select(MedicalCertificateRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_certificate).collect()
    }

    async fn create(&self, certificate: &MedicalCertificate) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(medical_certificates::table)
            .values(certificate_to_row(certificate))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MedicalCertificate>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<MedicalCertificateRow> = medical_certificates::table
            .find(id)
            .select(MedicalCertificateRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_certificate).transpose()
    }

    async fn update(
        &self,
        id: Uuid,
        certificate: &MedicalCertificate,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(medical_certificates::table.find(id))
            .set(certificate_to_row(certificate))
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

        let deleted = diesel::delete(medical_certificates::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
