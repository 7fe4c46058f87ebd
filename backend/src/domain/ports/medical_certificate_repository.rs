//! Repository port for medical certificates.

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::MedicalCertificate;

/// Storage port for [`MedicalCertificate`] records, keyed by id.
#[async_trait]
pub trait MedicalCertificateRepository: Send + Sync {
    /// List every certificate, ordered by id.
    async fn list(&self) -> Result<Vec<MedicalCertificate>, RepositoryError>;

    /// Persist a new certificate.
    async fn create(&self, certificate: &MedicalCertificate) -> Result<(), RepositoryError>;

    /// Fetch a certificate by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<MedicalCertificate>, RepositoryError>;

    /// Replace the certificate stored under `id`.
    async fn update(
        &self,
        id: Uuid,
        certificate: &MedicalCertificate,
    ) -> Result<(), RepositoryError>;

    /// Delete the certificate stored under `id`.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

/// Deterministic in-memory implementation used by tests and DB-less runs.
#[derive(Debug, Default)]
pub struct InMemoryMedicalCertificateRepository {
    inner: Mutex<Vec<MedicalCertificate>>,
}

#[async_trait]
impl MedicalCertificateRepository for InMemoryMedicalCertificateRepository {
    async fn list(&self) -> Result<Vec<MedicalCertificate>, RepositoryError> {
        let mut items = self.inner.lock().await.clone();
        items.sort_by_key(|c| c.id);
        Ok(items)
    }

    async fn create(&self, certificate: &MedicalCertificate) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        if items.iter().any(|c| c.id == certificate.id) {
            return Err(RepositoryError::conflict(format!(
                "certificate {} already exists",
                certificate.id
            )));
        }
        items.push(certificate.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MedicalCertificate>, RepositoryError> {
        let items = self.inner.lock().await;
        Ok(items.iter().find(|c| c.id == id).cloned())
    }

    async fn update(
        &self,
        id: Uuid,
        certificate: &MedicalCertificate,
    ) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        let Some(existing) = items.iter_mut().find(|c| c.id == id) else {
            return Err(RepositoryError::NotFound);
        };
        *existing = certificate.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        let before = items.len();
        items.retain(|c| c.id != id);
        if items.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CertificateValidity;
    use chrono::NaiveDate;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn review_state_changes_persist() {
        let repo = InMemoryMedicalCertificateRepository::default();
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).expect("date");
        let certificate = MedicalCertificate::new(Uuid::new_v4(), date);
        repo.create(&certificate).await.expect("create");

        let mut reviewed = certificate.clone();
        reviewed.validity = CertificateValidity::Valid;
        repo.update(certificate.id, &reviewed).await.expect("update");

        let found = repo.find_by_id(certificate.id).await.expect("find");
        assert_eq!(
            found.map(|c| c.validity),
            Some(CertificateValidity::Valid)
        );
    }
}
