//! Repository port for federation licenses.

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::License;

/// Storage port for [`License`] records, keyed by id.
#[async_trait]
pub trait LicenseRepository: Send + Sync {
    /// List every license, ordered by id.
    async fn list(&self) -> Result<Vec<License>, RepositoryError>;

    /// Persist a new license.
    async fn create(&self, license: &License) -> Result<(), RepositoryError>;

    /// Fetch a license by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<License>, RepositoryError>;

    /// Replace the license stored under `id`.
    async fn update(&self, id: Uuid, license: &License) -> Result<(), RepositoryError>;

    /// Delete the license stored under `id`.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

/// Deterministic in-memory implementation used by tests and DB-less runs.
#[derive(Debug, Default)]
pub struct InMemoryLicenseRepository {
    inner: Mutex<Vec<License>>,
}

#[async_trait]
impl LicenseRepository for InMemoryLicenseRepository {
    async fn list(&self) -> Result<Vec<License>, RepositoryError> {
        let mut items = self.inner.lock().await.clone();
        items.sort_by_key(|l| l.id);
        Ok(items)
    }

    async fn create(&self, license: &License) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        if items.iter().any(|l| l.id == license.id) {
            return Err(RepositoryError::conflict(format!(
                "license {} already exists",
                license.id
            )));
        }
        items.push(license.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<License>, RepositoryError> {
        let items = self.inner.lock().await;
        Ok(items.iter().find(|l| l.id == id).cloned())
    }

    async fn update(&self, id: Uuid, license: &License) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        let Some(existing) = items.iter_mut().find(|l| l.id == id) else {
            return Err(RepositoryError::NotFound);
        };
        *existing = license.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        let before = items.len();
        items.retain(|l| l.id != id);
        if items.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
