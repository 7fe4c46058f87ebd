//! Repository port for time slots.

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::TimeSlot;

/// Storage port for [`TimeSlot`] records, keyed by id.
#[async_trait]
pub trait TimeSlotRepository: Send + Sync {
    /// List every time slot, ordered by id.
    async fn list(&self) -> Result<Vec<TimeSlot>, RepositoryError>;

    /// Persist a new time slot.
    async fn create(&self, slot: &TimeSlot) -> Result<(), RepositoryError>;

    /// Fetch a time slot by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<TimeSlot>, RepositoryError>;

    /// Replace the time slot stored under `id`.
    async fn update(&self, id: Uuid, slot: &TimeSlot) -> Result<(), RepositoryError>;

    /// Delete the time slot stored under `id`.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

/// Deterministic in-memory implementation used by tests and DB-less runs.
#[derive(Debug, Default)]
pub struct InMemoryTimeSlotRepository {
    inner: Mutex<Vec<TimeSlot>>,
}

#[async_trait]
impl TimeSlotRepository for InMemoryTimeSlotRepository {
    async fn list(&self) -> Result<Vec<TimeSlot>, RepositoryError> {
        let mut items = self.inner.lock().await.clone();
        items.sort_by_key(|s| s.id);
        Ok(items)
    }

    async fn create(&self, slot: &TimeSlot) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        if items.iter().any(|s| s.id == slot.id) {
            return Err(RepositoryError::conflict(format!(
                "time slot {} already exists",
                slot.id
            )));
        }
        items.push(slot.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TimeSlot>, RepositoryError> {
        let items = self.inner.lock().await;
        Ok(items.iter().find(|s| s.id == id).cloned())
    }

    async fn update(&self, id: Uuid, slot: &TimeSlot) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        let Some(existing) = items.iter_mut().find(|s| s.id == id) else {
            return Err(RepositoryError::NotFound);
        };
        *existing = slot.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        let before = items.len();
        items.retain(|s| s.id != id);
        if items.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
