//! Repository port for teams.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::RepositoryError;
use crate::domain::{Slug, Team};

/// Storage port for [`Team`] records, keyed by slug.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// List every team, ordered by slug.
    async fn list(&self) -> Result<Vec<Team>, RepositoryError>;

    /// Persist a new team. Fails with a conflict when the slug exists.
    async fn create(&self, team: &Team) -> Result<(), RepositoryError>;

    /// Fetch a team by slug.
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Team>, RepositoryError>;

    /// Replace the team stored under `slug`.
    async fn update(&self, slug: &Slug, team: &Team) -> Result<(), RepositoryError>;

    /// Delete the team stored under `slug`.
    async fn delete(&self, slug: &Slug) -> Result<(), RepositoryError>;
}

/// Deterministic in-memory implementation used by tests and DB-less runs.
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    inner: Mutex<Vec<Team>>,
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn list(&self) -> Result<Vec<Team>, RepositoryError> {
        let mut items = self.inner.lock().await.clone();
        items.sort_by(|a, b| a.slug.as_ref().cmp(b.slug.as_ref()));
        Ok(items)
    }

    async fn create(&self, team: &Team) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        if items.iter().any(|t| t.slug == team.slug) {
            return Err(RepositoryError::conflict(format!(
                "team '{}' already exists",
                team.slug
            )));
        }
        items.push(team.clone());
        Ok(())
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Team>, RepositoryError> {
        let items = self.inner.lock().await;
        Ok(items.iter().find(|t| &t.slug == slug).cloned())
    }

    async fn update(&self, slug: &Slug, team: &Team) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        if items.iter().any(|t| t.slug == team.slug && &t.slug != slug) {
            return Err(RepositoryError::conflict(format!(
                "team '{}' already exists",
                team.slug
            )));
        }
        let Some(existing) = items.iter_mut().find(|t| &t.slug == slug) else {
            return Err(RepositoryError::NotFound);
        };
        *existing = team.clone();
        Ok(())
    }

    async fn delete(&self, slug: &Slug) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        let before = items.len();
        items.retain(|t| &t.slug != slug);
        if items.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
