//! Repository port for gymnasiums.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::RepositoryError;
use crate::domain::{Gymnasium, Slug};

/// Storage port for [`Gymnasium`] records, keyed by slug.
#[async_trait]
pub trait GymnasiumRepository: Send + Sync {
    /// List every gymnasium, ordered by slug.
    async fn list(&self) -> Result<Vec<Gymnasium>, RepositoryError>;

    /// Persist a new gymnasium. Fails with a conflict when the slug exists.
    async fn create(&self, gymnasium: &Gymnasium) -> Result<(), RepositoryError>;

    /// Fetch a gymnasium by slug.
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Gymnasium>, RepositoryError>;

    /// Replace the gymnasium stored under `slug`.
    async fn update(&self, slug: &Slug, gymnasium: &Gymnasium) -> Result<(), RepositoryError>;

    /// Delete the gymnasium stored under `slug`.
    async fn delete(&self, slug: &Slug) -> Result<(), RepositoryError>;
}

/// Deterministic in-memory implementation used by tests and DB-less runs.
#[derive(Debug, Default)]
pub struct InMemoryGymnasiumRepository {
    inner: Mutex<Vec<Gymnasium>>,
}

#[async_trait]
impl GymnasiumRepository for InMemoryGymnasiumRepository {
    async fn list(&self) -> Result<Vec<Gymnasium>, RepositoryError> {
        let mut items = self.inner.lock().await.clone();
        items.sort_by(|a, b| a.slug.as_ref().cmp(b.slug.as_ref()));
        Ok(items)
    }

    async fn create(&self, gymnasium: &Gymnasium) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        if items.iter().any(|g| g.slug == gymnasium.slug) {
            return Err(RepositoryError::conflict(format!(
                "gymnasium '{}' already exists",
                gymnasium.slug
            )));
        }
        items.push(gymnasium.clone());
        Ok(())
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Gymnasium>, RepositoryError> {
        let items = self.inner.lock().await;
        Ok(items.iter().find(|g| &g.slug == slug).cloned())
    }

    async fn update(&self, slug: &Slug, gymnasium: &Gymnasium) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        if items
            .iter()
            .any(|g| g.slug == gymnasium.slug && &g.slug != slug)
        {
            return Err(RepositoryError::conflict(format!(
                "gymnasium '{}' already exists",
                gymnasium.slug
            )));
        }
        let Some(existing) = items.iter_mut().find(|g| &g.slug == slug) else {
            return Err(RepositoryError::NotFound);
        };
        *existing = gymnasium.clone();
        Ok(())
    }

    async fn delete(&self, slug: &Slug) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        let before = items.len();
        items.retain(|g| &g.slug != slug);
        if items.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn update_replaces_the_stored_record() {
        let repo = InMemoryGymnasiumRepository::default();
        let hall = Gymnasium::new("Halle B", "1 rue Haute", "Lyon", "69003", None)
            .expect("gymnasium");
        repo.create(&hall).await.expect("create");

        let mut renovated = hall.clone();
        renovated.surface = Some(1200);
        repo.update(&hall.slug, &renovated).await.expect("update");

        let found = repo.find_by_slug(&hall.slug).await.expect("find");
        assert_eq!(found.and_then(|g| g.surface), Some(1200));
    }

    #[rstest]
    #[tokio::test]
    async fn renaming_onto_an_existing_slug_is_a_conflict() {
        let repo = InMemoryGymnasiumRepository::default();
        let halle_b = Gymnasium::new("Halle B", "1 rue Haute", "Lyon", "69003", None)
            .expect("gymnasium");
        repo.create(&halle_b).await.expect("create");
        let halle_c = Gymnasium::new("Halle C", "2 rue Haute", "Lyon", "69003", None)
            .expect("gymnasium");
        repo.create(&halle_c).await.expect("create");

        let renamed = Gymnasium::new("Halle C", "1 rue Haute", "Lyon", "69003", None)
            .expect("gymnasium");
        let err = repo
            .update(&halle_b.slug, &renamed)
            .await
            .expect_err("slug already taken");
        assert!(matches!(err, RepositoryError::Conflict { .. }));
    }
}
