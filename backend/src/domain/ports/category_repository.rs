//! Repository port for age categories.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::RepositoryError;
use crate::domain::{Category, Slug};

/// Storage port for [`Category`] records, keyed by slug.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List every category, ordered by slug.
    async fn list(&self) -> Result<Vec<Category>, RepositoryError>;

    /// Persist a new category. Fails with a conflict when the slug exists.
    async fn create(&self, category: &Category) -> Result<(), RepositoryError>;

    /// Fetch a category by slug.
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Category>, RepositoryError>;

    /// Replace the category stored under `slug`.
    async fn update(&self, slug: &Slug, category: &Category) -> Result<(), RepositoryError>;

    /// Delete the category stored under `slug`.
    async fn delete(&self, slug: &Slug) -> Result<(), RepositoryError>;
}

/// Deterministic in-memory implementation used by tests and DB-less runs.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    inner: Mutex<Vec<Category>>,
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let mut items = self.inner.lock().await.clone();
        items.sort_by(|a, b| a.slug.as_ref().cmp(b.slug.as_ref()));
        Ok(items)
    }

    async fn create(&self, category: &Category) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        if items.iter().any(|c| c.slug == category.slug) {
            return Err(RepositoryError::conflict(format!(
                "category '{}' already exists",
                category.slug
            )));
        }
        items.push(category.clone());
        Ok(())
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Category>, RepositoryError> {
        let items = self.inner.lock().await;
        Ok(items.iter().find(|c| &c.slug == slug).cloned())
    }

    async fn update(&self, slug: &Slug, category: &Category) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        if items
            .iter()
            .any(|c| c.slug == category.slug && &c.slug != slug)
        {
            return Err(RepositoryError::conflict(format!(
                "category '{}' already exists",
                category.slug
            )));
        }
        let Some(existing) = items.iter_mut().find(|c| &c.slug == slug) else {
            return Err(RepositoryError::NotFound);
        };
        *existing = category.clone();
        Ok(())
    }

    async fn delete(&self, slug: &Slug) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        let before = items.len();
        items.retain(|c| &c.slug != slug);
        if items.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
