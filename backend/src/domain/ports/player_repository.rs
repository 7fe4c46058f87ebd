//! Repository port for players.
//!
//! Players live inside a user's namespace: every lookup is scoped by the
//! owning username, and the `(first_name, last_name, owner)` triple is
//! unique across the whole store.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::RepositoryError;
use crate::domain::{Player, Slug};

/// Storage port for [`Player`] records, keyed by `(owner, slug)`.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// List the players owned by `owner`, ordered by slug.
    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Player>, RepositoryError>;

    /// Persist a new player. Fails with a conflict when another player with
    /// the same `(first_name, last_name, owner)` triple exists.
    async fn create(&self, player: &Player) -> Result<(), RepositoryError>;

    /// Fetch one of `owner`'s players by slug.
    async fn find(&self, owner: &str, slug: &Slug) -> Result<Option<Player>, RepositoryError>;

    /// Replace the player stored under `(owner, slug)`.
    async fn update(
        &self,
        owner: &str,
        slug: &Slug,
        player: &Player,
    ) -> Result<(), RepositoryError>;

    /// Delete the player stored under `(owner, slug)`.
    async fn delete(&self, owner: &str, slug: &Slug) -> Result<(), RepositoryError>;
}

/// Deterministic in-memory implementation used by tests and DB-less runs.
///
/// Enforces the uniqueness triple the same way the PostgreSQL unique index
/// does, so handler tests exercise the conflict path without a database.
#[derive(Debug, Default)]
pub struct InMemoryPlayerRepository {
    inner: Mutex<Vec<Player>>,
}

fn same_triple(a: &Player, b: &Player) -> bool {
    a.first_name == b.first_name && a.last_name == b.last_name && a.owner == b.owner
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Player>, RepositoryError> {
        let items = self.inner.lock().await;
        let mut owned: Vec<Player> = items.iter().filter(|p| p.owner == owner).cloned().collect();
        owned.sort_by(|a, b| a.slug.as_ref().cmp(b.slug.as_ref()));
        Ok(owned)
    }

    async fn create(&self, player: &Player) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        if items.iter().any(|p| same_triple(p, player)) {
            return Err(RepositoryError::conflict(format!(
                "player '{} {}' already registered for '{}'",
                player.first_name, player.last_name, player.owner
            )));
        }
        items.push(player.clone());
        Ok(())
    }

    async fn find(&self, owner: &str, slug: &Slug) -> Result<Option<Player>, RepositoryError> {
        let items = self.inner.lock().await;
        Ok(items
            .iter()
            .find(|p| p.owner == owner && &p.slug == slug)
            .cloned())
    }

    async fn update(
        &self,
        owner: &str,
        slug: &Slug,
        player: &Player,
    ) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        if items
            .iter()
            .any(|p| same_triple(p, player) && !(p.owner == owner && &p.slug == slug))
        {
            return Err(RepositoryError::conflict(format!(
                "player '{} {}' already registered for '{}'",
                player.first_name, player.last_name, player.owner
            )));
        }
        let Some(existing) = items
            .iter_mut()
            .find(|p| p.owner == owner && &p.slug == slug)
        else {
            return Err(RepositoryError::NotFound);
        };
        *existing = player.clone();
        Ok(())
    }

    async fn delete(&self, owner: &str, slug: &Slug) -> Result<(), RepositoryError> {
        let mut items = self.inner.lock().await;
        let before = items.len();
        items.retain(|p| !(p.owner == owner && &p.slug == slug));
        if items.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
