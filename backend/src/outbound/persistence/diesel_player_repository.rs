//! PostgreSQL-backed `PlayerRepository` implementation using Diesel.
//!
//! The `(first_name, last_name, owner)` uniqueness triple is enforced by a
//! unique index; violations come back from [`map_diesel_error`] as
//! conflicts, matching the in-memory implementation's behaviour.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PlayerRepository, RepositoryError};
use crate::domain::{Player, Slug};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPlayerRow, PlayerRow};
use super::pool::DbPool;
use super::schema::players;

/// Diesel-backed implementation of the `PlayerRepository` port.
#[derive(Clone)]
pub struct DieselPlayerRepository {
    pool: DbPool,
}

impl DieselPlayerRepository {
    /// Create a repository backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_player(row: PlayerRow) -> Result<Player, RepositoryError> {
    let slug = Slug::new(row.slug)
        .map_err(|err| RepositoryError::query(format!("stored slug is invalid: {err}")))?;
    Ok(Player {
        id: row.id,
        first_name: row.first_name,
        last_name: row.last_name,
        owner: row.owner,
        slug,
    })
}

fn player_to_row(player: &Player) -> NewPlayerRow<'_> {
    NewPlayerRow {
        id: player.id,
        first_name: &player.first_name,
        last_name: &player.last_name,
        owner: &player.owner,
        slug: player.slug.as_ref(),
    }
}

#[async_trait]
impl PlayerRepository for DieselPlayerRepository {
    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Player>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PlayerRow> = players::table
            .filter(players::owner.eq(owner))
            .order(players::slug.asc())
            .select(PlayerRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_player).collect()
    }

    async fn create(&self, player: &Player) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(players::table)
            .values(player_to_row(player))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find(&self, owner: &str, slug: &Slug) -> Result<Option<Player>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<PlayerRow> = players::table
            .filter(players::owner.eq(owner).and(players::slug.eq(slug.as_ref())))
            .select(PlayerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_player).transpose()
    }

    async fn update(
        &self,
        owner: &str,
        slug: &Slug,
        player: &Player,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(
            players::table
                .filter(players::owner.eq(owner).and(players::slug.eq(slug.as_ref()))),
        )
        .set(player_to_row(player))
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        if updated == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, owner: &str, slug: &Slug) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(
            players::table
                .filter(players::owner.eq(owner).and(players::slug.eq(slug.as_ref()))),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use uuid::Uuid;

    #[rstest]
    fn rows_round_trip_through_the_domain_type() {
        let id = Uuid::new_v4();
        let row = PlayerRow {
            id,
            first_name: "Hello".to_owned(),
            last_name: "World".to_owned(),
            owner: "toto".to_owned(),
            slug: "hello-world".to_owned(),
        };

        let player = row_to_player(row).expect("player");
        assert_eq!(player.id, id);
        assert_eq!(player.slug.as_ref(), "hello-world");

        let back = player_to_row(&player);
        assert_eq!(back.owner, "toto");
    }
}
