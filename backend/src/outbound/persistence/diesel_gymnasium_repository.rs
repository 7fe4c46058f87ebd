//! PostgreSQL-backed `GymnasiumRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{GymnasiumRepository, RepositoryError};
use crate::domain::{Gymnasium, Slug};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{GymnasiumRow, NewGymnasiumRow};
use super::pool::DbPool;
use super::schema::gymnasiums;

/// Diesel-backed implementation of the `GymnasiumRepository` port.
#[derive(Clone)]
pub struct DieselGymnasiumRepository {
    pool: DbPool,
}

impl DieselGymnasiumRepository {
    /// Create a repository backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_gymnasium(row: GymnasiumRow) -> Result<Gymnasium, RepositoryError> {
    let slug = Slug::new(row.slug)
        .map_err(|err| RepositoryError::query(format!("stored slug is invalid: {err}")))?;
    let surface = row
        .surface
        .map(u32::try_from)
        .transpose()
        .map_err(|_| RepositoryError::query("stored surface is out of range"))?;
    Ok(Gymnasium {
        name: row.name,
        slug,
        address: row.address,
        city: row.city,
        zip_code: row.zip_code,
        surface,
    })
}

fn gymnasium_to_row(gymnasium: &Gymnasium) -> Result<NewGymnasiumRow<'_>, RepositoryError> {
    let surface = gymnasium
        .surface
        .map(i32::try_from)
        .transpose()
        .map_err(|_| RepositoryError::query("surface is out of range"))?;
    Ok(NewGymnasiumRow {
        slug: gymnasium.slug.as_ref(),
        name: &gymnasium.name,
        address: &gymnasium.address,
        city: &gymnasium.city,
        zip_code: &gymnasium.zip_code,
        surface,
    })
}

type GymnasiumChangeset<'a> = (
    diesel::dsl::Eq<gymnasiums::slug, &'a str>,
    diesel::dsl::Eq<gymnasiums::name, &'a str>,
    diesel::dsl::Eq<gymnasiums::address, &'a str>,
    diesel::dsl::Eq<gymnasiums::city, &'a str>,
    diesel::dsl::Eq<gymnasiums::zip_code, &'a str>,
    diesel::dsl::Eq<gymnasiums::surface, Option<i32>>,
);

// `AsChangeset` skips the primary key, and a rename moves the record to a
// new slug, so updates spell the full column list out.
fn gymnasium_changeset(gymnasium: &Gymnasium) -> Result<GymnasiumChangeset<'_>, RepositoryError> {
    let surface = gymnasium
        .surface
        .map(i32::try_from)
        .transpose()
        .map_err(|_| RepositoryError::query("surface is out of range"))?;
    Ok((
        gymnasiums::slug.eq(gymnasium.slug.as_ref()),
        gymnasiums::name.eq(gymnasium.name.as_str()),
        gymnasiums::address.eq(gymnasium.address.as_str()),
        gymnasiums::city.eq(gymnasium.city.as_str()),
        gymnasiums::zip_code.eq(gymnasium.zip_code.as_str()),
        gymnasiums::surface.eq(surface),
    ))
}

#[async_trait]
impl GymnasiumRepository for DieselGymnasiumRepository {
    async fn list(&self) -> Result<Vec<Gymnasium>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<GymnasiumRow> = gymnasiums::table
            .order(gymnasiums::slug.asc())
            .select(GymnasiumRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_gymnasium).collect()
    }

    async fn create(&self, gymnasium: &Gymnasium) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(gymnasiums::table)
            .values(gymnasium_to_row(gymnasium)?)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Gymnasium>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<GymnasiumRow> = gymnasiums::table
            .find(slug.as_ref())
            .select(GymnasiumRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_gymnasium).transpose()
    }

    async fn update(&self, slug: &Slug, gymnasium: &Gymnasium) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(gymnasiums::table.find(slug.as_ref()))
            .set(gymnasium_changeset(gymnasium)?)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, slug: &Slug) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(gymnasiums::table.find(slug.as_ref()))
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

    #[rstest]
    fn missing_surface_round_trips_as_none() {
        let row = GymnasiumRow {
            slug: "halle-b".to_owned(),
            name: "Halle B".to_owned(),
            address: "1 rue Haute".to_owned(),
            city: "Lyon".to_owned(),
            zip_code: "69003".to_owned(),
            surface: None,
        };

        let gymnasium = row_to_gymnasium(row).expect("gymnasium");
        assert_eq!(gymnasium.surface, None);
        assert_eq!(
            gymnasium_to_row(&gymnasium).expect("row").surface,
            None
        );
    }

    #[rstest]
    fn renames_rewrite_the_slug_column() {
        let gymnasium = Gymnasium::new("Hello World", "1 rue Haute", "Lyon", "69003", None)
            .expect("gymnasium");
        let query = diesel::update(gymnasiums::table.find("halle-b"))
            .set(gymnasium_changeset(&gymnasium).expect("changeset"));
        let sql = diesel::debug_query::<diesel::pg::Pg, _>(&query).to_string();
        assert!(sql.contains("\"slug\" = $"), "slug missing from SET: {sql}");
    }
}
