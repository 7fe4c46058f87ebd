//! PostgreSQL-backed `CategoryRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CategoryRepository, RepositoryError};
use crate::domain::{Category, Slug};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CategoryRow, NewCategoryRow};
use super::pool::DbPool;
use super::schema::categories;

/// Diesel-backed implementation of the `CategoryRepository` port.
#[derive(Clone)]
pub struct DieselCategoryRepository {
    pool: DbPool,
}

impl DieselCategoryRepository {
    /// Create a repository backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_category(row: CategoryRow) -> Result<Category, RepositoryError> {
    let slug = Slug::new(row.slug)
        .map_err(|err| RepositoryError::query(format!("stored slug is invalid: {err}")))?;
    let min_age = u8::try_from(row.min_age)
        .map_err(|_| RepositoryError::query("stored min_age is out of range"))?;
    let max_age = u8::try_from(row.max_age)
        .map_err(|_| RepositoryError::query("stored max_age is out of range"))?;
    Ok(Category {
        name: row.name,
        slug,
        min_age,
        max_age,
    })
}

fn category_to_row(category: &Category) -> NewCategoryRow<'_> {
    NewCategoryRow {
        slug: category.slug.as_ref(),
        name: &category.name,
        min_age: i16::from(category.min_age),
        max_age: i16::from(category.max_age),
    }
}

type CategoryChangeset<'a> = (
    diesel::dsl::Eq<categories::slug, &'a str>,
    diesel::dsl::Eq<categories::name, &'a str>,
    diesel::dsl::Eq<categories::min_age, i16>,
    diesel::dsl::Eq<categories::max_age, i16>,
);

// `AsChangeset` skips the primary key, and a rename moves the record to a
// new slug, so updates spell the full column list out.
fn category_changeset(category: &Category) -> CategoryChangeset<'_> {
    (
        categories::slug.eq(category.slug.as_ref()),
        categories::name.eq(category.name.as_str()),
        categories::min_age.eq(i16::from(category.min_age)),
        categories::max_age.eq(i16::from(category.max_age)),
    )
}

#[async_trait]
impl CategoryRepository for DieselCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CategoryRow> = categories::table
            .order(categories::slug.asc())
            .select(CategoryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_category).collect()
    }

    async fn create(&self, category: &Category) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(categories::table)
            .values(category_to_row(category))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Category>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<CategoryRow> = categories::table
            .find(slug.as_ref())
            .select(CategoryRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_category).transpose()
    }

    async fn update(&self, slug: &Slug, category: &Category) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(categories::table.find(slug.as_ref()))
            .set(category_changeset(category))
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

        let deleted = diesel::delete(categories::table.find(slug.as_ref()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
