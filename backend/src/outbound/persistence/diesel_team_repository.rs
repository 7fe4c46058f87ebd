//! PostgreSQL-backed `TeamRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, TeamRepository};
use crate::domain::{Federation, Sex, Slug, Team};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewTeamRow, TeamRow};
use super::pool::DbPool;
use super::schema::teams;

/// Diesel-backed implementation of the `TeamRepository` port.
#[derive(Clone)]
pub struct DieselTeamRepository {
    pool: DbPool,
}

impl DieselTeamRepository {
    /// Create a repository backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn federation_to_str(federation: Federation) -> &'static str {
    match federation {
        Federation::Ffvb => "ffvb",
        Federation::Ffbb => "ffbb",
        Federation::Ffhb => "ffhb",
    }
}

fn parse_federation(value: &str) -> Result<Federation, RepositoryError> {
    match value {
        "ffvb" => Ok(Federation::Ffvb),
        "ffbb" => Ok(Federation::Ffbb),
        "ffhb" => Ok(Federation::Ffhb),
        other => Err(RepositoryError::query(format!(
            "unrecognised federation value '{other}'"
        ))),
    }
}

fn sex_to_str(sex: Sex) -> &'static str {
    match sex {
        Sex::Female => "female",
        Sex::Male => "male",
        Sex::Mixed => "mixed",
    }
}

fn parse_sex(value: &str) -> Result<Sex, RepositoryError> {
    match value {
        "female" => Ok(Sex::Female),
        "male" => Ok(Sex::Male),
        "mixed" => Ok(Sex::Mixed),
        other => Err(RepositoryError::query(format!(
            "unrecognised sex value '{other}'"
        ))),
    }
}

fn row_to_team(row: TeamRow) -> Result<Team, RepositoryError> {
    let slug = Slug::new(row.slug)
        .map_err(|err| RepositoryError::query(format!("stored slug is invalid: {err}")))?;
    let category = Slug::new(row.category)
        .map_err(|err| RepositoryError::query(format!("stored category slug is invalid: {err}")))?;
    Ok(Team {
        name: row.name,
        slug,
        category,
        federation: parse_federation(&row.federation)?,
        level: row.level,
        sex: parse_sex(&row.sex)?,
    })
}

fn team_to_row(team: &Team) -> NewTeamRow<'_> {
    NewTeamRow {
        slug: team.slug.as_ref(),
        name: &team.name,
        category: team.category.as_ref(),
        federation: federation_to_str(team.federation),
        level: &team.level,
        sex: sex_to_str(team.sex),
    }
}

type TeamChangeset<'a> = (
    diesel::dsl::Eq<teams::slug, &'a str>,
    diesel::dsl::Eq<teams::name, &'a str>,
    diesel::dsl::Eq<teams::category, &'a str>,
    diesel::dsl::Eq<teams::federation, &'static str>,
    diesel::dsl::Eq<teams::level, &'a str>,
    diesel::dsl::Eq<teams::sex, &'static str>,
);

// `AsChangeset` skips the primary key, and a rename moves the record to a
// new slug, so updates spell the full column list out.
fn team_changeset(team: &Team) -> TeamChangeset<'_> {
    (
        teams::slug.eq(team.slug.as_ref()),
        teams::name.eq(team.name.as_str()),
        teams::category.eq(team.category.as_ref()),
        teams::federation.eq(federation_to_str(team.federation)),
        teams::level.eq(team.level.as_str()),
        teams::sex.eq(sex_to_str(team.sex)),
    )
}

#[async_trait]
impl TeamRepository for DieselTeamRepository {
    async fn list(&self) -> Result<Vec<Team>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TeamRow> = teams::table
            .order(teams::slug.asc())
            .select(TeamRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_team).collect()
    }

    async fn create(&self, team: &Team) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(teams::table)
            .values(team_to_row(team))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Team>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TeamRow> = teams::table
            .find(slug.as_ref())
            .select(TeamRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_team).transpose()
    }

    async fn update(&self, slug: &Slug, team: &Team) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(teams::table.find(slug.as_ref()))
            .set(team_changeset(team))
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

        let deleted = diesel::delete(teams::table.find(slug.as_ref()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
