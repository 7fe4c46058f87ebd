//! Teams and the federation level ladders that scope them.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::slug::{Slug, SlugValidationError, slugify};

/// Sport-governing bodies whose competitions a team may enter.
///
/// Each federation carries its own ladder of competition levels; a team's
/// level is only meaningful within its federation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Federation {
    /// Fédération Française de Volley-Ball.
    Ffvb,
    /// Fédération Française de Basket-Ball.
    Ffbb,
    /// Fédération Française de Handball.
    Ffhb,
}

impl Federation {
    /// Competition levels recognised by this federation, lowest first.
    pub fn levels(self) -> &'static [&'static str] {
        match self {
            Self::Ffvb => &[
                "departemental",
                "regional",
                "prenational",
                "national-3",
                "national-2",
                "elite",
            ],
            Self::Ffbb => &["departemental", "regional", "national-3", "national-2"],
            Self::Ffhb => &["departemental", "regional", "prenational", "national"],
        }
    }
}

impl fmt::Display for Federation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ffvb => "ffvb",
            Self::Ffbb => "ffbb",
            Self::Ffhb => "ffhb",
        };
        f.write_str(name)
    }
}

/// Sex a team is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Female,
    Male,
    Mixed,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::Mixed => "mixed",
        };
        f.write_str(name)
    }
}

/// Validation errors returned by [`Team::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamValidationError {
    InvalidName(SlugValidationError),
    UnknownLevel {
        federation: Federation,
        level: String,
    },
}

impl fmt::Display for TeamValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(err) => write!(f, "team name yields no valid slug: {err}"),
            Self::UnknownLevel { federation, level } => {
                write!(f, "level '{level}' is not in the {federation} ladder")
            }
        }
    }
}

impl std::error::Error for TeamValidationError {}

/// Competitive team belonging to an age category.
///
/// ## Invariants
/// - `slug` is derived from `name`.
/// - `level` belongs to `federation`'s ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Team {
    /// Display name shown on club screens.
    #[schema(example = "Les Aigles")]
    pub name: String,
    /// URL identifier derived from `name`.
    pub slug: Slug,
    /// Slug of the age category the team belongs to.
    pub category: Slug,
    /// Federation whose ladder scopes `level`.
    pub federation: Federation,
    /// Competitive tier within the federation's ladder.
    #[schema(example = "regional")]
    pub level: String,
    /// Sex the team is registered for.
    pub sex: Sex,
}

impl Team {
    /// Build a team, deriving the slug and checking the level against the
    /// federation's ladder.
    pub fn new(
        name: impl Into<String>,
        category: Slug,
        federation: Federation,
        level: impl Into<String>,
        sex: Sex,
    ) -> Result<Self, TeamValidationError> {
        let name = name.into();
        let level = level.into();
        let slug = slugify(&name).map_err(TeamValidationError::InvalidName)?;
        if !federation.levels().contains(&level.as_str()) {
            return Err(TeamValidationError::UnknownLevel { federation, level });
        }
        Ok(Self {
            name,
            slug,
            category,
            federation,
            level,
            sex,
        })
    }
}
