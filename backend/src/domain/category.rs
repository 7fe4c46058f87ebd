//! Age categories grouping teams.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::slug::{Slug, SlugValidationError, slugify};

/// Validation errors returned by [`Category::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    InvalidName(SlugValidationError),
    InvertedAgeBracket { min_age: u8, max_age: u8 },
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(err) => write!(f, "category name yields no valid slug: {err}"),
            Self::InvertedAgeBracket { min_age, max_age } => write!(
                f,
                "minimum age {min_age} must not exceed maximum age {max_age}",
            ),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

/// Age category a team competes in (e.g. "U13", "Seniors").
///
/// ## Invariants
/// - `slug` is derived from `name` via the lower-kebab-case transform.
/// - `min_age <= max_age`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Category {
    /// Display name shown on club screens.
    #[schema(example = "U13")]
    pub name: String,
    /// URL identifier derived from `name`.
    pub slug: Slug,
    /// Youngest admitted age, inclusive.
    pub min_age: u8,
    /// Oldest admitted age, inclusive.
    pub max_age: u8,
}

impl Category {
    /// Build a category, deriving the slug from the display name.
    pub fn new(
        name: impl Into<String>,
        min_age: u8,
        max_age: u8,
    ) -> Result<Self, CategoryValidationError> {
        let name = name.into();
        let slug = slugify(&name).map_err(CategoryValidationError::InvalidName)?;
        if min_age > max_age {
            return Err(CategoryValidationError::InvertedAgeBracket { min_age, max_age });
        }
        Ok(Self {
            name,
            slug,
            min_age,
            max_age,
        })
    }
}
