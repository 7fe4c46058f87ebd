//! Players owned by a user account.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::slug::{Slug, SlugValidationError, slugify};

/// Validation errors returned by the player constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerValidationError {
    EmptyFirstName,
    EmptyLastName,
    EmptyOwner,
    UnusableName(SlugValidationError),
}

impl fmt::Display for PlayerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFirstName => write!(f, "first name must not be empty"),
            Self::EmptyLastName => write!(f, "last name must not be empty"),
            Self::EmptyOwner => write!(f, "owner username must not be empty"),
            Self::UnusableName(err) => write!(f, "player name yields no valid slug: {err}"),
        }
    }
}

impl std::error::Error for PlayerValidationError {}

/// Registered player.
///
/// ## Invariants
/// - `first_name`, `last_name` and `owner` are non-empty once trimmed.
/// - `slug` is derived from `"{first_name} {last_name}"`.
/// - The `(first_name, last_name, owner)` triple is unique; repositories
///   reject duplicates with a conflict error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Player {
    /// Stable identifier assigned at creation.
    pub id: Uuid,
    /// Given name.
    #[schema(example = "Hello")]
    pub first_name: String,
    /// Family name.
    #[schema(example = "World")]
    pub last_name: String,
    /// Username of the account owning this player record.
    #[schema(example = "toto")]
    pub owner: String,
    /// URL identifier derived from the full name.
    pub slug: Slug,
}

impl Player {
    /// Build a player with a fresh identifier, deriving the slug from the
    /// full name.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Self, PlayerValidationError> {
        let first_name = non_empty(first_name.into(), PlayerValidationError::EmptyFirstName)?;
        let last_name = non_empty(last_name.into(), PlayerValidationError::EmptyLastName)?;
        let owner = non_empty(owner.into(), PlayerValidationError::EmptyOwner)?;
        let slug = slugify(&format!("{first_name} {last_name}"))
            .map_err(PlayerValidationError::UnusableName)?;
        Ok(Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            owner,
            slug,
        })
    }
}

fn non_empty(value: String, err: PlayerValidationError) -> Result<String, PlayerValidationError> {
    if value.trim().is_empty() {
        return Err(err);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn slug_is_derived_from_full_name() {
        let player = Player::new("Hello", "World", "toto").expect("player");
        assert_eq!(player.slug.as_ref(), "hello-world");
        assert_eq!(player.owner, "toto");
    }

    #[rstest]
    #[case("", "World", "toto", PlayerValidationError::EmptyFirstName)]
    #[case("Hello", "  ", "toto", PlayerValidationError::EmptyLastName)]
    #[case("Hello", "World", "", PlayerValidationError::EmptyOwner)]
    fn blank_components_are_rejected(
        #[case] first: &str,
        #[case] last: &str,
        #[case] owner: &str,
        #[case] expected: PlayerValidationError,
    ) {
        assert_eq!(Player::new(first, last, owner), Err(expected));
    }

    #[rstest]
    fn each_player_gets_a_distinct_id() {
        let a = Player::new("Hello", "World", "toto").expect("player");
        let b = Player::new("Hello", "World", "tata").expect("player");
        assert_ne!(a.id, b.id);
    }
}
