//! Federation licenses held by players.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned by [`License::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseValidationError {
    EmptyLicenseNumber,
}

impl fmt::Display for LicenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLicenseNumber => write!(f, "license number must not be empty"),
        }
    }
}

impl std::error::Error for LicenseValidationError {}

/// Federation license attached to a player for a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct License {
    /// Stable identifier assigned at creation.
    pub id: Uuid,
    /// Identifier of the player holding the license.
    pub player: Uuid,
    /// Number issued by the federation.
    #[schema(example = "1855210")]
    pub license_number: String,
    /// Whether the license fee has been paid.
    pub is_payed: bool,
}

impl License {
    /// Build a license with a fresh identifier.
    pub fn new(
        player: Uuid,
        license_number: impl Into<String>,
        is_payed: bool,
    ) -> Result<Self, LicenseValidationError> {
        let license_number = license_number.into();
        if license_number.trim().is_empty() {
            return Err(LicenseValidationError::EmptyLicenseNumber);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            player,
            license_number,
            is_payed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn licenses_start_with_the_supplied_payment_state() {
        let player = Uuid::new_v4();
        let license = License::new(player, "1855210", false).expect("license");
        assert_eq!(license.player, player);
        assert!(!license.is_payed);
    }

    #[rstest]
    fn blank_license_numbers_are_rejected() {
        assert_eq!(
            License::new(Uuid::new_v4(), "  ", true),
            Err(LicenseValidationError::EmptyLicenseNumber)
        );
    }
}
