//! Gymnasiums hosting practices and matches.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::slug::{Slug, SlugValidationError, slugify};

/// Sports hall the club can book.
///
/// ## Invariants
/// - `slug` is derived from `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Gymnasium {
    /// Display name shown on club screens.
    #[schema(example = "Gymnase Jean Moulin")]
    pub name: String,
    /// URL identifier derived from `name`.
    pub slug: Slug,
    /// Street address.
    pub address: String,
    /// City the gymnasium is located in.
    pub city: String,
    /// Postal code.
    #[schema(example = "75011")]
    pub zip_code: String,
    /// Playing surface in square metres, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<u32>,
}

impl Gymnasium {
    /// Build a gymnasium, deriving the slug from the display name.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        zip_code: impl Into<String>,
        surface: Option<u32>,
    ) -> Result<Self, SlugValidationError> {
        let name = name.into();
        let slug = slugify(&name)?;
        Ok(Self {
            name,
            slug,
            address: address.into(),
            city: city.into(),
            zip_code: zip_code.into(),
            surface,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn slug_is_derived_from_name() {
        let gymnasium = Gymnasium::new(
            "Gymnase Jean Moulin",
            "3 rue des Lilas",
            "Paris",
            "75011",
            Some(800),
        )
        .expect("gymnasium");
        assert_eq!(gymnasium.slug.as_ref(), "gymnase-jean-moulin");
    }

    #[rstest]
    fn surface_is_omitted_from_json_when_unknown() {
        let gymnasium =
            Gymnasium::new("Halle B", "1 rue Haute", "Lyon", "69003", None).expect("gymnasium");
        let value = serde_json::to_value(&gymnasium).expect("serialize");
        assert!(value.get("surface").is_none());
    }
}
