//! Slug derivation and validation for URL-addressed entities.
//!
//! Slugs are trimmed, non-empty identifiers composed of lowercase ASCII
//! letters, digits, and hyphens. Display names are turned into slugs with
//! [`slugify`]: "Hello World" becomes "hello-world".

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by [`Slug::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugValidationError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for SlugValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "slug must not be empty"),
            Self::InvalidCharacters => write!(
                f,
                "slug may only contain lowercase letters, digits, or hyphens",
            ),
        }
    }
}

impl std::error::Error for SlugValidationError {}

/// URL-safe, lower-kebab-case identifier derived from a display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "hello-world")]
pub struct Slug(String);

impl Slug {
    /// Validate and construct a [`Slug`] from an already-slugged value, such
    /// as an inbound path segment.
    pub fn new(value: impl Into<String>) -> Result<Self, SlugValidationError> {
        let value = value.into();
        if value.is_empty() || value.trim() != value {
            return Err(SlugValidationError::Empty);
        }
        if !has_allowed_slug_chars(&value) {
            return Err(SlugValidationError::InvalidCharacters);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

fn has_allowed_slug_chars(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

/// Derive a [`Slug`] from a display name using the lower-kebab-case
/// transform.
///
/// Letters are lowercased, runs of anything that is neither an ASCII letter
/// nor a digit collapse into a single hyphen, and leading or trailing
/// hyphens are trimmed. Non-ASCII alphanumerics are dropped rather than
/// transliterated.
///
/// # Errors
///
/// Returns [`SlugValidationError::Empty`] when the name contains no usable
/// characters at all (e.g. `"!!!"`).
///
/// # Examples
/// ```
/// use sports_manager::domain::slugify;
///
/// let slug = slugify("Hello World").expect("slug");
/// assert_eq!(slug.as_ref(), "hello-world");
/// ```
pub fn slugify(name: &str) -> Result<Slug, SlugValidationError> {
    let mut out = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    Slug::new(out)
}
