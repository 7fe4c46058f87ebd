//! Medical certificates required before a player may compete.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Review state of a submitted certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CertificateValidity {
    /// Awaiting review by a club official.
    InValidation,
    /// Accepted; the player may compete.
    Valid,
    /// Rejected; a new certificate must be submitted.
    Rejected,
}

/// Medical certificate attached to a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct MedicalCertificate {
    /// Stable identifier assigned at creation.
    pub id: Uuid,
    /// Identifier of the player the certificate covers.
    pub player: Uuid,
    /// Date the certificate was issued.
    #[schema(value_type = String, example = "2025-09-01")]
    pub start: NaiveDate,
    /// Current review state.
    pub validity: CertificateValidity,
}

impl MedicalCertificate {
    /// Record a freshly submitted certificate awaiting review.
    pub fn new(player: Uuid, start: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            player,
            start,
            validity: CertificateValidity::InValidation,
        }
    }
}
