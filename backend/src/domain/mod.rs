//! Domain model: validated entities, the slug transform, repository ports,
//! and the transport-agnostic error type.

mod category;
mod error;
mod gymnasium;
mod license;
mod medical_certificate;
mod player;
pub mod ports;
mod slug;
mod team;
mod time_slot;

pub use category::{Category, CategoryValidationError};
pub use error::{Error, ErrorCode};
pub use gymnasium::Gymnasium;
pub use license::{License, LicenseValidationError};
pub use medical_certificate::{CertificateValidity, MedicalCertificate};
pub use player::{Player, PlayerValidationError};
pub use slug::{Slug, SlugValidationError, slugify};
pub use team::{Federation, Sex, Team, TeamValidationError};
pub use time_slot::{Day, TimeSlot, TimeSlotKind, TimeSlotValidationError};
