//! Domain ports and supporting types for the hexagonal boundary.

mod category_repository;
mod error;
mod gymnasium_repository;
mod license_repository;
mod medical_certificate_repository;
mod player_repository;
mod team_repository;
mod time_slot_repository;

pub use category_repository::{CategoryRepository, InMemoryCategoryRepository};
pub use error::RepositoryError;
pub use gymnasium_repository::{GymnasiumRepository, InMemoryGymnasiumRepository};
pub use license_repository::{InMemoryLicenseRepository, LicenseRepository};
pub use medical_certificate_repository::{
    InMemoryMedicalCertificateRepository, MedicalCertificateRepository,
};
pub use player_repository::{InMemoryPlayerRepository, PlayerRepository};
pub use team_repository::{InMemoryTeamRepository, TeamRepository};
pub use time_slot_repository::{InMemoryTimeSlotRepository, TimeSlotRepository};
