//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CategoryRepository, GymnasiumRepository, InMemoryCategoryRepository,
    InMemoryGymnasiumRepository, InMemoryLicenseRepository,
    InMemoryMedicalCertificateRepository, InMemoryPlayerRepository, InMemoryTeamRepository,
    InMemoryTimeSlotRepository, LicenseRepository, MedicalCertificateRepository,
    PlayerRepository, TeamRepository, TimeSlotRepository,
};

/// Dependency bundle for HTTP handlers: one repository port per resource.
#[derive(Clone)]
pub struct HttpState {
    pub categories: Arc<dyn CategoryRepository>,
    pub gymnasiums: Arc<dyn GymnasiumRepository>,
    pub teams: Arc<dyn TeamRepository>,
    pub players: Arc<dyn PlayerRepository>,
    pub time_slots: Arc<dyn TimeSlotRepository>,
    pub licenses: Arc<dyn LicenseRepository>,
    pub medical_certificates: Arc<dyn MedicalCertificateRepository>,
}

impl HttpState {
    /// State backed entirely by empty in-memory repositories.
    ///
    /// Used by tests and by DB-less runs of the server.
    ///
    /// # Examples
    /// ```
    /// use sports_manager::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::in_memory();
    /// let _categories = state.categories.clone();
    /// ```
    pub fn in_memory() -> Self {
        Self {
            categories: Arc::new(InMemoryCategoryRepository::default()),
            gymnasiums: Arc::new(InMemoryGymnasiumRepository::default()),
            teams: Arc::new(InMemoryTeamRepository::default()),
            players: Arc::new(InMemoryPlayerRepository::default()),
            time_slots: Arc::new(InMemoryTimeSlotRepository::default()),
            licenses: Arc::new(InMemoryLicenseRepository::default()),
            medical_certificates: Arc::new(InMemoryMedicalCertificateRepository::default()),
        }
    }
}
