//! PostgreSQL persistence adapters using Diesel.
//!
//! Concrete implementations of the domain repository ports, backed by
//! PostgreSQL through `diesel-async` with `bb8` connection pooling.
//!
//! The adapters stay thin: row structs and table definitions are internal,
//! repositories only translate between rows and domain types, and every
//! backend failure is mapped to
//! [`crate::domain::ports::RepositoryError`].

mod diesel_category_repository;
mod diesel_gymnasium_repository;
mod diesel_license_repository;
mod diesel_medical_certificate_repository;
mod diesel_player_repository;
mod diesel_team_repository;
mod diesel_time_slot_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_category_repository::DieselCategoryRepository;
pub use diesel_gymnasium_repository::DieselGymnasiumRepository;
pub use diesel_license_repository::DieselLicenseRepository;
pub use diesel_medical_certificate_repository::DieselMedicalCertificateRepository;
pub use diesel_player_repository::DieselPlayerRepository;
pub use diesel_team_repository::DieselTeamRepository;
pub use diesel_time_slot_repository::DieselTimeSlotRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
