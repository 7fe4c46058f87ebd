//! Sports club management backend.
//!
//! Exposes a CRUD HTTP surface for running a multi-sport club: age
//! categories, teams, gymnasiums, weekly time slots, user-owned players,
//! licenses, and medical certificates. The crate follows a hexagonal
//! layout: `domain` holds entities and repository ports, `inbound` adapts
//! HTTP onto the domain, and `outbound` implements the ports against
//! PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware shared by the server and tests.
pub use middleware::Trace;
