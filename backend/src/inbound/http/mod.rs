//! HTTP adapters: handlers, routing and error mapping.
//!
//! Each resource module owns its handlers and mounts them from the shared
//! route table, so the URL surface and [`routes::reverse`] always agree.

use actix_web::web;

use crate::domain::{Error, Slug};

pub mod categories;
pub mod error;
pub mod gymnasiums;
pub mod health;
pub mod licenses;
pub mod medical_certificates;
pub mod players;
pub mod routes;
pub mod state;
pub mod teams;
pub mod time_slots;

pub use error::ApiResult;

/// Parse a path segment as a slug.
///
/// Path segments that do not parse as slugs cannot match any stored record.
pub(crate) fn parse_slug(raw: &str) -> ApiResult<Slug> {
    Slug::new(raw).map_err(|_| Error::not_found(format!("no record under '{raw}'")))
}

/// Mount the whole CRUD surface on an actix service config.
///
/// Fixed-prefix resources are registered first; the player routes start with
/// a `{username}` wildcard and go last so they cannot shadow the others.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    categories::configure(cfg);
    gymnasiums::configure(cfg);
    teams::configure(cfg);
    time_slots::configure(cfg);
    licenses::configure(cfg);
    medical_certificates::configure(cfg);
    players::configure(cfg);
}
