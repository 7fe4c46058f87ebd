//! Server construction and middleware wiring.

mod config;

pub use config::{APP_NAME, ServerConfig, Settings};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use sports_manager::ApiDoc;
use sports_manager::Trace;
use sports_manager::inbound::http::configure_api;
use sports_manager::inbound::http::health::{HealthState, live, ready};
use sports_manager::inbound::http::state::HttpState;
use sports_manager::outbound::persistence::{
    DieselCategoryRepository, DieselGymnasiumRepository, DieselLicenseRepository,
    DieselMedicalCertificateRepository, DieselPlayerRepository, DieselTeamRepository,
    DieselTimeSlotRepository,
};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the shared HTTP state: Diesel repositories when a pool is
/// configured, in-memory ones otherwise.
fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    match &config.db_pool {
        Some(pool) => web::Data::new(HttpState {
            categories: Arc::new(DieselCategoryRepository::new(pool.clone())),
            gymnasiums: Arc::new(DieselGymnasiumRepository::new(pool.clone())),
            teams: Arc::new(DieselTeamRepository::new(pool.clone())),
            players: Arc::new(DieselPlayerRepository::new(pool.clone())),
            time_slots: Arc::new(DieselTimeSlotRepository::new(pool.clone())),
            licenses: Arc::new(DieselLicenseRepository::new(pool.clone())),
            medical_certificates: Arc::new(DieselMedicalCertificateRepository::new(pool.clone())),
        }),
        None => web::Data::new(HttpState::in_memory()),
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Registered last: the player routes carry a leading {username} wildcard.
    app.configure(configure_api)
}

/// Construct an Actix HTTP server from the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
