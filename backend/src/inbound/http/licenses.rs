//! License CRUD handlers, keyed by id.

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Error, License};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, routes};

/// Request body for creating or updating a license.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRequest {
    /// Identifier of the player holding the license.
    pub player: Uuid,
    pub license_number: String,
    #[serde(default)]
    pub is_payed: bool,
}

fn build_license(payload: LicenseRequest) -> ApiResult<License> {
    License::new(payload.player, payload.license_number, payload.is_payed)
        .map_err(|err| Error::invalid_request(err.to_string()))
}

/// List every license.
#[utoipa::path(
    get,
    path = "/license/",
    responses(
        (status = 200, description = "Licenses", body = [License]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["license"],
    operation_id = "listLicenses"
)]
pub async fn list_licenses(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<License>>> {
    Ok(web::Json(state.licenses.list().await?))
}

/// Create a license.
#[utoipa::path(
    post,
    path = "/license/create/",
    request_body = LicenseRequest,
    responses(
        (status = 201, description = "License created", body = License),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["license"],
    operation_id = "createLicense"
)]
pub async fn create_license(
    state: web::Data<HttpState>,
    payload: web::Json<LicenseRequest>,
) -> ApiResult<HttpResponse> {
    let license = build_license(payload.into_inner())?;
    state.licenses.create(&license).await?;
    Ok(HttpResponse::Created().json(license))
}

/// Fetch a license by id.
#[utoipa::path(
    get,
    path = "/license/{id}/",
    params(("id" = Uuid, Path, description = "License id")),
    responses(
        (status = 200, description = "License", body = License),
        (status = 404, description = "Unknown id", body = Error)
    ),
    tags = ["license"],
    operation_id = "licenseDetail"
)]
pub async fn license_detail(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<License>> {
    let id = path.into_inner();
    let license = state
        .licenses
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found(format!("no license with id {id}")))?;
    Ok(web::Json(license))
}

/// Replace a license, keeping its identifier.
#[utoipa::path(
    put,
    path = "/license/{id}/update/",
    params(("id" = Uuid, Path, description = "License id")),
    request_body = LicenseRequest,
    responses(
        (status = 200, description = "License updated", body = License),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown id", body = Error)
    ),
    tags = ["license"],
    operation_id = "updateLicense"
)]
pub async fn update_license(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
    payload: web::Json<LicenseRequest>,
) -> ApiResult<web::Json<License>> {
    let id = path.into_inner();
    let mut license = build_license(payload.into_inner())?;
    license.id = id;
    state.licenses.update(id, &license).await?;
    Ok(web::Json(license))
}

/// Delete a license.
#[utoipa::path(
    delete,
    path = "/license/{id}/delete/",
    params(("id" = Uuid, Path, description = "License id")),
    responses(
        (status = 204, description = "License deleted"),
        (status = 404, description = "Unknown id", body = Error)
    ),
    tags = ["license"],
    operation_id = "deleteLicense"
)]
pub async fn delete_license(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    state.licenses.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Mount the license routes from the route table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(routes::mount("license-list"), web::get().to(list_licenses))
        .route(routes::mount("license-create"), web::post().to(create_license))
        .route(routes::mount("license-detail"), web::get().to(license_detail))
        .route(routes::mount("license-update"), web::put().to(update_license))
        .route(routes::mount("license-delete"), web::delete().to(delete_license));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use serde_json::{Value, json};

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(HttpState::in_memory()))
            .configure(configure)
    }

    #[actix_web::test]
    async fn payment_defaults_to_unpaid() {
        let app = actix_test::init_service(test_app()).await;

        let create = actix_test::TestRequest::post()
            .uri("/license/create/")
            .set_json(json!({ "player": Uuid::new_v4(), "licenseNumber": "1855210" }))
            .to_request();
        let res = actix_test::call_service(&app, create).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("isPayed").and_then(Value::as_bool), Some(false));
    }

    #[actix_web::test]
    async fn update_flips_the_payment_flag() {
        let app = actix_test::init_service(test_app()).await;
        let player = Uuid::new_v4();

        let create = actix_test::TestRequest::post()
            .uri("/license/create/")
            .set_json(json!({ "player": player, "licenseNumber": "1855210" }))
            .to_request();
        let res = actix_test::call_service(&app, create).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let created: Value = actix_test::read_body_json(res).await;
        let id = created.get("id").and_then(Value::as_str).expect("id").to_owned();

        let update = actix_test::TestRequest::put()
            .uri(&format!("/license/{id}/update/"))
            .set_json(json!({
                "player": player,
                "licenseNumber": "1855210",
                "isPayed": true
            }))
            .to_request();
        let res = actix_test::call_service(&app, update).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("isPayed").and_then(Value::as_bool), Some(true));
        assert_eq!(body.get("id").and_then(Value::as_str), Some(id.as_str()));
    }

    #[actix_web::test]
    async fn blank_license_number_is_400() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/license/create/")
                .set_json(json!({ "player": Uuid::new_v4(), "licenseNumber": "  " }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
