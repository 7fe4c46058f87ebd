//! Medical-certificate CRUD handlers, keyed by id.
//!
//! New certificates always start awaiting validation; the review state is
//! only writable through update, which is how club officials accept or
//! reject a submission.

use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{CertificateValidity, Error, MedicalCertificate};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, routes};

/// Request body for submitting a certificate.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicalCertificateRequest {
    /// Identifier of the player the certificate covers.
    pub player: Uuid,
    /// Date the certificate was issued.
    #[schema(value_type = String, example = "2025-09-01")]
    pub start: NaiveDate,
}

/// Request body for reviewing a certificate.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicalCertificateUpdate {
    pub player: Uuid,
    #[schema(value_type = String, example = "2025-09-01")]
    pub start: NaiveDate,
    /// Outcome of the review.
    pub validity: CertificateValidity,
}

/// List every medical certificate.
#[utoipa::path(
    get,
    path = "/medical-certificate/",
    responses(
        (status = 200, description = "Medical certificates", body = [MedicalCertificate]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["medical-certificate"],
    operation_id = "listMedicalCertificates"
)]
pub async fn list_medical_certificates(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<MedicalCertificate>>> {
    Ok(web::Json(state.medical_certificates.list().await?))
}

/// Submit a certificate; it starts awaiting validation.
#[utoipa::path(
    post,
    path = "/medical-certificate/create/",
    request_body = MedicalCertificateRequest,
    responses(
        (status = 201, description = "Certificate submitted", body = MedicalCertificate),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["medical-certificate"],
    operation_id = "createMedicalCertificate"
)]
pub async fn create_medical_certificate(
    state: web::Data<HttpState>,
    payload: web::Json<MedicalCertificateRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let certificate = MedicalCertificate::new(payload.player, payload.start);
    state.medical_certificates.create(&certificate).await?;
    Ok(HttpResponse::Created().json(certificate))
}

/// Fetch a certificate by id.
#[utoipa::path(
    get,
    path = "/medical-certificate/{id}/",
    params(("id" = Uuid, Path, description = "Certificate id")),
    responses(
        (status = 200, description = "Certificate", body = MedicalCertificate),
        (status = 404, description = "Unknown id", body = Error)
    ),
    tags = ["medical-certificate"],
    operation_id = "medicalCertificateDetail"
)]
pub async fn medical_certificate_detail(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<MedicalCertificate>> {
    let id = path.into_inner();
    let certificate = state
        .medical_certificates
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found(format!("no medical certificate with id {id}")))?;
    Ok(web::Json(certificate))
}

/// Replace a certificate, keeping its identifier.
#[utoipa::path(
    put,
    path = "/medical-certificate/{id}/update/",
    params(("id" = Uuid, Path, description = "Certificate id")),
    request_body = MedicalCertificateUpdate,
    responses(
        (status = 200, description = "Certificate updated", body = MedicalCertificate),
        (status = 404, description = "Unknown id", body = Error)
    ),
    tags = ["medical-certificate"],
    operation_id = "updateMedicalCertificate"
)]
pub async fn update_medical_certificate(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
    payload: web::Json<MedicalCertificateUpdate>,
) -> ApiResult<web::Json<MedicalCertificate>> {
    let id = path.into_inner();
    let payload = payload.into_inner();
    let certificate = MedicalCertificate {
        id,
        player: payload.player,
        start: payload.start,
        validity: payload.validity,
    };
    state.medical_certificates.update(id, &certificate).await?;
    Ok(web::Json(certificate))
}

/// Delete a certificate.
#[utoipa::path(
    delete,
    path = "/medical-certificate/{id}/delete/",
    params(("id" = Uuid, Path, description = "Certificate id")),
    responses(
        (status = 204, description = "Certificate deleted"),
        (status = 404, description = "Unknown id", body = Error)
    ),
    tags = ["medical-certificate"],
    operation_id = "deleteMedicalCertificate"
)]
pub async fn delete_medical_certificate(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    state.medical_certificates.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Mount the medical-certificate routes from the route table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        routes::mount("medical-certificate-list"),
        web::get().to(list_medical_certificates),
    )
    .route(
        routes::mount("medical-certificate-create"),
        web::post().to(create_medical_certificate),
    )
    .route(
        routes::mount("medical-certificate-detail"),
        web::get().to(medical_certificate_detail),
    )
    .route(
        routes::mount("medical-certificate-update"),
        web::put().to(update_medical_certificate),
    )
    .route(
        routes::mount("medical-certificate-delete"),
        web::delete().to(delete_medical_certificate),
    );
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
    async fn submissions_start_in_validation() {
        let app = actix_test::init_service(test_app()).await;

        let create = actix_test::TestRequest::post()
            .uri("/medical-certificate/create/")
            .set_json(json!({ "player": Uuid::new_v4(), "start": "2025-09-01" }))
            .to_request();
        let res = actix_test::call_service(&app, create).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            body.get("validity").and_then(Value::as_str),
            Some("in_validation")
        );
    }

    #[actix_web::test]
    async fn review_sets_the_validity() {
        let app = actix_test::init_service(test_app()).await;
        let player = Uuid::new_v4();

        let create = actix_test::TestRequest::post()
            .uri("/medical-certificate/create/")
            .set_json(json!({ "player": player, "start": "2025-09-01" }))
            .to_request();
        let res = actix_test::call_service(&app, create).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let created: Value = actix_test::read_body_json(res).await;
        let id = created.get("id").and_then(Value::as_str).expect("id").to_owned();

        let review = actix_test::TestRequest::put()
            .uri(&format!("/medical-certificate/{id}/update/"))
            .set_json(json!({
                "player": player,
                "start": "2025-09-01",
                "validity": "valid"
            }))
            .to_request();
        let res = actix_test::call_service(&app, review).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("validity").and_then(Value::as_str), Some("valid"));
    }

    #[actix_web::test]
    async fn unknown_id_is_404() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/medical-certificate/{}/", Uuid::nil()))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
