//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates every CRUD endpoint and the health probes into one
//! specification. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::domain::{
    Category, CertificateValidity, Day, Error, ErrorCode, Federation, Gymnasium, License,
    MedicalCertificate, Player, Sex, Slug, Team, TimeSlot, TimeSlotKind,
};
use crate::inbound::http::categories::{CategoryListItem, CategoryRequest};
use crate::inbound::http::gymnasiums::GymnasiumRequest;
use crate::inbound::http::licenses::LicenseRequest;
use crate::inbound::http::medical_certificates::{
    MedicalCertificateRequest, MedicalCertificateUpdate,
};
use crate::inbound::http::players::PlayerRequest;
use crate::inbound::http::teams::{TeamListItem, TeamRequest};
use crate::inbound::http::time_slots::TimeSlotRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sports manager API",
        description = "CRUD interface for running a multi-sport club: categories, \
                       teams, gymnasiums, time slots, players, licenses, and \
                       medical certificates."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::create_category,
        crate::inbound::http::categories::category_detail,
        crate::inbound::http::categories::update_category,
        crate::inbound::http::categories::delete_category,
        crate::inbound::http::gymnasiums::list_gymnasiums,
        crate::inbound::http::gymnasiums::create_gymnasium,
        crate::inbound::http::gymnasiums::gymnasium_detail,
        crate::inbound::http::gymnasiums::update_gymnasium,
        crate::inbound::http::gymnasiums::delete_gymnasium,
        crate::inbound::http::teams::list_teams,
        crate::inbound::http::teams::create_team,
        crate::inbound::http::teams::team_detail,
        crate::inbound::http::teams::update_team,
        crate::inbound::http::teams::delete_team,
        crate::inbound::http::time_slots::list_time_slots,
        crate::inbound::http::time_slots::create_time_slot,
        crate::inbound::http::time_slots::time_slot_detail,
        crate::inbound::http::time_slots::update_time_slot,
        crate::inbound::http::time_slots::delete_time_slot,
        crate::inbound::http::licenses::list_licenses,
        crate::inbound::http::licenses::create_license,
        crate::inbound::http::licenses::license_detail,
        crate::inbound::http::licenses::update_license,
        crate::inbound::http::licenses::delete_license,
        crate::inbound::http::medical_certificates::list_medical_certificates,
        crate::inbound::http::medical_certificates::create_medical_certificate,
        crate::inbound::http::medical_certificates::medical_certificate_detail,
        crate::inbound::http::medical_certificates::update_medical_certificate,
        crate::inbound::http::medical_certificates::delete_medical_certificate,
        crate::inbound::http::players::list_players,
        crate::inbound::http::players::create_player,
        crate::inbound::http::players::player_detail,
        crate::inbound::http::players::update_player,
        crate::inbound::http::players::delete_player,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Slug,
        Error,
        ErrorCode,
        Category,
        CategoryRequest,
        CategoryListItem,
        Gymnasium,
        GymnasiumRequest,
        Team,
        TeamRequest,
        TeamListItem,
        Federation,
        Sex,
        TimeSlot,
        TimeSlotRequest,
        TimeSlotKind,
        Day,
        Player,
        PlayerRequest,
        License,
        LicenseRequest,
        MedicalCertificate,
        MedicalCertificateRequest,
        MedicalCertificateUpdate,
        CertificateValidity,
    )),
    tags(
        (name = "category", description = "Age categories"),
        (name = "gymnasium", description = "Gymnasiums"),
        (name = "team", description = "Teams"),
        (name = "time-slot", description = "Weekly time slots"),
        (name = "player", description = "Players scoped to their owning user"),
        (name = "license", description = "Federation licenses"),
        (name = "medical-certificate", description = "Medical certificates"),
        (name = "health", description = "Health probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn every_resource_contributes_its_five_operations() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for resource in [
            "category",
            "gymnasium",
            "team",
            "time-slot",
            "license",
            "medical-certificate",
        ] {
            assert!(paths.contains_key(&format!("/{resource}/")), "{resource} list");
            assert!(
                paths.contains_key(&format!("/{resource}/create/")),
                "{resource} create"
            );
        }
        assert!(paths.contains_key("/{username}/player/"));
        assert!(paths.contains_key("/health/ready"));
    }

    #[rstest]
    fn schemas_include_the_error_envelope() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.schemas.contains_key("Error"));
        assert!(components.schemas.contains_key("ErrorCode"));
    }
}
