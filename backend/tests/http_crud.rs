//! End-to-end exercises of the mounted CRUD surface.
//!
//! Drives the full route table through `configure_api` against in-memory
//! repositories, covering the flows that span more than one resource.

use actix_web::{App, http::StatusCode, test as actix_test, web};
use serde_json::{Value, json};

use sports_manager::Trace;
use sports_manager::inbound::http::configure_api;
use sports_manager::inbound::http::state::HttpState;

fn full_app() -> App<
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
        .wrap(Trace)
        .configure(configure_api)
}

#[actix_web::test]
async fn category_lifecycle_over_the_full_surface() {
    let app = actix_test::init_service(full_app()).await;

    let create = actix_test::TestRequest::post()
        .uri("/category/create/")
        .set_json(json!({ "name": "Hello World", "minAge": 11, "maxAge": 13 }))
        .to_request();
    let res = actix_test::call_service(&app, create).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let list = actix_test::TestRequest::get().uri("/category/").to_request();
    let res = actix_test::call_service(&app, list).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    let items = body.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].get("slug").and_then(Value::as_str),
        Some("hello-world")
    );

    let update = actix_test::TestRequest::put()
        .uri("/category/hello-world/update/")
        .set_json(json!({ "name": "Hello World", "minAge": 12, "maxAge": 14 }))
        .to_request();
    assert_eq!(
        actix_test::call_service(&app, update).await.status(),
        StatusCode::OK
    );

    let delete = actix_test::TestRequest::delete()
        .uri("/category/hello-world/delete/")
        .to_request();
    assert_eq!(
        actix_test::call_service(&app, delete).await.status(),
        StatusCode::NO_CONTENT
    );

    let detail = actix_test::TestRequest::get()
        .uri("/category/hello-world/")
        .to_request();
    assert_eq!(
        actix_test::call_service(&app, detail).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn team_creation_spans_categories_and_teams() {
    let app = actix_test::init_service(full_app()).await;

    let category = actix_test::TestRequest::post()
        .uri("/category/create/")
        .set_json(json!({ "name": "U13", "minAge": 11, "maxAge": 13 }))
        .to_request();
    assert_eq!(
        actix_test::call_service(&app, category).await.status(),
        StatusCode::CREATED
    );

    let team = actix_test::TestRequest::post()
        .uri("/team/create/")
        .set_json(json!({
            "name": "Les Aigles",
            "category": "u13",
            "federation": "ffvb",
            "level": "regional",
            "sex": "mixed"
        }))
        .to_request();
    assert_eq!(
        actix_test::call_service(&app, team).await.status(),
        StatusCode::CREATED
    );

    let slot = actix_test::TestRequest::post()
        .uri("/time-slot/create/")
        .set_json(json!({
            "team": "les-aigles",
            "kind": "practice",
            "day": "tuesday",
            "start": "18:30:00",
            "end": "20:00:00"
        }))
        .to_request();
    assert_eq!(
        actix_test::call_service(&app, slot).await.status(),
        StatusCode::CREATED
    );
}

#[actix_web::test]
async fn player_routes_do_not_shadow_fixed_resources() {
    let app = actix_test::init_service(full_app()).await;

    // "/category/" must dispatch to the category list even though the
    // player pattern "/{username}/player/" is also mounted.
    let list = actix_test::TestRequest::get().uri("/category/").to_request();
    assert_eq!(
        actix_test::call_service(&app, list).await.status(),
        StatusCode::OK
    );

    let players = actix_test::TestRequest::get()
        .uri("/toto/player/")
        .to_request();
    assert_eq!(
        actix_test::call_service(&app, players).await.status(),
        StatusCode::OK
    );
}

#[actix_web::test]
async fn duplicate_player_identity_is_a_conflict() {
    let app = actix_test::init_service(full_app()).await;
    let payload = json!({ "firstName": "Hello", "lastName": "World" });

    let first = actix_test::TestRequest::post()
        .uri("/toto/player/create/")
        .set_json(&payload)
        .to_request();
    assert_eq!(
        actix_test::call_service(&app, first).await.status(),
        StatusCode::CREATED
    );

    let duplicate = actix_test::TestRequest::post()
        .uri("/toto/player/create/")
        .set_json(&payload)
        .to_request();
    let res = actix_test::call_service(&app, duplicate).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body.get("code").and_then(Value::as_str), Some("conflict"));
}

#[actix_web::test]
async fn error_bodies_carry_the_request_trace_id() {
    let app = actix_test::init_service(full_app()).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/category/nope/")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let header = res
        .headers()
        .get("Trace-Id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("trace header");
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body.get("traceId").and_then(Value::as_str),
        Some(header.as_str())
    );
}

#[actix_web::test]
async fn license_and_certificate_follow_their_player() {
    let app = actix_test::init_service(full_app()).await;

    let create = actix_test::TestRequest::post()
        .uri("/toto/player/create/")
        .set_json(json!({ "firstName": "Hello", "lastName": "World" }))
        .to_request();
    let res = actix_test::call_service(&app, create).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let player: Value = actix_test::read_body_json(res).await;
    let player_id = player.get("id").and_then(Value::as_str).expect("id").to_owned();

    let license = actix_test::TestRequest::post()
        .uri("/license/create/")
        .set_json(json!({ "player": player_id, "licenseNumber": "1855210" }))
        .to_request();
    assert_eq!(
        actix_test::call_service(&app, license).await.status(),
        StatusCode::CREATED
    );

    let certificate = actix_test::TestRequest::post()
        .uri("/medical-certificate/create/")
        .set_json(json!({ "player": player_id, "start": "2025-09-01" }))
        .to_request();
    let res = actix_test::call_service(&app, certificate).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body.get("validity").and_then(Value::as_str),
        Some("in_validation")
    );
}
