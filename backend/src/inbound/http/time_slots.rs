//! Time-slot CRUD handlers, keyed by id.
//!
//! Slots reference an existing team by slug; create and update reject
//! payloads pointing at a team that does not exist.

use actix_web::{HttpResponse, web};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Day, Error, Slug, TimeSlot, TimeSlotKind};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, routes};

/// Request body for creating or updating a time slot.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotRequest {
    /// Slug of the team the slot is booked for.
    pub team: String,
    pub kind: TimeSlotKind,
    pub day: Day,
    #[schema(value_type = String, example = "18:30:00")]
    pub start: NaiveTime,
    #[schema(value_type = String, example = "20:00:00")]
    pub end: NaiveTime,
}

async fn build_slot(state: &HttpState, payload: TimeSlotRequest) -> ApiResult<TimeSlot> {
    let team = Slug::new(&payload.team)
        .map_err(|err| Error::invalid_request(format!("team slug: {err}")))?;
    if state.teams.find_by_slug(&team).await?.is_none() {
        return Err(Error::invalid_request(format!("unknown team '{team}'")));
    }
    TimeSlot::new(team, payload.kind, payload.day, payload.start, payload.end)
        .map_err(|err| Error::invalid_request(err.to_string()))
}

/// List every time slot.
#[utoipa::path(
    get,
    path = "/time-slot/",
    responses(
        (status = 200, description = "Time slots", body = [TimeSlot]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["time-slot"],
    operation_id = "listTimeSlots"
)]
pub async fn list_time_slots(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TimeSlot>>> {
    Ok(web::Json(state.time_slots.list().await?))
}

/// Create a time slot.
#[utoipa::path(
    post,
    path = "/time-slot/create/",
    request_body = TimeSlotRequest,
    responses(
        (status = 201, description = "Time slot created", body = TimeSlot),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["time-slot"],
    operation_id = "createTimeSlot"
)]
pub async fn create_time_slot(
    state: web::Data<HttpState>,
    payload: web::Json<TimeSlotRequest>,
) -> ApiResult<HttpResponse> {
    let slot = build_slot(&state, payload.into_inner()).await?;
    state.time_slots.create(&slot).await?;
    Ok(HttpResponse::Created().json(slot))
}

/// Fetch a time slot by id.
#[utoipa::path(
    get,
    path = "/time-slot/{id}/",
    params(("id" = Uuid, Path, description = "Time slot id")),
    responses(
        (status = 200, description = "Time slot", body = TimeSlot),
        (status = 404, description = "Unknown id", body = Error)
    ),
    tags = ["time-slot"],
    operation_id = "timeSlotDetail"
)]
pub async fn time_slot_detail(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<TimeSlot>> {
    let id = path.into_inner();
    let slot = state
        .time_slots
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found(format!("no time slot with id {id}")))?;
    Ok(web::Json(slot))
}

/// Replace a time slot, keeping its identifier.
#[utoipa::path(
    put,
    path = "/time-slot/{id}/update/",
    params(("id" = Uuid, Path, description = "Time slot id")),
    request_body = TimeSlotRequest,
    responses(
        (status = 200, description = "Time slot updated", body = TimeSlot),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown id", body = Error)
    ),
    tags = ["time-slot"],
    operation_id = "updateTimeSlot"
)]
pub async fn update_time_slot(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
    payload: web::Json<TimeSlotRequest>,
) -> ApiResult<web::Json<TimeSlot>> {
    let id = path.into_inner();
    let mut slot = build_slot(&state, payload.into_inner()).await?;
    slot.id = id;
    state.time_slots.update(id, &slot).await?;
    Ok(web::Json(slot))
}

/// Delete a time slot.
#[utoipa::path(
    delete,
    path = "/time-slot/{id}/delete/",
    params(("id" = Uuid, Path, description = "Time slot id")),
    responses(
        (status = 204, description = "Time slot deleted"),
        (status = 404, description = "Unknown id", body = Error)
    ),
    tags = ["time-slot"],
    operation_id = "deleteTimeSlot"
)]
pub async fn delete_time_slot(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    state.time_slots.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Mount the time-slot routes from the route table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(routes::mount("time-slot-list"), web::get().to(list_time_slots))
        .route(
            routes::mount("time-slot-create"),
            web::post().to(create_time_slot),
        )
        .route(
            routes::mount("time-slot-detail"),
            web::get().to(time_slot_detail),
        )
        .route(
            routes::mount("time-slot-update"),
            web::put().to(update_time_slot),
        )
        .route(
            routes::mount("time-slot-delete"),
            web::delete().to(delete_time_slot),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use serde_json::{Value, json};

    use crate::domain::{Federation, Sex, Team};

    async fn seeded_state() -> HttpState {
        let state = HttpState::in_memory();
        let team = Team::new(
            "Les Aigles",
            Slug::new("u13").expect("slug"),
            Federation::Ffvb,
            "regional",
            Sex::Mixed,
        )
        .expect("team");
        state.teams.create(&team).await.expect("seed team");
        state
    }

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure)
    }

    #[actix_web::test]
    async fn create_then_fetch_by_id() {
        let app = actix_test::init_service(test_app(seeded_state().await)).await;

        let create = actix_test::TestRequest::post()
            .uri("/time-slot/create/")
            .set_json(json!({
                "team": "les-aigles",
                "kind": "practice",
                "day": "tuesday",
                "start": "18:30:00",
                "end": "20:00:00"
            }))
            .to_request();
        let res = actix_test::call_service(&app, create).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(res).await;
        let id = body.get("id").and_then(Value::as_str).expect("id").to_owned();

        let detail = actix_test::TestRequest::get()
            .uri(&format!("/time-slot/{id}/"))
            .to_request();
        let res = actix_test::call_service(&app, detail).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("day").and_then(Value::as_str), Some("tuesday"));
    }

    #[actix_web::test]
    async fn inverted_interval_is_400() {
        let app = actix_test::init_service(test_app(seeded_state().await)).await;

        let create = actix_test::TestRequest::post()
            .uri("/time-slot/create/")
            .set_json(json!({
                "team": "les-aigles",
                "kind": "match",
                "day": "saturday",
                "start": "20:00:00",
                "end": "18:30:00"
            }))
            .to_request();
        let res = actix_test::call_service(&app, create).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn unknown_team_is_400() {
        let app = actix_test::init_service(test_app(HttpState::in_memory())).await;

        let create = actix_test::TestRequest::post()
            .uri("/time-slot/create/")
            .set_json(json!({
                "team": "les-aigles",
                "kind": "practice",
                "day": "tuesday",
                "start": "18:30:00",
                "end": "20:00:00"
            }))
            .to_request();
        let res = actix_test::call_service(&app, create).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn unknown_id_is_404() {
        let app = actix_test::init_service(test_app(HttpState::in_memory())).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/time-slot/{}/", Uuid::nil()))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
