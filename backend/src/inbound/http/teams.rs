//! Team CRUD handlers.
//!
//! Teams reference an existing category by slug; create and update reject
//! payloads pointing at a category that does not exist.

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Federation, Sex, Slug, Team};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, parse_slug, routes};

/// Request body for creating or updating a team.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequest {
    /// Display name; the slug is derived from it.
    pub name: String,
    /// Slug of the category the team plays in.
    pub category: String,
    pub federation: Federation,
    pub level: String,
    pub sex: Sex,
}

/// Admin list projection: name, category, level and sex.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamListItem {
    pub name: String,
    pub slug: Slug,
    pub category: Slug,
    pub federation: Federation,
    pub level: String,
    pub sex: Sex,
}

impl From<Team> for TeamListItem {
    fn from(team: Team) -> Self {
        Self {
            name: team.name,
            slug: team.slug,
            category: team.category,
            federation: team.federation,
            level: team.level,
            sex: team.sex,
        }
    }
}

async fn build_team(state: &HttpState, payload: TeamRequest) -> ApiResult<Team> {
    let category = Slug::new(&payload.category)
        .map_err(|err| Error::invalid_request(format!("category slug: {err}")))?;
    if state.categories.find_by_slug(&category).await?.is_none() {
        return Err(Error::invalid_request(format!(
            "unknown category '{category}'"
        )));
    }
    Team::new(
        payload.name,
        category,
        payload.federation,
        payload.level,
        payload.sex,
    )
    .map_err(|err| Error::invalid_request(err.to_string()))
}

/// List every team.
#[utoipa::path(
    get,
    path = "/team/",
    responses(
        (status = 200, description = "Teams", body = [TeamListItem]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["team"],
    operation_id = "listTeams"
)]
pub async fn list_teams(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TeamListItem>>> {
    let teams = state.teams.list().await?;
    Ok(web::Json(teams.into_iter().map(TeamListItem::from).collect()))
}

/// Create a team.
#[utoipa::path(
    post,
    path = "/team/create/",
    request_body = TeamRequest,
    responses(
        (status = 201, description = "Team created", body = Team),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Slug already in use", body = Error)
    ),
    tags = ["team"],
    operation_id = "createTeam"
)]
pub async fn create_team(
    state: web::Data<HttpState>,
    payload: web::Json<TeamRequest>,
) -> ApiResult<HttpResponse> {
    let team = build_team(&state, payload.into_inner()).await?;
    state.teams.create(&team).await?;
    Ok(HttpResponse::Created().json(team))
}

/// Fetch a team by slug.
#[utoipa::path(
    get,
    path = "/team/{slug}/",
    params(("slug" = String, Path, description = "Team slug")),
    responses(
        (status = 200, description = "Team", body = Team),
        (status = 404, description = "Unknown slug", body = Error)
    ),
    tags = ["team"],
    operation_id = "teamDetail"
)]
pub async fn team_detail(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Team>> {
    let slug = parse_slug(&path)?;
    let team = state
        .teams
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| Error::not_found(format!("no team with slug {slug}")))?;
    Ok(web::Json(team))
}

/// Replace a team.
#[utoipa::path(
    put,
    path = "/team/{slug}/update/",
    params(("slug" = String, Path, description = "Team slug")),
    request_body = TeamRequest,
    responses(
        (status = 200, description = "Team updated", body = Team),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown slug", body = Error)
    ),
    tags = ["team"],
    operation_id = "updateTeam"
)]
pub async fn update_team(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<TeamRequest>,
) -> ApiResult<web::Json<Team>> {
    let slug = parse_slug(&path)?;
    let team = build_team(&state, payload.into_inner()).await?;
    state.teams.update(&slug, &team).await?;
    Ok(web::Json(team))
}

/// Delete a team.
#[utoipa::path(
    delete,
    path = "/team/{slug}/delete/",
    params(("slug" = String, Path, description = "Team slug")),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 404, description = "Unknown slug", body = Error)
    ),
    tags = ["team"],
    operation_id = "deleteTeam"
)]
pub async fn delete_team(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let slug = parse_slug(&path)?;
    state.teams.delete(&slug).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Mount the team routes from the route table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(routes::mount("team-list"), web::get().to(list_teams))
        .route(routes::mount("team-create"), web::post().to(create_team))
        .route(routes::mount("team-detail"), web::get().to(team_detail))
        .route(routes::mount("team-update"), web::put().to(update_team))
        .route(routes::mount("team-delete"), web::delete().to(delete_team));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use serde_json::{Value, json};

    use crate::inbound::http::categories;

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
            .configure(categories::configure)
            .configure(configure)
    }

    async fn seed_category(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    ) {
        let create = actix_test::TestRequest::post()
            .uri("/category/create/")
            .set_json(json!({ "name": "U13", "minAge": 11, "maxAge": 13 }))
            .to_request();
        assert_eq!(
            actix_test::call_service(app, create).await.status(),
            StatusCode::CREATED
        );
    }

    #[actix_web::test]
    async fn create_checks_the_referenced_category() {
        let app = actix_test::init_service(test_app()).await;

        let orphan = actix_test::TestRequest::post()
            .uri("/team/create/")
            .set_json(json!({
                "name": "Les Aigles",
                "category": "u13",
                "federation": "ffvb",
                "level": "regional",
                "sex": "mixed"
            }))
            .to_request();
        let res = actix_test::call_service(&app, orphan).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            body.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );

        seed_category(&app).await;
        let create = actix_test::TestRequest::post()
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
            actix_test::call_service(&app, create).await.status(),
            StatusCode::CREATED
        );
    }

    #[actix_web::test]
    async fn level_outside_the_federation_ladder_is_400() {
        let app = actix_test::init_service(test_app()).await;
        seed_category(&app).await;

        let create = actix_test::TestRequest::post()
            .uri("/team/create/")
            .set_json(json!({
                "name": "Les Aigles",
                "category": "u13",
                "federation": "ffbb",
                "level": "elite",
                "sex": "male"
            }))
            .to_request();
        let res = actix_test::call_service(&app, create).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn detail_returns_the_created_team() {
        let app = actix_test::init_service(test_app()).await;
        seed_category(&app).await;

        let create = actix_test::TestRequest::post()
            .uri("/team/create/")
            .set_json(json!({
                "name": "Les Aigles",
                "category": "u13",
                "federation": "ffhb",
                "level": "national",
                "sex": "female"
            }))
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, create).await.status(),
            StatusCode::CREATED
        );

        let detail = actix_test::TestRequest::get()
            .uri("/team/les-aigles/")
            .to_request();
        let res = actix_test::call_service(&app, detail).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("category").and_then(Value::as_str), Some("u13"));
        assert_eq!(body.get("sex").and_then(Value::as_str), Some("female"));
    }
}
