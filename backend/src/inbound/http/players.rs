//! Player CRUD handlers, scoped under the owning user's namespace.
//!
//! ```text
//! GET    /{username}/player/                 list the user's players
//! POST   /{username}/player/create/          create
//! GET    /{username}/player/{slug}/          detail
//! PUT    /{username}/player/{slug}/update/   update
//! DELETE /{username}/player/{slug}/delete/   delete
//! ```
//!
//! The owner is always the username in the path; payloads never carry it.
//! Two users may register players with identical names, but one user
//! registering the same `(first name, last name)` twice is a conflict.

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Player};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, parse_slug, routes};

/// Request body for creating or updating a player.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRequest {
    pub first_name: String,
    pub last_name: String,
}

fn build_player(owner: &str, payload: PlayerRequest) -> ApiResult<Player> {
    Player::new(payload.first_name, payload.last_name, owner)
        .map_err(|err| Error::invalid_request(err.to_string()))
}

/// List the players owned by a user.
#[utoipa::path(
    get,
    path = "/{username}/player/",
    params(("username" = String, Path, description = "Owning user")),
    responses(
        (status = 200, description = "Players owned by the user", body = [Player]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["player"],
    operation_id = "listPlayers"
)]
pub async fn list_players(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Player>>> {
    Ok(web::Json(state.players.list_by_owner(&path).await?))
}

/// Create a player owned by the user in the path.
#[utoipa::path(
    post,
    path = "/{username}/player/create/",
    params(("username" = String, Path, description = "Owning user")),
    request_body = PlayerRequest,
    responses(
        (status = 201, description = "Player created", body = Player),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "The user already owns a player with this name", body = Error)
    ),
    tags = ["player"],
    operation_id = "createPlayer"
)]
pub async fn create_player(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<PlayerRequest>,
) -> ApiResult<HttpResponse> {
    let player = build_player(&path, payload.into_inner())?;
    state.players.create(&player).await?;
    Ok(HttpResponse::Created().json(player))
}

/// Fetch one of the user's players by slug.
#[utoipa::path(
    get,
    path = "/{username}/player/{slug}/",
    params(
        ("username" = String, Path, description = "Owning user"),
        ("slug" = String, Path, description = "Player slug")
    ),
    responses(
        (status = 200, description = "Player", body = Player),
        (status = 404, description = "The user owns no such player", body = Error)
    ),
    tags = ["player"],
    operation_id = "playerDetail"
)]
pub async fn player_detail(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<Player>> {
    let (username, raw_slug) = path.into_inner();
    let slug = parse_slug(&raw_slug)?;
    let player = state
        .players
        .find(&username, &slug)
        .await?
        .ok_or_else(|| Error::not_found(format!("{username} owns no player {slug}")))?;
    Ok(web::Json(player))
}

/// Replace one of the user's players, keeping its identifier.
#[utoipa::path(
    put,
    path = "/{username}/player/{slug}/update/",
    params(
        ("username" = String, Path, description = "Owning user"),
        ("slug" = String, Path, description = "Player slug")
    ),
    request_body = PlayerRequest,
    responses(
        (status = 200, description = "Player updated", body = Player),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "The user owns no such player", body = Error),
        (status = 409, description = "The user already owns a player with the new name", body = Error)
    ),
    tags = ["player"],
    operation_id = "updatePlayer"
)]
pub async fn update_player(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
    payload: web::Json<PlayerRequest>,
) -> ApiResult<web::Json<Player>> {
    let (username, raw_slug) = path.into_inner();
    let slug = parse_slug(&raw_slug)?;
    let existing = state
        .players
        .find(&username, &slug)
        .await?
        .ok_or_else(|| Error::not_found(format!("{username} owns no player {slug}")))?;
    let mut player = build_player(&username, payload.into_inner())?;
    player.id = existing.id;
    state.players.update(&username, &slug, &player).await?;
    Ok(web::Json(player))
}

/// Delete one of the user's players.
#[utoipa::path(
    delete,
    path = "/{username}/player/{slug}/delete/",
    params(
        ("username" = String, Path, description = "Owning user"),
        ("slug" = String, Path, description = "Player slug")
    ),
    responses(
        (status = 204, description = "Player deleted"),
        (status = 404, description = "The user owns no such player", body = Error)
    ),
    tags = ["player"],
    operation_id = "deletePlayer"
)]
pub async fn delete_player(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (username, raw_slug) = path.into_inner();
    let slug = parse_slug(&raw_slug)?;
    state.players.delete(&username, &slug).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Mount the player routes from the route table.
///
/// These patterns start with a `{username}` wildcard, so the caller must
/// register them after every fixed-prefix resource.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(routes::mount("player-list"), web::get().to(list_players))
        .route(routes::mount("player-create"), web::post().to(create_player))
        .route(routes::mount("player-detail"), web::get().to(player_detail))
        .route(routes::mount("player-update"), web::put().to(update_player))
        .route(routes::mount("player-delete"), web::delete().to(delete_player));
}
