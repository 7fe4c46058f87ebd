//! Gymnasium CRUD handlers, following the same shape as the category
//! surface.

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Gymnasium};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, parse_slug, routes};

/// Request body for creating or updating a gymnasium.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GymnasiumRequest {
    /// Display name; the slug is derived from it.
    pub name: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub surface: Option<u32>,
}

fn build_gymnasium(payload: GymnasiumRequest) -> ApiResult<Gymnasium> {
    Gymnasium::new(
        payload.name,
        payload.address,
        payload.city,
        payload.zip_code,
        payload.surface,
    )
    .map_err(|err| Error::invalid_request(format!("gymnasium name yields no valid slug: {err}")))
}

/// List every gymnasium.
#[utoipa::path(
    get,
    path = "/gymnasium/",
    responses(
        (status = 200, description = "Gymnasiums", body = [Gymnasium]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["gymnasium"],
    operation_id = "listGymnasiums"
)]
pub async fn list_gymnasiums(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Gymnasium>>> {
    Ok(web::Json(state.gymnasiums.list().await?))
}

/// Create a gymnasium.
#[utoipa::path(
    post,
    path = "/gymnasium/create/",
    request_body = GymnasiumRequest,
    responses(
        (status = 201, description = "Gymnasium created", body = Gymnasium),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Slug already in use", body = Error)
    ),
    tags = ["gymnasium"],
    operation_id = "createGymnasium"
)]
pub async fn create_gymnasium(
    state: web::Data<HttpState>,
    payload: web::Json<GymnasiumRequest>,
) -> ApiResult<HttpResponse> {
    let gymnasium = build_gymnasium(payload.into_inner())?;
    state.gymnasiums.create(&gymnasium).await?;
    Ok(HttpResponse::Created().json(gymnasium))
}

/// Fetch a gymnasium by slug.
#[utoipa::path(
    get,
    path = "/gymnasium/{slug}/",
    params(("slug" = String, Path, description = "Gymnasium slug")),
    responses(
        (status = 200, description = "Gymnasium", body = Gymnasium),
        (status = 404, description = "Unknown slug", body = Error)
    ),
    tags = ["gymnasium"],
    operation_id = "gymnasiumDetail"
)]
pub async fn gymnasium_detail(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Gymnasium>> {
    let slug = parse_slug(&path)?;
    let gymnasium = state
        .gymnasiums
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| Error::not_found(format!("no gymnasium with slug {slug}")))?;
    Ok(web::Json(gymnasium))
}

/// Replace a gymnasium.
#[utoipa::path(
    put,
    path = "/gymnasium/{slug}/update/",
    params(("slug" = String, Path, description = "Gymnasium slug")),
    request_body = GymnasiumRequest,
    responses(
        (status = 200, description = "Gymnasium updated", body = Gymnasium),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown slug", body = Error)
    ),
    tags = ["gymnasium"],
    operation_id = "updateGymnasium"
)]
pub async fn update_gymnasium(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<GymnasiumRequest>,
) -> ApiResult<web::Json<Gymnasium>> {
    let slug = parse_slug(&path)?;
    let gymnasium = build_gymnasium(payload.into_inner())?;
    state.gymnasiums.update(&slug, &gymnasium).await?;
    Ok(web::Json(gymnasium))
}

/// Delete a gymnasium.
#[utoipa::path(
    delete,
    path = "/gymnasium/{slug}/delete/",
    params(("slug" = String, Path, description = "Gymnasium slug")),
    responses(
        (status = 204, description = "Gymnasium deleted"),
        (status = 404, description = "Unknown slug", body = Error)
    ),
    tags = ["gymnasium"],
    operation_id = "deleteGymnasium"
)]
pub async fn delete_gymnasium(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let slug = parse_slug(&path)?;
    state.gymnasiums.delete(&slug).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Mount the gymnasium routes from the route table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        routes::mount("gymnasium-list"),
        web::get().to(list_gymnasiums),
    )
    .route(
        routes::mount("gymnasium-create"),
        web::post().to(create_gymnasium),
    )
    .route(
        routes::mount("gymnasium-detail"),
        web::get().to(gymnasium_detail),
    )
    .route(
        routes::mount("gymnasium-update"),
        web::put().to(update_gymnasium),
    )
    .route(
        routes::mount("gymnasium-delete"),
        web::delete().to(delete_gymnasium),
    );
}
