//! Category CRUD handlers.
//!
//! ```text
//! GET    /category/                 list
//! POST   /category/create/          create
//! GET    /category/{slug}/          detail
//! PUT    /category/{slug}/update/   update
//! DELETE /category/{slug}/delete/   delete
//! ```

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Category, Error, Slug};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, parse_slug, routes};

/// Request body for creating or updating a category.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    /// Display name; the slug is derived from it.
    pub name: String,
    pub min_age: u8,
    pub max_age: u8,
}

/// Admin list projection: name and age bracket.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListItem {
    pub name: String,
    pub slug: Slug,
    pub min_age: u8,
    pub max_age: u8,
}

impl From<Category> for CategoryListItem {
    fn from(category: Category) -> Self {
        Self {
            name: category.name,
            slug: category.slug,
            min_age: category.min_age,
            max_age: category.max_age,
        }
    }
}

fn build_category(payload: CategoryRequest) -> ApiResult<Category> {
    Category::new(payload.name, payload.min_age, payload.max_age)
        .map_err(|err| Error::invalid_request(err.to_string()))
}

/// List every category.
#[utoipa::path(
    get,
    path = "/category/",
    responses(
        (status = 200, description = "Categories", body = [CategoryListItem]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["category"],
    operation_id = "listCategories"
)]
pub async fn list_categories(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<CategoryListItem>>> {
    let categories = state.categories.list().await?;
    Ok(web::Json(
        categories.into_iter().map(CategoryListItem::from).collect(),
    ))
}

/// Create a category.
#[utoipa::path(
    post,
    path = "/category/create/",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Slug already in use", body = Error)
    ),
    tags = ["category"],
    operation_id = "createCategory"
)]
pub async fn create_category(
    state: web::Data<HttpState>,
    payload: web::Json<CategoryRequest>,
) -> ApiResult<HttpResponse> {
    let category = build_category(payload.into_inner())?;
    state.categories.create(&category).await?;
    Ok(HttpResponse::Created().json(category))
}

/// Fetch a category by slug.
#[utoipa::path(
    get,
    path = "/category/{slug}/",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category", body = Category),
        (status = 404, description = "Unknown slug", body = Error)
    ),
    tags = ["category"],
    operation_id = "categoryDetail"
)]
pub async fn category_detail(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Category>> {
    let slug = parse_slug(&path)?;
    let category = state
        .categories
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| Error::not_found(format!("no category with slug {slug}")))?;
    Ok(web::Json(category))
}

/// Replace a category.
#[utoipa::path(
    put,
    path = "/category/{slug}/update/",
    params(("slug" = String, Path, description = "Category slug")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown slug", body = Error)
    ),
    tags = ["category"],
    operation_id = "updateCategory"
)]
pub async fn update_category(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CategoryRequest>,
) -> ApiResult<web::Json<Category>> {
    let slug = parse_slug(&path)?;
    let category = build_category(payload.into_inner())?;
    state.categories.update(&slug, &category).await?;
    Ok(web::Json(category))
}

/// Delete a category.
#[utoipa::path(
    delete,
    path = "/category/{slug}/delete/",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Unknown slug", body = Error)
    ),
    tags = ["category"],
    operation_id = "deleteCategory"
)]
pub async fn delete_category(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let slug = parse_slug(&path)?;
    state.categories.delete(&slug).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Mount the category routes from the route table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        routes::mount("category-list"),
        web::get().to(list_categories),
    )
    .route(
        routes::mount("category-create"),
        web::post().to(create_category),
    )
    .route(
        routes::mount("category-detail"),
        web::get().to(category_detail),
    )
    .route(
        routes::mount("category-update"),
        web::put().to(update_category),
    )
    .route(
        routes::mount("category-delete"),
        web::delete().to(delete_category),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use rstest::rstest;
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
    async fn create_then_fetch_by_derived_slug() {
        let app = actix_test::init_service(test_app()).await;

        let create = actix_test::TestRequest::post()
            .uri("/category/create/")
            .set_json(json!({ "name": "Hello World", "minAge": 11, "maxAge": 13 }))
            .to_request();
        let res = actix_test::call_service(&app, create).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let detail = actix_test::TestRequest::get()
            .uri("/category/hello-world/")
            .to_request();
        let res = actix_test::call_service(&app, detail).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("name").and_then(Value::as_str), Some("Hello World"));
        assert_eq!(body.get("slug").and_then(Value::as_str), Some("hello-world"));
    }

    #[actix_web::test]
    async fn unknown_slug_is_404() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/category/nope/")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[actix_web::test]
    async fn inverted_age_bracket_is_400() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/category/create/")
                .set_json(json!({ "name": "U13", "minAge": 13, "maxAge": 11 }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            body.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
    }

    #[actix_web::test]
    async fn delete_removes_the_record() {
        let app = actix_test::init_service(test_app()).await;

        let create = actix_test::TestRequest::post()
            .uri("/category/create/")
            .set_json(json!({ "name": "U13", "minAge": 11, "maxAge": 13 }))
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, create).await.status(),
            StatusCode::CREATED
        );

        let delete = actix_test::TestRequest::delete()
            .uri("/category/u13/delete/")
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, delete).await.status(),
            StatusCode::NO_CONTENT
        );

        let detail = actix_test::TestRequest::get()
            .uri("/category/u13/")
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, detail).await.status(),
            StatusCode::NOT_FOUND
        );
    }
}
