use crate::api::extract::JsonBody;
use crate::api::{ApiError, ErrorResponse};
use crate::db::DbPool;
use crate::models::{Category, NewCategory};
use crate::schema::category;
use crate::types::{CategoryCreate, CategoryOut};
use axum::{extract::State, Json};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/categories/",
    tag = "categories",
    request_body(content = CategoryCreate, example = json!({"name": "Soups"})),
    responses(
        (status = 200, description = "Category created", body = CategoryOut),
        (status = 422, description = "Invalid name", body = ErrorResponse)
    )
)]
pub async fn create_category(
    State(pool): State<Arc<DbPool>>,
    JsonBody(request): JsonBody<CategoryCreate>,
) -> Result<Json<CategoryOut>, ApiError> {
    request.validate()?;

    let mut conn = pool.get()?;

    // Category names are not unique
    let created: Category = diesel::insert_into(category::table)
        .values(NewCategory {
            name: &request.name,
        })
        .returning(Category::as_returning())
        .get_result(&mut conn)?;

    tracing::info!(category_id = created.id, "category created");

    Ok(Json(created.into()))
}
