use super::RECIPE_NOT_FOUND;
use crate::api::extract::{JsonBody, PathParam, RowId};
use crate::api::{ApiError, ErrorResponse};
use crate::db::DbPool;
use crate::models::Recipe;
use crate::queries;
use crate::schema::recipe;
use crate::types::{RecipeCreate, RecipeOut};
use axum::{extract::State, Json};
use diesel::prelude::*;
use std::sync::Arc;

/// Replaces the title and description of a recipe.
///
/// The body is a full `RecipeCreate` and is validated as one, but steps,
/// cooking time, author, image, and links are left as stored.
#[utoipa::path(
    put,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID")
    ),
    request_body = RecipeCreate,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeOut),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 422, description = "Invalid recipe", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(pool): State<Arc<DbPool>>,
    PathParam(RowId(id)): PathParam<RowId>,
    JsonBody(request): JsonBody<RecipeCreate>,
) -> Result<Json<RecipeOut>, ApiError> {
    request.validate()?;

    let id = id.ok_or(ApiError::NotFound(RECIPE_NOT_FOUND))?;

    let mut conn = pool.get()?;

    let updated: Option<Recipe> = diesel::update(recipe::table.find(id))
        .set((
            recipe::title.eq(&request.title),
            recipe::description.eq(&request.description),
        ))
        .returning(Recipe::as_returning())
        .get_result(&mut conn)
        .optional()?;

    let updated = updated.ok_or(ApiError::NotFound(RECIPE_NOT_FOUND))?;
    tracing::info!(recipe_id = updated.id, "recipe updated");

    Ok(Json(queries::recipe_out(&mut conn, updated)?))
}
