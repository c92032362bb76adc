use super::RECIPE_NOT_FOUND;
use crate::api::extract::{PathParam, RowId};
use crate::api::{ApiError, ErrorResponse};
use crate::db::DbPool;
use crate::queries;
use crate::types::RecipeOut;
use axum::{extract::State, Json};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeOut),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 422, description = "Recipe ID is not an integer", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(pool): State<Arc<DbPool>>,
    PathParam(RowId(id)): PathParam<RowId>,
) -> Result<Json<RecipeOut>, ApiError> {
    let id = id.ok_or(ApiError::NotFound(RECIPE_NOT_FOUND))?;

    let mut conn = pool.get()?;

    let recipe = queries::find_recipe(&mut conn, id)?.ok_or(ApiError::NotFound(RECIPE_NOT_FOUND))?;

    Ok(Json(queries::recipe_out(&mut conn, recipe)?))
}
