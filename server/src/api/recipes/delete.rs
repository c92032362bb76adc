use super::RECIPE_NOT_FOUND;
use crate::api::extract::{PathParam, RowId};
use crate::api::{ApiError, ErrorResponse};
use crate::db::DbPool;
use crate::links;
use crate::schema::recipe;
use axum::{extract::State, Json};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeDeleted {
    pub detail: String,
}

#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe and its links deleted", body = RecipeDeleted),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(
    State(pool): State<Arc<DbPool>>,
    PathParam(RowId(id)): PathParam<RowId>,
) -> Result<Json<RecipeDeleted>, ApiError> {
    let id = id.ok_or(ApiError::NotFound(RECIPE_NOT_FOUND))?;

    let mut conn = pool.get()?;

    // Join rows go first, in the same transaction as the recipe row
    let result: Result<(usize, usize), diesel::result::Error> = conn.transaction(|conn| {
        let unlinked = links::clear_links(conn, id)?;
        let deleted = diesel::delete(recipe::table.find(id)).execute(conn)?;
        Ok((unlinked, deleted))
    });

    let (unlinked, deleted) = result?;
    if deleted == 0 {
        return Err(ApiError::NotFound(RECIPE_NOT_FOUND));
    }

    tracing::info!(recipe_id = id, links_removed = unlinked, "recipe deleted");

    Ok(Json(RecipeDeleted {
        detail: "Recipe deleted".to_string(),
    }))
}
