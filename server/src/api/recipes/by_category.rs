use crate::api::extract::{PathParam, RowId};
use crate::api::ApiError;
use crate::db::DbPool;
use crate::models::Recipe;
use crate::queries;
use crate::schema::{recipe, recipe_categories};
use crate::types::RecipeOut;
use axum::{extract::State, Json};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/recipes/by_category/{id}",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Recipes that belong to the category; empty when none do", body = Vec<RecipeOut>)
    )
)]
pub async fn recipes_by_category(
    State(pool): State<Arc<DbPool>>,
    PathParam(RowId(id)): PathParam<RowId>,
) -> Result<Json<Vec<RecipeOut>>, ApiError> {
    let Some(category_id) = id else {
        return Ok(Json(Vec::new()));
    };

    let mut conn = pool.get()?;

    let recipes: Vec<Recipe> = recipe::table
        .inner_join(recipe_categories::table)
        .filter(recipe_categories::category_id.eq(category_id))
        .select(Recipe::as_select())
        .order(recipe::id)
        .load(&mut conn)?;

    Ok(Json(queries::with_relations(&mut conn, recipes)?))
}
