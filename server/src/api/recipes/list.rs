use crate::api::extract::QueryParams;
use crate::api::{ApiError, ErrorResponse};
use crate::db::DbPool;
use crate::models::Recipe;
use crate::queries;
use crate::schema::recipe;
use crate::types::{require_non_negative, RecipeOut};
use axum::{extract::State, Json};
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

const DEFAULT_LIMIT: i64 = 10;

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListRecipesParams {
    /// Number of recipes to skip (default: 0)
    #[serde(default)]
    pub skip: i64,
    /// Maximum number of recipes to return (default: 10, no upper bound)
    #[serde(default = "default_limit")]
    pub limit: i64,
}

#[utoipa::path(
    get,
    path = "/recipes/",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "Page of recipes in insertion order", body = Vec<RecipeOut>),
        (status = 422, description = "Invalid paging parameters", body = ErrorResponse)
    )
)]
pub async fn list_recipes(
    State(pool): State<Arc<DbPool>>,
    QueryParams(params): QueryParams<ListRecipesParams>,
) -> Result<Json<Vec<RecipeOut>>, ApiError> {
    require_non_negative("skip", params.skip)?;
    require_non_negative("limit", params.limit)?;

    let mut conn = pool.get()?;

    let recipes: Vec<Recipe> = recipe::table
        .select(Recipe::as_select())
        .order(recipe::id)
        .limit(params.limit)
        .offset(params.skip)
        .load(&mut conn)?;

    Ok(Json(queries::with_relations(&mut conn, recipes)?))
}
