use crate::api::extract::JsonBody;
use crate::api::{ApiError, ErrorResponse};
use crate::db::DbPool;
use crate::links;
use crate::models::{NewRecipe, Recipe};
use crate::queries;
use crate::schema::recipe;
use crate::types::{RecipeCreate, RecipeOut};
use axum::{extract::State, Json};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/recipes/",
    tag = "recipes",
    request_body(
        content = RecipeCreate,
        example = json!({
            "title": "Soup",
            "description": "Hot",
            "steps": "Boil",
            "cooking_time": 20,
            "ingredient_ids": [1, 2],
            "category_ids": []
        })
    ),
    responses(
        (status = 200, description = "Recipe created", body = RecipeOut),
        (status = 422, description = "Invalid recipe", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(pool): State<Arc<DbPool>>,
    JsonBody(request): JsonBody<RecipeCreate>,
) -> Result<Json<RecipeOut>, ApiError> {
    request.validate()?;

    let mut conn = pool.get()?;

    // Recipe row and its links are written atomically
    let result: Result<Recipe, diesel::result::Error> = conn.transaction(|conn| {
        let new_recipe = NewRecipe {
            title: &request.title,
            description: &request.description,
            steps: &request.steps,
            cooking_time: request.cooking_time,
            author_id: request.author_id,
            image: request.image.as_deref(),
        };

        let created: Recipe = diesel::insert_into(recipe::table)
            .values(&new_recipe)
            .returning(Recipe::as_returning())
            .get_result(conn)?;

        let ingredient_ids = links::resolve_ingredient_ids(conn, &request.ingredient_ids)?;
        let ingredients = links::sync_ingredients(conn, created.id, &ingredient_ids)?;

        let category_ids = links::resolve_category_ids(conn, &request.category_ids)?;
        let categories = links::sync_categories(conn, created.id, &category_ids)?;

        tracing::debug!(
            recipe_id = created.id,
            ingredients_linked = ingredients.added.len(),
            ingredients_ignored = request.ingredient_ids.len() - ingredient_ids.len(),
            categories_linked = categories.added.len(),
            categories_ignored = request.category_ids.len() - category_ids.len(),
            "recipe links written"
        );

        Ok(created)
    });

    let created = result?;
    tracing::info!(recipe_id = created.id, "recipe created");

    Ok(Json(queries::recipe_out(&mut conn, created)?))
}
