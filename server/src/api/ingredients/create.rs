use super::INGREDIENT_EXISTS;
use crate::api::extract::JsonBody;
use crate::api::{ApiError, ErrorResponse};
use crate::db::DbPool;
use crate::models::{Ingredient, NewIngredient};
use crate::schema::ingredient;
use crate::types::{IngredientCreate, IngredientOut};
use axum::{extract::State, Json};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/ingredients/",
    tag = "ingredients",
    request_body(content = IngredientCreate, example = json!({"name": "Salt"})),
    responses(
        (status = 200, description = "Ingredient created", body = IngredientOut),
        (status = 409, description = "An ingredient with this name already exists", body = ErrorResponse),
        (status = 422, description = "Invalid name", body = ErrorResponse)
    )
)]
pub async fn create_ingredient(
    State(pool): State<Arc<DbPool>>,
    JsonBody(request): JsonBody<IngredientCreate>,
) -> Result<Json<IngredientOut>, ApiError> {
    request.validate()?;

    let mut conn = pool.get()?;

    let existing: Option<i32> = ingredient::table
        .filter(ingredient::name.eq(&request.name))
        .select(ingredient::id)
        .first(&mut conn)
        .optional()?;

    if existing.is_some() {
        return Err(ApiError::Conflict(INGREDIENT_EXISTS));
    }

    // The unique index still decides when two requests race past the check
    let result: Result<Ingredient, DieselError> = diesel::insert_into(ingredient::table)
        .values(NewIngredient {
            name: &request.name,
        })
        .returning(Ingredient::as_returning())
        .get_result(&mut conn);

    match result {
        Ok(created) => {
            tracing::info!(ingredient_id = created.id, "ingredient created");
            Ok(Json(created.into()))
        }
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            Err(ApiError::Conflict(INGREDIENT_EXISTS))
        }
        Err(e) => Err(e.into()),
    }
}
