pub mod create;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

pub const INGREDIENT_EXISTS: &str = "Ingredient already exists";

/// Returns the router for /ingredients endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ingredients/", post(create::create_ingredient))
        .route("/ingredients", post(create::create_ingredient))
}

#[derive(OpenApi)]
#[openapi(
    paths(create::create_ingredient),
    components(schemas(crate::types::IngredientCreate, crate::types::IngredientOut))
)]
pub struct ApiDoc;
