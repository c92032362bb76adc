pub mod by_category;
pub mod by_ingredient;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

pub const RECIPE_NOT_FOUND: &str = "Recipe not found";

/// Returns the router for /recipes endpoints. Collection paths answer with
/// and without the trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/recipes/",
            get(list::list_recipes).post(create::create_recipe),
        )
        .route(
            "/recipes",
            get(list::list_recipes).post(create::create_recipe),
        )
        .route("/recipes/search/", get(search::search_recipes))
        .route("/recipes/search", get(search::search_recipes))
        .route(
            "/recipes/by_ingredient/{id}",
            get(by_ingredient::recipes_by_ingredient),
        )
        .route(
            "/recipes/by_category/{id}",
            get(by_category::recipes_by_category),
        )
        .route(
            "/recipes/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_recipe,
        list::list_recipes,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
        search::search_recipes,
        by_ingredient::recipes_by_ingredient,
        by_category::recipes_by_category,
    ),
    components(schemas(
        crate::types::RecipeCreate,
        crate::types::RecipeOut,
        crate::types::IngredientOut,
        crate::types::CategoryOut,
        delete::RecipeDeleted,
    ))
)]
pub struct ApiDoc;
