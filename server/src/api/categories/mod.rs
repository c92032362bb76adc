pub mod create;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /categories endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories/", post(create::create_category))
        .route("/categories", post(create::create_category))
}

#[derive(OpenApi)]
#[openapi(
    paths(create::create_category),
    components(schemas(crate::types::CategoryCreate, crate::types::CategoryOut))
)]
pub struct ApiDoc;
