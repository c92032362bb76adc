pub mod categories;
pub mod extract;
pub mod ingredients;
pub mod recipes;

#[cfg(test)]
pub(crate) mod test_support;

use crate::types::ValidationError;
use crate::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Everything a handler can fail with. Rendered as `{"detail": ...}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(&'static str),

    /// An extractor refused the request before the handler ran.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("database connection failed: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Rejected { status, .. } => *status,
            Self::Database(_) | Self::Pool(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            // Log the actual error, return a generic message
            Self::Database(e) => {
                tracing::error!(error = %e, "database error");
                "Internal server error".to_string()
            }
            Self::Pool(e) => {
                tracing::error!(error = %e, "failed to get database connection");
                "Database connection failed".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

// A body that is not JSON, is malformed JSON, or does not fit the shape is
// bad input like a failed field check, and so are query strings and path
// segments that fail to deserialize: all report 422.

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match &rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => rejection.status(),
        };
        Self::Rejected {
            status,
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        let status = match &rejection {
            QueryRejection::FailedToDeserializeQueryString(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => rejection.status(),
        };
        Self::Rejected {
            status,
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        let status = match &rejection {
            PathRejection::FailedToDeserializePathParams(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => rejection.status(),
        };
        Self::Rejected {
            status,
            message: rejection.body_text(),
        }
    }
}

/// Builds the full application router: every endpoint plus Swagger UI.
pub fn router(state: AppState) -> Router {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi());

    Router::new()
        .merge(recipes::router())
        .merge(ingredients::router())
        .merge(categories::router())
        .merge(swagger_ui)
        .with_state(state)
}

/// The OpenAPI document for the whole API: the base info and shared schemas,
/// with each route module's paths and schemas merged in.
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Recipe catalog API"),
        components(schemas(ErrorResponse))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        recipes::ApiDoc::openapi(),
        ingredients::ApiDoc::openapi(),
        categories::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.merge(module_spec);
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_detail(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        body.detail
    }

    #[tokio::test]
    async fn test_not_found_is_404_with_fixed_message() {
        let response = ApiError::NotFound("Recipe not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_detail(response).await, "Recipe not found");
    }

    #[tokio::test]
    async fn test_validation_is_422() {
        let err = ApiError::from(ValidationError::Blank { field: "title" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_detail(response).await, "title must not be empty");
    }

    #[tokio::test]
    async fn test_conflict_is_409() {
        let response = ApiError::Conflict("Ingredient already exists").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_database_error_hides_details() {
        let err = ApiError::from(diesel::result::Error::RollbackTransaction);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_detail(response).await, "Internal server error");
    }

    #[test]
    fn test_openapi_lists_every_route() {
        let spec = openapi();
        for path in [
            "/recipes/",
            "/recipes/{id}",
            "/recipes/search/",
            "/recipes/by_ingredient/{id}",
            "/recipes/by_category/{id}",
            "/ingredients/",
            "/categories/",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
