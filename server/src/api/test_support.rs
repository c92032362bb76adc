//! Helpers for driving the real router against an in-memory database.

use crate::db::{create_pool, DbPool, IN_MEMORY};
use crate::types::RecipeOut;
use crate::AppState;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use diesel::sqlite::SqliteConnection;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub pool: Arc<DbPool>,
}

impl TestApp {
    pub fn new() -> Self {
        let pool: AppState = Arc::new(create_pool(IN_MEMORY, 1).expect("in-memory pool"));
        let router = super::router(pool.clone());
        Self { router, pool }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        match body {
            Some(value) => {
                self.send_raw(method, uri, Some("application/json"), value.to_string())
                    .await
            }
            None => self.send_raw(method, uri, None, String::new()).await,
        }
    }

    /// Sends `body` verbatim, with `content_type` when given.
    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: String,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }

        let response = self
            .router
            .clone()
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    pub async fn create_ingredient(&self, name: &str) -> i32 {
        let (status, body) = self.post("/ingredients/", json!({ "name": name })).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["id"].as_i64().unwrap() as i32
    }

    pub async fn create_category(&self, name: &str) -> i32 {
        let (status, body) = self.post("/categories/", json!({ "name": name })).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["id"].as_i64().unwrap() as i32
    }

    pub async fn create_recipe(&self, body: Value) -> RecipeOut {
        let (status, body) = self.post("/recipes/", body).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        serde_json::from_value(body).unwrap()
    }

    /// Runs `f` with a pooled connection. The connection is returned to the
    /// pool before this returns, so the router can use it again.
    pub fn with_conn<T>(&self, f: impl FnOnce(&mut SqliteConnection) -> T) -> T {
        let mut conn = self.pool.get().unwrap();
        f(&mut *conn)
    }
}

pub fn recipe_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": format!("{title} description"),
        "steps": "Mix everything",
        "cooking_time": 15,
    })
}

pub fn recipes_from(body: Value) -> Vec<RecipeOut> {
    serde_json::from_value(body).unwrap()
}

pub fn titles(recipes: &[RecipeOut]) -> Vec<&str> {
    recipes.iter().map(|r| r.title.as_str()).collect()
}
