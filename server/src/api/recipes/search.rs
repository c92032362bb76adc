use crate::api::extract::QueryParams;
use crate::api::ApiError;
use crate::db::DbPool;
use crate::models::Recipe;
use crate::queries;
use crate::schema::recipe;
use crate::types::RecipeOut;
use axum::{extract::State, Json};
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchRecipesParams {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Case-insensitive substring of the description
    pub description: Option<String>,
}

/// Wraps `term` for a `LIKE ... ESCAPE '\'` match anywhere in the column, so
/// `%` and `_` typed by a user match themselves.
fn contains_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[utoipa::path(
    get,
    path = "/recipes/search/",
    tag = "recipes",
    params(SearchRecipesParams),
    responses(
        (status = 200, description = "All recipes matching every given filter", body = Vec<RecipeOut>)
    )
)]
pub async fn search_recipes(
    State(pool): State<Arc<DbPool>>,
    QueryParams(params): QueryParams<SearchRecipesParams>,
) -> Result<Json<Vec<RecipeOut>>, ApiError> {
    // Pre-compute patterns so they live long enough for the boxed query
    let title_pattern = params.title.as_deref().map(contains_pattern);
    let description_pattern = params.description.as_deref().map(contains_pattern);

    let mut conn = pool.get()?;

    let mut query = recipe::table
        .select(Recipe::as_select())
        .order(recipe::id)
        .into_boxed();

    // SQLite LIKE folds ASCII case
    if let Some(ref pattern) = title_pattern {
        query = query.filter(recipe::title.like(pattern).escape('\\'));
    }
    if let Some(ref pattern) = description_pattern {
        query = query.filter(recipe::description.like(pattern).escape('\\'));
    }

    let recipes: Vec<Recipe> = query.load(&mut conn)?;

    Ok(Json(queries::with_relations(&mut conn, recipes)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{recipes_from, titles, TestApp};
    use crate::db::SQLITE_MAX_VARIABLES;
    use crate::models::NewRecipeIngredient;
    use crate::schema::recipe_ingredients;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("sou"), "%sou%");
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("c:\\"), "%c:\\\\%");
    }

    async fn seeded() -> TestApp {
        let app = TestApp::new();
        for (title, description) in [
            ("Soup", "Hot and salty"),
            ("Sourdough", "Slow bread"),
            ("Salad", "Cold and crisp"),
            ("100% Rye", "Dense bread"),
        ] {
            app.create_recipe(json!({
                "title": title,
                "description": description,
                "steps": "Cook",
                "cooking_time": 10,
            }))
            .await;
        }
        app
    }

    async fn search(app: &TestApp, query: &str) -> Vec<String> {
        let (status, body) = app.get(&format!("/recipes/search/{query}")).await;
        assert_eq!(status, StatusCode::OK);
        titles(&recipes_from(body))
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn test_title_is_case_insensitive_substring() {
        let app = seeded().await;
        assert_eq!(search(&app, "?title=sou").await, vec!["Soup", "Sourdough"]);
        assert_eq!(search(&app, "?title=SOUP").await, vec!["Soup"]);
    }

    #[tokio::test]
    async fn test_filters_combine_with_and() {
        let app = seeded().await;
        assert_eq!(search(&app, "?description=BREAD").await, vec!["Sourdough", "100% Rye"]);
        assert_eq!(
            search(&app, "?title=sou&description=bread").await,
            vec!["Sourdough"]
        );
        assert!(search(&app, "?title=salad&description=hot").await.is_empty());
    }

    #[tokio::test]
    async fn test_no_filters_returns_everything() {
        let app = seeded().await;
        assert_eq!(search(&app, "").await.len(), 4);

        let (status, body) = app.get("/recipes/search").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(recipes_from(body).len(), 4);
    }

    #[tokio::test]
    async fn test_wildcards_match_literally() {
        let app = seeded().await;
        assert_eq!(search(&app, "?title=100%25").await, vec!["100% Rye"]);
        assert!(search(&app, "?title=S_up").await.is_empty());
    }

    #[tokio::test]
    async fn test_search_is_not_paginated() {
        let app = TestApp::new();
        for n in 0..15 {
            app.create_recipe(json!({
                "title": format!("Pie {n}"),
                "description": "Sweet",
                "steps": "Bake",
                "cooking_time": 50,
            }))
            .await;
        }
        assert_eq!(search(&app, "?title=pie").await.len(), 15);
    }

    #[tokio::test]
    async fn test_results_larger_than_a_statement_allows() {
        let app = TestApp::new();
        let thyme = app.create_ingredient("Thyme").await;
        let total = SQLITE_MAX_VARIABLES + 500;

        let last_id = app.with_conn(|conn| {
            let titles: Vec<String> = (0..total).map(|n| format!("Bulk {n}")).collect();
            for chunk in titles.chunks(1_000) {
                let rows: Vec<_> = chunk
                    .iter()
                    .map(|title| {
                        (
                            recipe::title.eq(title.as_str()),
                            recipe::description.eq("Batch"),
                            recipe::steps.eq("Repeat"),
                            recipe::cooking_time.eq(1),
                        )
                    })
                    .collect();
                diesel::insert_into(recipe::table)
                    .values(&rows)
                    .execute(conn)
                    .unwrap();
            }
            let last_id: i32 = recipe::table
                .select(recipe::id)
                .order(recipe::id.desc())
                .first(conn)
                .unwrap();
            diesel::insert_into(recipe_ingredients::table)
                .values(NewRecipeIngredient {
                    recipe_id: last_id,
                    ingredient_id: thyme,
                })
                .execute(conn)
                .unwrap();
            last_id
        });

        let (status, body) = app.get("/recipes/search/?description=batch").await;
        assert_eq!(status, StatusCode::OK, "{body}");
        let recipes = recipes_from(body);
        assert_eq!(recipes.len(), total);

        let last = recipes.last().unwrap();
        assert_eq!(last.id, last_id);
        assert_eq!(last.ingredients.len(), 1);
        assert_eq!(last.ingredients[0].id, thyme);
        assert!(recipes[0].ingredients.is_empty());
    }
}
