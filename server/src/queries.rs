//! Read paths shared by the recipe handlers.

use crate::db::BIND_CHUNK;
use crate::models::{Category, Ingredient, Recipe, RecipeCategory, RecipeIngredient};
use crate::schema::{category, ingredient, recipe};
use crate::types::RecipeOut;
use diesel::prelude::*;

pub fn find_recipe(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<Recipe>> {
    recipe::table
        .find(id)
        .select(Recipe::as_select())
        .first(conn)
        .optional()
}

/// Loads the ingredients and categories of every recipe in `recipes` with one
/// query per join table and chunk of recipes, preserving the order of
/// `recipes`. Nested lists are ordered by id.
pub fn with_relations(
    conn: &mut SqliteConnection,
    recipes: Vec<Recipe>,
) -> QueryResult<Vec<RecipeOut>> {
    if recipes.is_empty() {
        return Ok(Vec::new());
    }

    let mut ingredient_links: Vec<(RecipeIngredient, Ingredient)> = Vec::new();
    let mut category_links: Vec<(RecipeCategory, Category)> = Vec::new();

    // Each recipe id is a bound variable
    for chunk in recipes.chunks(BIND_CHUNK) {
        ingredient_links.extend(
            RecipeIngredient::belonging_to(chunk)
                .inner_join(ingredient::table)
                .select((RecipeIngredient::as_select(), Ingredient::as_select()))
                .order(ingredient::id)
                .load::<(RecipeIngredient, Ingredient)>(conn)?,
        );
        category_links.extend(
            RecipeCategory::belonging_to(chunk)
                .inner_join(category::table)
                .select((RecipeCategory::as_select(), Category::as_select()))
                .order(category::id)
                .load::<(RecipeCategory, Category)>(conn)?,
        );
    }

    let ingredients_per_recipe = ingredient_links.grouped_by(&recipes);
    let categories_per_recipe = category_links.grouped_by(&recipes);

    Ok(recipes
        .into_iter()
        .zip(ingredients_per_recipe)
        .zip(categories_per_recipe)
        .map(|((recipe, ingredients), categories)| {
            RecipeOut::new(
                recipe,
                ingredients.into_iter().map(|(_, i)| i).collect(),
                categories.into_iter().map(|(_, c)| c).collect(),
            )
        })
        .collect())
}

pub fn recipe_out(conn: &mut SqliteConnection, recipe: Recipe) -> QueryResult<RecipeOut> {
    with_relations(conn, vec![recipe])?
        .pop()
        .ok_or(diesel::result::Error::NotFound)
}
