//! Many-to-many link management between recipes and ingredients/categories.
//!
//! Changing a recipe's links is a set reconciliation: `reconcile` computes
//! which foreign ids to add and which to remove, and the `sync_*` functions
//! apply that difference to the join table.

use crate::db::BIND_CHUNK;
use crate::models::{NewRecipeCategory, NewRecipeIngredient};
use crate::schema::{category, ingredient, recipe_categories, recipe_ingredients};
use diesel::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LinkDiff {
    pub added: Vec<i32>,
    pub removed: Vec<i32>,
}

/// Both outputs are sorted and free of duplicates.
pub fn reconcile(current: &[i32], desired: &[i32]) -> LinkDiff {
    let current: BTreeSet<i32> = current.iter().copied().collect();
    let desired: BTreeSet<i32> = desired.iter().copied().collect();

    LinkDiff {
        added: desired.difference(&current).copied().collect(),
        removed: current.difference(&desired).copied().collect(),
    }
}

/// Returns the subset of `ids` that name existing ingredients. Unknown ids
/// are dropped without error.
pub fn resolve_ingredient_ids(conn: &mut SqliteConnection, ids: &[i32]) -> QueryResult<Vec<i32>> {
    let mut found: Vec<i32> = Vec::with_capacity(ids.len());
    for chunk in ids.chunks(BIND_CHUNK) {
        found.extend(
            ingredient::table
                .filter(ingredient::id.eq_any(chunk))
                .select(ingredient::id)
                .load::<i32>(conn)?,
        );
    }
    found.sort_unstable();
    found.dedup();
    Ok(found)
}

/// Returns the subset of `ids` that name existing categories.
pub fn resolve_category_ids(conn: &mut SqliteConnection, ids: &[i32]) -> QueryResult<Vec<i32>> {
    let mut found: Vec<i32> = Vec::with_capacity(ids.len());
    for chunk in ids.chunks(BIND_CHUNK) {
        found.extend(
            category::table
                .filter(category::id.eq_any(chunk))
                .select(category::id)
                .load::<i32>(conn)?,
        );
    }
    found.sort_unstable();
    found.dedup();
    Ok(found)
}

pub fn sync_ingredients(
    conn: &mut SqliteConnection,
    recipe_id: i32,
    desired: &[i32],
) -> QueryResult<LinkDiff> {
    let current: Vec<i32> = recipe_ingredients::table
        .filter(recipe_ingredients::recipe_id.eq(recipe_id))
        .select(recipe_ingredients::ingredient_id)
        .load(conn)?;

    let diff = reconcile(&current, desired);

    for chunk in diff.removed.chunks(BIND_CHUNK) {
        diesel::delete(
            recipe_ingredients::table
                .filter(recipe_ingredients::recipe_id.eq(recipe_id))
                .filter(recipe_ingredients::ingredient_id.eq_any(chunk)),
        )
        .execute(conn)?;
    }

    if !diff.added.is_empty() {
        let rows: Vec<NewRecipeIngredient> = diff
            .added
            .iter()
            .map(|&ingredient_id| NewRecipeIngredient {
                recipe_id,
                ingredient_id,
            })
            .collect();
        for chunk in rows.chunks(BIND_CHUNK) {
            diesel::insert_into(recipe_ingredients::table)
                .values(chunk)
                .execute(conn)?;
        }
    }

    Ok(diff)
}

pub fn sync_categories(
    conn: &mut SqliteConnection,
    recipe_id: i32,
    desired: &[i32],
) -> QueryResult<LinkDiff> {
    let current: Vec<i32> = recipe_categories::table
        .filter(recipe_categories::recipe_id.eq(recipe_id))
        .select(recipe_categories::category_id)
        .load(conn)?;

    let diff = reconcile(&current, desired);

    for chunk in diff.removed.chunks(BIND_CHUNK) {
        diesel::delete(
            recipe_categories::table
                .filter(recipe_categories::recipe_id.eq(recipe_id))
                .filter(recipe_categories::category_id.eq_any(chunk)),
        )
        .execute(conn)?;
    }

    if !diff.added.is_empty() {
        let rows: Vec<NewRecipeCategory> = diff
            .added
            .iter()
            .map(|&category_id| NewRecipeCategory {
                recipe_id,
                category_id,
            })
            .collect();
        for chunk in rows.chunks(BIND_CHUNK) {
            diesel::insert_into(recipe_categories::table)
                .values(chunk)
                .execute(conn)?;
        }
    }

    Ok(diff)
}

/// Removes every join row that points at `recipe_id`. Returns the number of
/// rows deleted across both join tables.
pub fn clear_links(conn: &mut SqliteConnection, recipe_id: i32) -> QueryResult<usize> {
    let ingredients = diesel::delete(
        recipe_ingredients::table.filter(recipe_ingredients::recipe_id.eq(recipe_id)),
    )
    .execute(conn)?;
    let categories = diesel::delete(
        recipe_categories::table.filter(recipe_categories::recipe_id.eq(recipe_id)),
    )
    .execute(conn)?;
    Ok(ingredients + categories)
}
