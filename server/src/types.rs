//! Request and response shapes, kept separate from the diesel entities.
//!
//! Each entity has a create shape (what a client may send) and an out shape
//! (what the server returns). Create shapes are checked with `validate()`
//! before any connection is taken from the pool.

use crate::models::{Category, Ingredient, Recipe};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const TITLE_MAX_CHARS: usize = 200;
pub const IMAGE_MAX_CHARS: usize = 100;
pub const NAME_MAX_CHARS: usize = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Blank { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must be a non-negative integer")]
    Negative { field: &'static str },
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank { field });
    }
    Ok(())
}

fn limit_chars(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

pub fn require_non_negative(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(())
}

/// Body of `POST /recipes/` and `PUT /recipes/{id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RecipeCreate {
    pub title: String,
    pub description: String,
    pub steps: String,
    /// Minutes
    pub cooking_time: i32,
    #[serde(default)]
    pub author_id: Option<i32>,
    #[serde(default)]
    pub image: Option<String>,
    /// Ids that do not match an existing ingredient are ignored.
    #[serde(default)]
    pub ingredient_ids: Vec<i32>,
    /// Ids that do not match an existing category are ignored.
    #[serde(default)]
    pub category_ids: Vec<i32>,
}

impl RecipeCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        limit_chars("title", &self.title, TITLE_MAX_CHARS)?;
        require_text("description", &self.description)?;
        require_text("steps", &self.steps)?;
        if let Some(ref image) = self.image {
            limit_chars("image", image, IMAGE_MAX_CHARS)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct RecipeOut {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub steps: String,
    pub cooking_time: i32,
    pub author_id: Option<i32>,
    pub image: Option<String>,
    pub ingredients: Vec<IngredientOut>,
    pub categories: Vec<CategoryOut>,
}

impl RecipeOut {
    pub fn new(recipe: Recipe, ingredients: Vec<Ingredient>, categories: Vec<Category>) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            description: recipe.description,
            steps: recipe.steps,
            cooking_time: recipe.cooking_time,
            author_id: recipe.author_id,
            image: recipe.image,
            ingredients: ingredients.into_iter().map(IngredientOut::from).collect(),
            categories: categories.into_iter().map(CategoryOut::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct IngredientCreate {
    pub name: String,
}

impl IngredientCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        limit_chars("name", &self.name, NAME_MAX_CHARS)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct IngredientOut {
    pub id: i32,
    pub name: String,
}

impl From<Ingredient> for IngredientOut {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CategoryCreate {
    pub name: String,
}

impl CategoryCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        limit_chars("name", &self.name, NAME_MAX_CHARS)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CategoryOut {
    pub id: i32,
    pub name: String,
}

impl From<Category> for CategoryOut {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}
