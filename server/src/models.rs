use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::recipe)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Recipe {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub steps: String,
    pub cooking_time: i32,
    pub author_id: Option<i32>,
    pub image: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipe)]
pub struct NewRecipe<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub steps: &'a str,
    pub cooking_time: i32,
    pub author_id: Option<i32>,
    pub image: Option<&'a str>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::ingredient)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::ingredient)]
pub struct NewIngredient<'a> {
    pub name: &'a str,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::category)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::category)]
pub struct NewCategory<'a> {
    pub name: &'a str,
}

// Join rows carry only the two foreign keys.

#[derive(Queryable, Selectable, Identifiable, Associations, Debug)]
#[diesel(belongs_to(Recipe))]
#[diesel(belongs_to(Ingredient))]
#[diesel(table_name = crate::schema::recipe_ingredients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[allow(dead_code)]
pub struct RecipeIngredient {
    pub id: i32,
    pub recipe_id: i32,
    pub ingredient_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
pub struct NewRecipeIngredient {
    pub recipe_id: i32,
    pub ingredient_id: i32,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug)]
#[diesel(belongs_to(Recipe))]
#[diesel(belongs_to(Category))]
#[diesel(table_name = crate::schema::recipe_categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[allow(dead_code)]
pub struct RecipeCategory {
    pub id: i32,
    pub recipe_id: i32,
    pub category_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipe_categories)]
pub struct NewRecipeCategory {
    pub recipe_id: i32,
    pub category_id: i32,
}
