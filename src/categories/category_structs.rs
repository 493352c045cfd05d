// src/categories/category_structs.rs

use sqlx::FromRow;

/// A category row. Products reference it through `product.category_id`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// Data for inserting a category; the id is assigned by the database.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
}
