// src/products/product_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::shared::shared_structs::FieldUpdate;

/// Status stored on every newly created product.
pub const ACTIVE_STATUS: &str = "true";

/// A product row joined with the name of its category.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: i32,
    pub status: String,
    pub category_id: i32,
    pub category_name: String,
}

/// Data for inserting a product; the id is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: i32,
    pub status: String,
    pub category_id: i32,
}

/// Wire representation of a product. Every field is optional on input;
/// read responses fill all of them, including the denormalized `categoryName`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i32>,
    pub status: Option<String>,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
}

/// Body of `PUT /products`. Keys left out of the JSON are not touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub id: Option<i32>,
    #[serde(default)]
    pub name: FieldUpdate<String>,
    #[serde(default)]
    pub description: FieldUpdate<String>,
    #[serde(default)]
    pub price: FieldUpdate<i32>,
    #[serde(default)]
    pub status: FieldUpdate<String>,
    #[serde(default)]
    pub category_id: FieldUpdate<i32>,
}

/// Query string of `GET /products`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub category_id: Option<i32>,
}
