// src/products/product_repository.rs

use async_trait::async_trait;
use sqlx::{query, query_as, PgPool, Row};

use super::product_structs::{NewProduct, Product};
use crate::shared::service_error::RepoResult;

/// Product columns joined with the owning category's name.
pub(crate) const SELECT_PRODUCT: &str = "SELECT p.id, p.name, p.description, p.price, p.status, \
     p.category_id, c.name AS category_name \
     FROM product p JOIN category c ON c.id = p.category_id";

/// Storage accessors over `product`. A miss is `Ok(None)` / `Ok(false)`,
/// never an error.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Product>>;
    async fn find_all(&self) -> RepoResult<Vec<Product>>;
    async fn exists_by_id(&self, id: i32) -> RepoResult<bool>;
    /// Inserts a new row and returns the id assigned by the database.
    async fn insert(&self, product: &NewProduct) -> RepoResult<i32>;
    /// Overwrites the stored row with `product`; `false` when the row is gone.
    async fn update(&self, product: &Product) -> RepoResult<bool>;
    async fn delete_by_id(&self, id: i32) -> RepoResult<()>;
}

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Product>> {
        let sql = format!("{} WHERE p.id = $1", SELECT_PRODUCT);
        query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_all(&self) -> RepoResult<Vec<Product>> {
        query_as::<_, Product>(SELECT_PRODUCT)
            .fetch_all(&self.pool)
            .await
    }

    async fn exists_by_id(&self, id: i32) -> RepoResult<bool> {
        let row = query("SELECT EXISTS(SELECT 1 FROM product WHERE id = $1) AS present")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        row.try_get::<bool, &str>("present")
    }

    async fn insert(&self, product: &NewProduct) -> RepoResult<i32> {
        let row = query(
            "INSERT INTO product (name, description, price, status, category_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.status)
        .bind(product.category_id)
        .fetch_one(&self.pool)
        .await?;

        row.try_get::<i32, &str>("id")
    }

    async fn update(&self, product: &Product) -> RepoResult<bool> {
        let result = query(
            "UPDATE product SET name = $1, description = $2, price = $3, status = $4, \
             category_id = $5 WHERE id = $6",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.status)
        .bind(product.category_id)
        .bind(product.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn delete_by_id(&self, id: i32) -> RepoResult<()> {
        query("DELETE FROM product WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
