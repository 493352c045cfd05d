// src/categories/category_repository.rs

use async_trait::async_trait;
use sqlx::{query, query_as, PgPool, Row};

use super::category_structs::{Category, NewCategory};
use crate::products::product_repository::SELECT_PRODUCT;
use crate::products::product_structs::Product;
use crate::shared::service_error::RepoResult;

/// Storage accessors over `category`. A miss is `Ok(None)` / `Ok(false)`,
/// never an error.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Category>>;
    async fn find_all(&self) -> RepoResult<Vec<Category>>;
    async fn exists_by_id(&self, id: i32) -> RepoResult<bool>;
    async fn save(&self, category: &NewCategory) -> RepoResult<Category>;
    async fn delete_by_id(&self, id: i32) -> RepoResult<()>;
    /// Products owned by the category, in storage order.
    async fn find_products(&self, category_id: i32) -> RepoResult<Vec<Product>>;
}

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Category>> {
        query_as::<_, Category>("SELECT id, name FROM category WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_all(&self) -> RepoResult<Vec<Category>> {
        query_as::<_, Category>("SELECT id, name FROM category")
            .fetch_all(&self.pool)
            .await
    }

    async fn exists_by_id(&self, id: i32) -> RepoResult<bool> {
        let row = query("SELECT EXISTS(SELECT 1 FROM category WHERE id = $1) AS present")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        row.try_get::<bool, &str>("present")
    }

    async fn save(&self, category: &NewCategory) -> RepoResult<Category> {
        query_as::<_, Category>("INSERT INTO category (name) VALUES ($1) RETURNING id, name")
            .bind(&category.name)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_by_id(&self, id: i32) -> RepoResult<()> {
        query("DELETE FROM category WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_products(&self, category_id: i32) -> RepoResult<Vec<Product>> {
        let sql = format!("{} WHERE p.category_id = $1", SELECT_PRODUCT);
        query_as::<_, Product>(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
    }
}
