#![allow(dead_code)]

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cafe_backoffice::auth::auth_structs::CallerContext;
use cafe_backoffice::categories::category_repository::CategoryRepository;
use cafe_backoffice::categories::category_structs::{Category, NewCategory};
use cafe_backoffice::products::product_repository::ProductRepository;
use cafe_backoffice::products::product_service::ProductService;
use cafe_backoffice::products::product_structs::{NewProduct, Product};
use cafe_backoffice::shared::service_error::RepoResult;

/// Category and product tables kept in memory. Implements both repository
/// traits so that category lookups see the products inserted through the
/// product repository.
pub struct InMemoryStore {
    pub categories: Mutex<Vec<Category>>,
    pub products: Mutex<Vec<Product>>,
    next_id: AtomicI32,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            categories: Mutex::new(Vec::new()),
            products: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(100),
        }
    }
}

impl InMemoryStore {
    pub fn with_categories(categories: &[(i32, &str)]) -> Arc<Self> {
        let store = Self::default();
        store.categories.lock().expect("categories mutex poisoned").extend(
            categories.iter().map(|(id, name)| Category {
                id: *id,
                name: name.to_string(),
            }),
        );
        Arc::new(store)
    }

    pub fn product(&self, id: i32) -> Option<Product> {
        self.products
            .lock()
            .expect("products mutex poisoned")
            .iter()
            .find(|product| product.id == id)
            .cloned()
    }

    pub fn product_count(&self) -> usize {
        self.products.lock().expect("products mutex poisoned").len()
    }

    fn category_name(&self, id: i32) -> Option<String> {
        self.categories
            .lock()
            .expect("categories mutex poisoned")
            .iter()
            .find(|category| category.id == id)
            .map(|category| category.name.clone())
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Product>> {
        Ok(self.product(id))
    }

    async fn find_all(&self) -> RepoResult<Vec<Product>> {
        Ok(self.products.lock().expect("products mutex poisoned").clone())
    }

    async fn exists_by_id(&self, id: i32) -> RepoResult<bool> {
        Ok(self.product(id).is_some())
    }

    async fn insert(&self, product: &NewProduct) -> RepoResult<i32> {
        let category_name = self
            .category_name(product.category_id)
            .ok_or_else(|| sqlx::Error::Protocol("foreign key violation".to_string()))?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);

        self.products
            .lock()
            .expect("products mutex poisoned")
            .push(Product {
                id,
                name: product.name.clone(),
                description: product.description.clone(),
                price: product.price,
                status: product.status.clone(),
                category_id: product.category_id,
                category_name,
            });
        Ok(id)
    }

    async fn update(&self, product: &Product) -> RepoResult<bool> {
        let mut products = self.products.lock().expect("products mutex poisoned");
        match products.iter_mut().find(|existing| existing.id == product.id) {
            Some(existing) => {
                *existing = product.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: i32) -> RepoResult<()> {
        self.products
            .lock()
            .expect("products mutex poisoned")
            .retain(|product| product.id != id);
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Category>> {
        Ok(self.category_name(id).map(|name| Category { id, name }))
    }

    async fn find_all(&self) -> RepoResult<Vec<Category>> {
        Ok(self.categories.lock().expect("categories mutex poisoned").clone())
    }

    async fn exists_by_id(&self, id: i32) -> RepoResult<bool> {
        Ok(self.category_name(id).is_some())
    }

    async fn save(&self, category: &NewCategory) -> RepoResult<Category> {
        let saved = Category {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: category.name.clone(),
        };
        self.categories
            .lock()
            .expect("categories mutex poisoned")
            .push(saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i32) -> RepoResult<()> {
        self.categories
            .lock()
            .expect("categories mutex poisoned")
            .retain(|category| category.id != id);
        Ok(())
    }

    async fn find_products(&self, category_id: i32) -> RepoResult<Vec<Product>> {
        Ok(self
            .products
            .lock()
            .expect("products mutex poisoned")
            .iter()
            .filter(|product| product.category_id == category_id)
            .cloned()
            .collect())
    }
}

/// Repository whose every call fails as if the pool were exhausted.
pub struct FailingStore;

#[async_trait]
impl ProductRepository for FailingStore {
    async fn find_by_id(&self, _id: i32) -> RepoResult<Option<Product>> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_all(&self) -> RepoResult<Vec<Product>> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn exists_by_id(&self, _id: i32) -> RepoResult<bool> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn insert(&self, _product: &NewProduct) -> RepoResult<i32> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn update(&self, _product: &Product) -> RepoResult<bool> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn delete_by_id(&self, _id: i32) -> RepoResult<()> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

#[async_trait]
impl CategoryRepository for FailingStore {
    async fn find_by_id(&self, _id: i32) -> RepoResult<Option<Category>> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_all(&self) -> RepoResult<Vec<Category>> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn exists_by_id(&self, _id: i32) -> RepoResult<bool> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn save(&self, _category: &NewCategory) -> RepoResult<Category> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn delete_by_id(&self, _id: i32) -> RepoResult<()> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_products(&self, _category_id: i32) -> RepoResult<Vec<Product>> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

pub fn service_over(store: Arc<InMemoryStore>) -> ProductService {
    ProductService::new(store.clone(), store)
}

pub fn failing_service() -> ProductService {
    let store = Arc::new(FailingStore);
    ProductService::new(store.clone(), store)
}

pub fn admin() -> CallerContext {
    CallerContext::new("owner@cafe.test", "admin")
}

pub fn customer() -> CallerContext {
    CallerContext::new("guest@cafe.test", "user")
}
