// src/products/product_service.rs

use std::sync::Arc;

use super::product_mapper::{apply_update, assign_category, to_new_product};
use super::product_repository::ProductRepository;
use super::product_structs::{ProductDto, ProductUpdate};
use crate::auth::auth_structs::CallerContext;
use crate::auth::authorization::require_admin;
use crate::categories::category_repository::CategoryRepository;
use crate::categories::category_structs::Category;
use crate::shared::service_error::{ServiceError, ServiceResult};

/// Product catalog operations. Mutations are admin-only, reads are open.
#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl ProductService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            products,
            categories,
        }
    }

    async fn resolve_category(&self, category_id: i32) -> ServiceResult<Category> {
        self.categories
            .find_by_id(category_id)
            .await?
            .ok_or(ServiceError::CategoryNotFound(category_id))
    }

    /// Creates a product and returns the id assigned to it.
    pub async fn create(&self, caller: &CallerContext, dto: ProductDto) -> ServiceResult<i32> {
        require_admin(caller)?;

        let category_id = dto.category_id.ok_or(ServiceError::InvalidData)?;
        if dto.name.is_none() || dto.price.is_none() {
            return Err(ServiceError::InvalidData);
        }

        let category = self.resolve_category(category_id).await?;
        let new_product = to_new_product(dto, &category).ok_or(ServiceError::InvalidData)?;
        let id = self.products.insert(&new_product).await?;

        tracing::info!(product_id = id, category_id, caller = %caller.subject, "product created");
        Ok(id)
    }

    pub async fn find_all(&self) -> ServiceResult<Vec<ProductDto>> {
        let products = self.products.find_all().await?;
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> ServiceResult<ProductDto> {
        self.products
            .find_by_id(id)
            .await?
            .map(ProductDto::from)
            .ok_or(ServiceError::ProductNotFound(id))
    }

    pub async fn find_by_category_id(&self, category_id: i32) -> ServiceResult<Vec<ProductDto>> {
        let category = self.resolve_category(category_id).await?;
        let products = self.categories.find_products(category.id).await?;
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    /// Applies the fields present in `update` to the stored product.
    /// Nothing is written when any lookup fails.
    pub async fn update(&self, caller: &CallerContext, update: ProductUpdate) -> ServiceResult<()> {
        require_admin(caller)?;

        let id = update.id.ok_or(ServiceError::InvalidData)?;
        let mut product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::ProductDoesNotExist(id))?;

        if let Some(category_id) = update.category_id.clone().into_value() {
            let category = self.resolve_category(category_id).await?;
            assign_category(&mut product, category);
        }
        apply_update(&mut product, &update);

        if !self.products.update(&product).await? {
            return Err(ServiceError::ProductDoesNotExist(id));
        }

        tracing::info!(product_id = id, caller = %caller.subject, "product updated");
        Ok(())
    }

    pub async fn delete(&self, caller: &CallerContext, id: i32) -> ServiceResult<()> {
        require_admin(caller)?;

        if !self.products.exists_by_id(id).await? {
            return Err(ServiceError::ProductDoesNotExist(id));
        }
        self.products.delete_by_id(id).await?;

        tracing::info!(product_id = id, caller = %caller.subject, "product deleted");
        Ok(())
    }
}
