// src/products/product_mapper.rs

use super::product_structs::{NewProduct, Product, ProductDto, ProductUpdate, ACTIVE_STATUS};
use crate::categories::category_structs::Category;

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            name: Some(product.name),
            description: product.description,
            price: Some(product.price),
            status: Some(product.status),
            category_id: Some(product.category_id),
            category_name: Some(product.category_name),
        }
    }
}

/// Builds the row to insert from a create request.
///
/// The incoming `id`, `status` and `categoryName` are ignored: identity is
/// assigned by the database, status is forced active and the category comes
/// from the resolved `category`. Returns `None` when `name` or `price` is missing.
pub fn to_new_product(dto: ProductDto, category: &Category) -> Option<NewProduct> {
    Some(NewProduct {
        name: dto.name?,
        description: dto.description,
        price: dto.price?,
        status: ACTIVE_STATUS.to_string(),
        category_id: category.id,
    })
}

/// Copies the scalar fields present in `update` onto `product`.
/// The category is handled by the caller, which has to resolve it first.
pub fn apply_update(product: &mut Product, update: &ProductUpdate) {
    if let Some(name) = update.name.clone().into_value() {
        product.name = name;
    }
    update.description.clone().apply_to(&mut product.description);
    if let Some(price) = update.price.clone().into_value() {
        product.price = price;
    }
    if let Some(status) = update.status.clone().into_value() {
        product.status = status;
    }
}

/// Points `product` at `category`, keeping the denormalized name in step.
pub fn assign_category(product: &mut Product, category: Category) {
    product.category_id = category.id;
    product.category_name = category.name;
}
