// src/products/product_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse, ResponseError};

use super::product_structs::{ProductDto, ProductQuery, ProductUpdate};
use crate::auth::auth_structs::CallerContext;
use crate::shared::shared_structs::MessageResponse;
use crate::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_products)
        .service(get_product)
        .service(create_product)
        .service(update_product)
        .service(delete_product);
}

/// Lists every product, or only those of one category with `?categoryId=N`.
///
/// Once the query string parses, failures keep the response shape: the body
/// is always a JSON array, empty when the category is unknown or storage failed.
/// A malformed `categoryId` gets the 400 message envelope.
#[get("/products")]
pub async fn list_products(
    data: web::Data<AppState>,
    query: web::Query<ProductQuery>,
) -> HttpResponse {
    let (operation, result) = match query.category_id {
        Some(category_id) => (
            "find_by_category_id",
            data.product_service.find_by_category_id(category_id).await,
        ),
        None => ("find_all", data.product_service.find_all().await),
    };

    match result {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(e) => {
            e.log(operation);
            HttpResponse::build(e.status()).json(Vec::<ProductDto>::new())
        }
    }
}

/// Fetches one product. Misses and failures carry no body.
#[get("/products/{id}")]
pub async fn get_product(data: web::Data<AppState>, path: web::Path<i32>) -> HttpResponse {
    let id = path.into_inner();
    match data.product_service.find_by_id(id).await {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(e) => {
            e.log("find_by_id");
            HttpResponse::build(e.status()).finish()
        }
    }
}

/// Creates a product from the JSON body (`name`, `price`, `categoryId`,
/// optional `description`). Admin only.
///
/// Answers 201 with the assigned id in the message envelope; 401 for
/// non-admins, 404 for an unknown category, 400 when a field is missing.
#[post("/products")]
pub async fn create_product(
    data: web::Data<AppState>,
    caller: CallerContext,
    item: web::Json<ProductDto>,
) -> HttpResponse {
    match data.product_service.create(&caller, item.into_inner()).await {
        Ok(id) => HttpResponse::Created().json(MessageResponse::new(format!(
            "Product Added Successfully: [id:{}]",
            id
        ))),
        Err(e) => {
            e.log("create");
            e.error_response()
        }
    }
}

/// Partial update; the product id travels in the body.
#[put("/products")]
pub async fn update_product(
    data: web::Data<AppState>,
    caller: CallerContext,
    item: web::Json<ProductUpdate>,
) -> HttpResponse {
    match data.product_service.update(&caller, item.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Product Updated Successfully")),
        Err(e) => {
            e.log("update");
            e.error_response()
        }
    }
}

/// Hard-deletes the product with the id from the path. Admin only.
///
/// Answers 200 on success and 400 when the id does not exist.
#[delete("/products/{id}")]
pub async fn delete_product(
    data: web::Data<AppState>,
    caller: CallerContext,
    path: web::Path<i32>,
) -> HttpResponse {
    match data.product_service.delete(&caller, path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Product Deleted Successfully")),
        Err(e) => {
            e.log("delete");
            e.error_response()
        }
    }
}
