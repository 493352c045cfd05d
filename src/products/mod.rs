// src/products/mod.rs

// Entity, wire DTO and partial-update shapes
pub mod product_structs;
// Pure entity <-> DTO conversion
pub mod product_mapper;
// Storage accessors over `product`
pub mod product_repository;
// Business rules for the product resource
pub mod product_service;
// HTTP routes
pub mod product_router;
