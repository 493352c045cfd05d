// src/categories/mod.rs

// Category entity
pub mod category_structs;
// Storage accessors for categories and their products
pub mod category_repository;
