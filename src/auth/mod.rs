// src/auth/mod.rs

// JWT claims and the caller context built from them
pub mod auth_structs;
// Extractor that validates the bearer token on protected routes
pub mod auth_middleware;
// Central admin authorization decision
pub mod authorization;
