// src/shared/mod.rs

// Response envelope and the partial-update field type
pub mod shared_structs;
// Error taxonomy shared by every service and its HTTP translation
pub mod service_error;
// Application configuration (file + environment)
pub mod config;
// Liveness route
pub mod health_router;
