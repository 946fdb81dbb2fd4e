// demos/storefront_app/src/models/mod.rs

//! Data structures mirroring the backend API's JSON payloads.

// Declare child modules for each model
pub mod product;
pub mod user;

// Re-export the model structs for convenient access
pub use product::{Category, CreateProductRequest, Product, ProductGallery};
pub use user::{LoginRequest, LoginResponse, User};
