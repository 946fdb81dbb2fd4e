// demos/storefront_app/src/api/mod.rs

//! Client for the backend REST API. The storefront consumes these endpoints;
//! it does not own them.

pub mod auth;
pub mod client;
pub mod products;

pub use client::ApiClient;
