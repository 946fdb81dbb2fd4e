// demos/storefront_app/src/models/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
  pub id: u64,
  pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductGallery {
  pub id: u64,
  pub product_id: u64,
  pub photo_url: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// A catalog product as served by the backend. Photo URLs come from the
/// external upload provider and are treated as opaque strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
  pub id: u64,
  pub category_id: u64,
  pub name: String,
  pub description: String,
  pub price: u64,
  pub stock: u32,
  pub main_photo_url: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub instagram_link: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  pub category: Category,
  #[serde(default)]
  pub galleries: Vec<ProductGallery>,
}

impl Product {
  /// The denormalized slice the cart snapshots at add time.
  pub fn cart_snapshot(&self) -> crafthaven_cart::Product {
    crafthaven_cart::Product {
      id: self.id,
      name: self.name.clone(),
      price: self.price,
      stock: self.stock,
      main_photo_url: self.main_photo_url.clone(),
      category_name: self.category.name.clone(),
    }
  }
}

/// Payload for creating or updating a product.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProductRequest {
  pub category_id: u64,
  pub name: String,
  pub description: String,
  pub price: u64,
  pub stock: u32,
  pub main_photo_url: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub instagram_link: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gallery_photos: Option<Vec<String>>,
}
