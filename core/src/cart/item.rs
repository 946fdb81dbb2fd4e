// src/cart/item.rs

//! Cart line items and the catalog snapshot they are built from.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The slice of a catalog product the cart cares about.
///
/// Prices are whole rupiah; the shop does not use decimal amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
  pub id: u64,
  pub name: String,
  pub price: u64,
  pub stock: u32,
  pub main_photo_url: String,
  pub category_name: String,
}

/// One entry in the cart.
///
/// `name`, `unit_price`, `main_photo_url` and `category_name` are a
/// denormalized snapshot captured when the item was added; they are never
/// re-synced with later catalog changes, and the cart stays valid even if the
/// product disappears from the catalog. `stock_at_add` is likewise a snapshot
/// and only serves as the local upper bound for quantity edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
  /// Identity of this cart row, distinct from `product_id`.
  pub id: Uuid,
  pub product_id: u64,
  pub name: String,
  pub unit_price: u64,
  pub quantity: u32,
  pub main_photo_url: String,
  pub category_name: String,
  pub stock_at_add: u32,
}

impl CartLineItem {
  /// Builds a fresh line item snapshotting `product`, with a random id.
  pub fn from_product(product: &Product, quantity: u32) -> Self {
    Self {
      id: Uuid::new_v4(),
      product_id: product.id,
      name: product.name.clone(),
      unit_price: product.price,
      quantity,
      main_photo_url: product.main_photo_url.clone(),
      category_name: product.category_name.clone(),
      stock_at_add: product.stock,
    }
  }

  pub fn subtotal(&self) -> u64 {
    self.unit_price * u64::from(self.quantity)
  }
}
