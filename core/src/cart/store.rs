// src/cart/store.rs

//! The cart store: sole authority over cart contents.
//!
//! Every mutation follows the same discipline: read the full cart, apply the
//! change, overwrite the full blob. There is no partial update and no
//! transactional rollback; concurrent writers race and the last write wins,
//! which is acceptable for a single-user local cart.

use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::cart::item::{CartLineItem, Product};
use crate::checkout;
use crate::error::{CartError, CartResult};
use crate::storage::{schema, StorageBackend};

/// Fixed persistence key: a single cart per storage backend.
pub const DEFAULT_CART_KEY: &str = "shopping_cart";

/// Storage-backed cart store.
///
/// Constructed with a [`StorageBackend`], or [`detached`](Self::detached)
/// when the execution context has no persistence capability; a detached
/// store reads as empty and accepts writes as no-ops.
pub struct CartStore {
  backend: Option<Arc<dyn StorageBackend>>,
  key: String,
}

impl CartStore {
  pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
    Self::with_key(backend, DEFAULT_CART_KEY)
  }

  pub fn with_key(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
    Self {
      backend: Some(backend),
      key: key.into(),
    }
  }

  /// A store for execution contexts without any persistence backend.
  pub fn detached() -> Self {
    Self {
      backend: None,
      key: DEFAULT_CART_KEY.to_string(),
    }
  }

  pub fn is_persistent(&self) -> bool {
    self.backend.is_some()
  }

  /// Returns the current cart contents in insertion order.
  ///
  /// Never fails: a missing backend, an absent value, a failed read or a
  /// payload rejected by the schema all degrade to an empty cart. Corrupt
  /// data is logged and discarded rather than surfaced, and the user recovers
  /// by re-adding items.
  pub fn cart(&self) -> Vec<CartLineItem> {
    let Some(backend) = &self.backend else {
      return Vec::new();
    };
    match backend.load(&self.key) {
      Ok(Some(raw)) => match schema::decode(&raw) {
        Ok(items) => items,
        Err(e) => {
          warn!(error = %e, "persisted cart rejected; starting from an empty cart");
          Vec::new()
        }
      },
      Ok(None) => Vec::new(),
      Err(e) => {
        warn!(error = %e, "cart storage read failed; treating cart as empty");
        Vec::new()
      }
    }
  }

  /// Overwrites the persisted cart with `items`.
  pub fn save(&self, items: &[CartLineItem]) -> CartResult<()> {
    let Some(backend) = &self.backend else {
      debug!("no storage backend; dropping cart write");
      return Ok(());
    };
    let raw = schema::encode(items)?;
    backend
      .store(&self.key, &raw)
      .map_err(|source| CartError::Storage { source })
  }

  /// Adds `quantity` of `product` to the cart.
  ///
  /// Line items are keyed by product id: adding a product already in the
  /// cart increments its quantity instead of duplicating the row. New rows
  /// snapshot the product's display fields and get a fresh random id.
  ///
  /// Quantities are not clamped against stock at this layer; the context
  /// adapter owns bounds enforcement. Returns the affected line item.
  pub fn add_item(&self, product: &Product, quantity: u32) -> CartResult<CartLineItem> {
    if quantity == 0 {
      return Err(CartError::InvalidQuantity { quantity });
    }

    let mut items = self.cart();
    let line = match items.iter_mut().find(|i| i.product_id == product.id) {
      Some(existing) => {
        existing.quantity += quantity;
        debug!(
          product_id = product.id,
          quantity = existing.quantity,
          "merged into existing cart line"
        );
        existing.clone()
      }
      None => {
        let line = CartLineItem::from_product(product, quantity);
        debug!(product_id = product.id, item_id = %line.id, "appended new cart line");
        items.push(line.clone());
        line
      }
    };
    self.save(&items)?;
    Ok(line)
  }

  /// Overwrites the quantity of the line item with `item_id`.
  ///
  /// The overwrite is unconditional; callers that need the
  /// `[1, stock_at_add]` bound go through the context adapter. Unknown ids
  /// are a silent no-op, matching remove semantics.
  pub fn update_quantity(&self, item_id: Uuid, quantity: u32) -> CartResult<()> {
    let mut items = self.cart();
    let Some(item) = items.iter_mut().find(|i| i.id == item_id) else {
      debug!(%item_id, "update_quantity: no such line item; ignoring");
      return Ok(());
    };
    item.quantity = quantity;
    self.save(&items)
  }

  /// Removes the line item with `item_id`; unknown ids are a no-op.
  pub fn remove_item(&self, item_id: Uuid) -> CartResult<()> {
    let items = self.cart();
    let remaining: Vec<CartLineItem> = items.into_iter().filter(|i| i.id != item_id).collect();
    self.save(&remaining)
  }

  /// Persists an empty cart.
  pub fn clear(&self) -> CartResult<()> {
    self.save(&[])
  }

  /// Sum of `unit_price * quantity` over all line items; 0 for an empty cart.
  pub fn total(&self) -> u64 {
    self.cart().iter().map(CartLineItem::subtotal).sum()
  }

  /// Renders the current contents as the WhatsApp order summary.
  pub fn checkout_message(&self) -> String {
    let items = self.cart();
    let total = items.iter().map(CartLineItem::subtotal).sum();
    checkout::order_message(&items, total)
  }
}
