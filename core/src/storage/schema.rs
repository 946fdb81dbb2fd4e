// src/storage/schema.rs

//! Versioned wire format for the persisted cart blob.
//!
//! Carts are stored as a JSON envelope `{"version": 1, "items": [...]}` so
//! that future layout changes can be detected instead of deserialized
//! blindly. Two shapes are accepted on read:
//!  - the current envelope, version 1;
//!  - a bare JSON array in the legacy layout (timestamp ids, `price` and
//!    `stock` field names), which is migrated in place with fresh row ids.
//!
//! Anything else is rejected; the store maps a rejection to an empty cart.

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::cart::item::CartLineItem;
use crate::error::{CartError, CartResult};

/// Current version of the persisted envelope.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct PersistedCart {
  version: u32,
  items: Vec<CartLineItem>,
}

/// Legacy row shape: numeric wall-clock ids and the original field names.
#[derive(Debug, Deserialize)]
struct LegacyLineItem {
  #[allow(dead_code)]
  id: u64,
  product_id: u64,
  name: String,
  price: u64,
  quantity: u32,
  main_photo_url: String,
  category_name: String,
  stock: u32,
}

impl From<LegacyLineItem> for CartLineItem {
  fn from(legacy: LegacyLineItem) -> Self {
    // Legacy ids were wall-clock timestamps with a collision risk; migration
    // reassigns collision-free ids.
    CartLineItem {
      id: Uuid::new_v4(),
      product_id: legacy.product_id,
      name: legacy.name,
      unit_price: legacy.price,
      quantity: legacy.quantity,
      main_photo_url: legacy.main_photo_url,
      category_name: legacy.category_name,
      stock_at_add: legacy.stock,
    }
  }
}

/// Serializes `items` into the current envelope.
pub fn encode(items: &[CartLineItem]) -> CartResult<String> {
  let envelope = PersistedCart {
    version: SCHEMA_VERSION,
    items: items.to_vec(),
  };
  serde_json::to_string(&envelope).map_err(|e| CartError::Schema {
    reason: format!("failed to serialize cart envelope: {}", e),
  })
}

/// Deserializes and validates a persisted blob.
///
/// Returns the validated line items, or a [`CartError::Schema`] when the
/// payload matches neither the current envelope nor the legacy array.
pub fn decode(raw: &str) -> CartResult<Vec<CartLineItem>> {
  if let Ok(envelope) = serde_json::from_str::<PersistedCart>(raw) {
    if envelope.version != SCHEMA_VERSION {
      return Err(CartError::Schema {
        reason: format!(
          "unsupported cart schema version {} (current is {})",
          envelope.version, SCHEMA_VERSION
        ),
      });
    }
    return Ok(sanitize(envelope.items));
  }

  if let Ok(legacy_items) = serde_json::from_str::<Vec<LegacyLineItem>>(raw) {
    warn!(
      item_count = legacy_items.len(),
      "migrating legacy cart layout to schema version {}", SCHEMA_VERSION
    );
    return Ok(sanitize(legacy_items.into_iter().map(CartLineItem::from).collect()));
  }

  Err(CartError::Schema {
    reason: "payload is neither a versioned cart envelope nor a legacy cart array".to_string(),
  })
}

/// Drops rows that violate the line item invariants (quantity >= 1).
fn sanitize(items: Vec<CartLineItem>) -> Vec<CartLineItem> {
  items
    .into_iter()
    .filter(|item| {
      if item.quantity == 0 {
        warn!(item_id = %item.id, product_id = item.product_id, "dropping persisted line item with zero quantity");
        return false;
      }
      true
    })
    .collect()
}
