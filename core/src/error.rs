// src/error.rs

use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
  /// The storage backend failed to read or write the cart blob.
  #[error("Cart storage operation failed. Source: {source}")]
  Storage {
    #[source]
    source: AnyhowError,
  },

  /// The persisted cart payload did not match any accepted schema.
  /// Reads never surface this: the store degrades to an empty cart instead.
  #[error("Persisted cart payload rejected: {reason}")]
  Schema { reason: String },

  /// A handle was used after its owning `CartContext` was dropped.
  /// Published cart state is only valid inside the provider's scope.
  #[error("Cart context is gone; handles must not outlive their provider")]
  ProviderGone,

  #[error("Quantity must be at least 1 (got {quantity})")]
  InvalidQuantity { quantity: u32 },

  #[error("Cart is empty; nothing to check out")]
  EmptyCart,

  /// The destination WhatsApp number is not configured.
  #[error("Checkout destination phone number is not configured")]
  PhoneMissing,
}

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;
