// src/lib.rs

//! CraftHaven cart: the client-side shopping cart behind the CraftHaven
//! storefront.
//!
//! The crate is built around three pieces:
//!  - A [`CartStore`] that owns the cart contents and funnels every read and
//!    write through an injected [`StorageBackend`] capability. A store with
//!    no backend degrades to an empty, non-persistent cart.
//!  - A [`CartContext`] adapter that holds the single authoritative store
//!    instance and publishes the cart as subscribable state. Cheap
//!    [`CartHandle`]s fan out to the UI; a handle that outlives its context
//!    fails fast instead of returning defaults.
//!  - A pure checkout formatter that renders the cart into an
//!    Indonesian-locale order summary and percent-encodes it into WhatsApp
//!    deep links.
//!
//! Persisted carts are a versioned JSON envelope; reads validate the payload
//! and fall back to an empty cart instead of crashing on corrupt data.

// Declare modules according to the planned structure
pub mod cart;
pub mod checkout;
pub mod context;
pub mod error;
pub mod storage;

// --- Re-exports for the Public API ---

// Core types that users will interact with frequently
pub use crate::cart::item::{CartLineItem, Product};
pub use crate::cart::store::{CartStore, DEFAULT_CART_KEY};

// Checkout formatting and deep links
pub use crate::checkout::{checkout_links, format_rupiah, order_message, CheckoutLinks};

// The context adapter and its handle type
pub use crate::context::{
  CartContext, CartHandle, CheckoutConfig, CheckoutPresenter, CheckoutRequest, SubscriptionId,
};

pub use crate::error::{CartError, CartResult};

// The persistence capability and the bundled in-memory backend
pub use crate::storage::{MemoryStorage, StorageBackend};
