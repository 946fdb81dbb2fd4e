// src/context.rs

//! The context adapter: bridges the [`CartStore`] to a reactive UI tree.
//!
//! A [`CartContext`] owns the single authoritative store instance for the
//! session and publishes the cart as shared state. UI components hold cheap
//! [`CartHandle`]s; after every mutation the adapter re-reads the full cart
//! from the store and republishes it to all subscribers (intentionally
//! non-incremental; it trades efficiency for correctness).
//!
//! IMPORTANT: a handle used after its `CartContext` has been dropped is a
//! programming error. Every operation on such a handle fails with
//! [`CartError::ProviderGone`] instead of silently returning a default.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tracing::{debug, info};
use uuid::Uuid;

use crate::cart::item::{CartLineItem, Product};
use crate::cart::store::CartStore;
use crate::checkout::{self, CheckoutLinks};
use crate::error::{CartError, CartResult};

/// Checkout destination configuration.
///
/// The phone number is optional at construction time; [`CartHandle::checkout`]
/// fails with [`CartError::PhoneMissing`] when it is absent or blank.
#[derive(Debug, Clone, Default)]
pub struct CheckoutConfig {
  pub phone_number: Option<String>,
}

impl CheckoutConfig {
  pub fn new(phone_number: impl Into<String>) -> Self {
    Self {
      phone_number: Some(phone_number.into()),
    }
  }

  /// No destination configured; checkout will fail loudly.
  pub fn unset() -> Self {
    Self::default()
  }
}

/// A prepared checkout, handed to the presenter and returned to the caller.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
  pub phone_number: String,
  /// The plain order summary, for copy-and-send-manually surfaces.
  pub message: String,
  pub links: CheckoutLinks,
}

/// The surface that shows a prepared checkout to the user: a dialog, an
/// opened external link, or anything else the embedding application does.
/// Presenting must not mutate the cart: the cart survives checkout until the
/// order is confirmed out of band.
pub trait CheckoutPresenter: Send + Sync {
  fn present(&self, checkout: &CheckoutRequest);
}

/// Identifies one subscription, for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&[CartLineItem]) + Send + Sync>;

struct CartShared {
  store: CartStore,
  items: RwLock<Vec<CartLineItem>>,
  listeners: RwLock<Vec<(SubscriptionId, Listener)>>,
  next_subscription: AtomicU64,
  checkout_config: CheckoutConfig,
  presenter: Box<dyn CheckoutPresenter>,
}

impl CartShared {
  /// Re-reads the full cart from the store, republishes it and notifies
  /// every subscriber.
  fn republish(&self) {
    let items = self.store.cart();
    *self.items.write() = items.clone();
    let listeners = self.listeners.read();
    for (_, listener) in listeners.iter() {
      listener(&items);
    }
  }
}

/// Provider side of the adapter. Owns the store; dropping it invalidates all
/// outstanding handles.
pub struct CartContext {
  shared: Arc<CartShared>,
}

impl CartContext {
  /// Installs the adapter around `store`, loading the persisted cart once
  /// as the initial published state.
  pub fn new(store: CartStore, checkout_config: CheckoutConfig, presenter: Box<dyn CheckoutPresenter>) -> Self {
    let initial = store.cart();
    debug!(line_count = initial.len(), "cart context initialized from persisted state");
    Self {
      shared: Arc::new(CartShared {
        store,
        items: RwLock::new(initial),
        listeners: RwLock::new(Vec::new()),
        next_subscription: AtomicU64::new(0),
        checkout_config,
        presenter,
      }),
    }
  }

  /// A cheap, cloneable handle for components under this provider.
  pub fn handle(&self) -> CartHandle {
    CartHandle {
      shared: Arc::downgrade(&self.shared),
    }
  }
}

/// Component-side access to the published cart state.
#[derive(Clone)]
pub struct CartHandle {
  shared: Weak<CartShared>,
}

impl CartHandle {
  fn shared(&self) -> CartResult<Arc<CartShared>> {
    self.shared.upgrade().ok_or(CartError::ProviderGone)
  }

  /// Snapshot of the published cart, in insertion order.
  pub fn items(&self) -> CartResult<Vec<CartLineItem>> {
    Ok(self.shared()?.items.read().clone())
  }

  /// Number of cart lines (the badge count), not summed quantities.
  pub fn len(&self) -> CartResult<usize> {
    Ok(self.shared()?.items.read().len())
  }

  pub fn is_empty(&self) -> CartResult<bool> {
    Ok(self.shared()?.items.read().is_empty())
  }

  pub fn total(&self) -> CartResult<u64> {
    Ok(self.shared()?.items.read().iter().map(CartLineItem::subtotal).sum())
  }

  /// Adds `quantity` of `product` and republishes.
  pub fn add_to_cart(&self, product: &Product, quantity: u32) -> CartResult<CartLineItem> {
    let shared = self.shared()?;
    let line = shared.store.add_item(product, quantity)?;
    shared.republish();
    Ok(line)
  }

  /// Sets the quantity of a line item, clamped to the UI-enforced bounds:
  /// a floor of 1, and the stock snapshot as ceiling when one was captured.
  /// Unknown ids are a no-op.
  pub fn update_quantity(&self, item_id: Uuid, quantity: u32) -> CartResult<()> {
    let shared = self.shared()?;
    let clamped = {
      let items = shared.items.read();
      let Some(item) = items.iter().find(|i| i.id == item_id) else {
        return Ok(());
      };
      let mut bounded = quantity.max(1);
      if item.stock_at_add > 0 {
        bounded = bounded.min(item.stock_at_add);
      }
      bounded
    };
    if clamped != quantity {
      debug!(%item_id, requested = quantity, clamped, "quantity edit clamped");
    }
    shared.store.update_quantity(item_id, clamped)?;
    shared.republish();
    Ok(())
  }

  pub fn remove_from_cart(&self, item_id: Uuid) -> CartResult<()> {
    let shared = self.shared()?;
    shared.store.remove_item(item_id)?;
    shared.republish();
    Ok(())
  }

  pub fn clear_cart(&self) -> CartResult<()> {
    let shared = self.shared()?;
    shared.store.clear()?;
    shared.republish();
    Ok(())
  }

  /// Registers a listener called with the republished cart after every
  /// mutation made through this adapter.
  pub fn subscribe(&self, listener: impl Fn(&[CartLineItem]) + Send + Sync + 'static) -> CartResult<SubscriptionId> {
    let shared = self.shared()?;
    let id = SubscriptionId(shared.next_subscription.fetch_add(1, Ordering::Relaxed));
    shared.listeners.write().push((id, Box::new(listener)));
    Ok(id)
  }

  pub fn unsubscribe(&self, id: SubscriptionId) -> CartResult<()> {
    let shared = self.shared()?;
    shared.listeners.write().retain(|(sub_id, _)| *sub_id != id);
    Ok(())
  }

  /// Builds the order summary and deep links for the current cart and hands
  /// them to the presenter.
  ///
  /// Fails on an empty cart and on a missing destination number. Does NOT
  /// clear the cart: in a contact-to-order flow the order is only confirmed
  /// by manual follow-up, so the cart survives checkout.
  pub fn checkout(&self) -> CartResult<CheckoutRequest> {
    let shared = self.shared()?;
    let items = shared.items.read().clone();
    if items.is_empty() {
      return Err(CartError::EmptyCart);
    }

    let phone = shared
      .checkout_config
      .phone_number
      .as_deref()
      .map(str::trim)
      .filter(|p| !p.is_empty())
      .ok_or(CartError::PhoneMissing)?;

    let total = items.iter().map(CartLineItem::subtotal).sum();
    let message = checkout::order_message(&items, total);
    let links = checkout::checkout_links(phone, &message)?;
    let request = CheckoutRequest {
      phone_number: phone.to_string(),
      message,
      links,
    };

    info!(line_count = items.len(), total, "presenting checkout");
    shared.presenter.present(&request);
    Ok(request)
  }
}
