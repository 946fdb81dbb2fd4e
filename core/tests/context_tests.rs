// tests/context_tests.rs
mod common; // Reference the common module

use common::*;
use crafthaven_cart::{CartContext, CartError, CartStore, CheckoutConfig};
use parking_lot::Mutex;
use std::sync::Arc;
use uuid::Uuid;

#[test]
fn test_context_loads_persisted_cart_on_install() {
  setup_tracing();
  let (store, storage) = memory_store();
  store.add_item(&dream_catcher(), 2).unwrap();

  // A fresh context over the same backend picks the persisted state up once.
  let (context, _log) = context_with_phone(CartStore::new(storage));
  let handle = context.handle();

  assert_eq!(handle.len().unwrap(), 1);
  assert_eq!(handle.items().unwrap()[0].quantity, 2);
}

#[test]
fn test_mutations_republish_full_cart() {
  setup_tracing();
  let (store, _storage) = memory_store();
  let (context, _log) = context_with_phone(store);
  let handle = context.handle();

  let line = handle.add_to_cart(&dream_catcher(), 1).unwrap();
  handle.add_to_cart(&macrame_necklace(), 2).unwrap();
  assert_eq!(handle.len().unwrap(), 2);
  assert_eq!(handle.total().unwrap(), 85_000 + 2 * 45_000);

  handle.remove_from_cart(line.id).unwrap();
  assert_eq!(handle.len().unwrap(), 1);

  handle.clear_cart().unwrap();
  assert!(handle.is_empty().unwrap());
  assert_eq!(handle.total().unwrap(), 0);
}

#[test]
fn test_subscribers_see_every_republish() {
  setup_tracing();
  let (store, _storage) = memory_store();
  let (context, _log) = context_with_phone(store);
  let handle = context.handle();

  let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
  let seen_in_listener = seen.clone();
  let subscription = handle
    .subscribe(move |items| seen_in_listener.lock().push(items.len()))
    .unwrap();

  handle.add_to_cart(&dream_catcher(), 1).unwrap();
  handle.add_to_cart(&macrame_necklace(), 1).unwrap();
  handle.clear_cart().unwrap();

  assert_eq!(*seen.lock(), vec![1, 2, 0]);

  handle.unsubscribe(subscription).unwrap();
  handle.add_to_cart(&dream_catcher(), 1).unwrap();
  assert_eq!(*seen.lock(), vec![1, 2, 0]); // No further notifications
}

#[test]
fn test_update_quantity_clamps_floor_to_one() {
  setup_tracing();
  let (store, _storage) = memory_store();
  let (context, _log) = context_with_phone(store);
  let handle = context.handle();
  let line = handle.add_to_cart(&dream_catcher(), 3).unwrap();

  // The UI-enforced path never lets the quantity drop below 1.
  handle.update_quantity(line.id, 0).unwrap();

  assert_eq!(handle.items().unwrap()[0].quantity, 1);
}

#[test]
fn test_update_quantity_clamps_to_stock_snapshot() {
  setup_tracing();
  let (store, _storage) = memory_store();
  let (context, _log) = context_with_phone(store);
  let handle = context.handle();
  let line = handle.add_to_cart(&macrame_necklace(), 1).unwrap(); // stock 5

  handle.update_quantity(line.id, 40).unwrap();

  assert_eq!(handle.items().unwrap()[0].quantity, 5);
}

#[test]
fn test_update_quantity_without_stock_snapshot_only_floors() {
  setup_tracing();
  let (store, _storage) = memory_store();
  let (context, _log) = context_with_phone(store);
  let handle = context.handle();
  let line = handle.add_to_cart(&unstocked_product(), 1).unwrap(); // stock 0

  // No stock tracking captured: only the floor of 1 applies.
  handle.update_quantity(line.id, 7).unwrap();

  assert_eq!(handle.items().unwrap()[0].quantity, 7);
}

#[test]
fn test_update_quantity_unknown_id_is_a_noop() {
  setup_tracing();
  let (store, _storage) = memory_store();
  let (context, _log) = context_with_phone(store);
  let handle = context.handle();
  handle.add_to_cart(&dream_catcher(), 2).unwrap();

  handle.update_quantity(Uuid::new_v4(), 9).unwrap();

  assert_eq!(handle.items().unwrap()[0].quantity, 2);
}

#[test]
fn test_handle_fails_fast_once_context_is_dropped() {
  setup_tracing();
  let (store, _storage) = memory_store();
  let (context, _log) = context_with_phone(store);
  let handle = context.handle();
  handle.add_to_cart(&dream_catcher(), 1).unwrap();

  drop(context);

  // Using a handle outside the provider's scope is a programming error and
  // must fail loudly, not return defaults.
  assert!(matches!(handle.items(), Err(CartError::ProviderGone)));
  assert!(matches!(handle.total(), Err(CartError::ProviderGone)));
  assert!(matches!(
    handle.add_to_cart(&macrame_necklace(), 1),
    Err(CartError::ProviderGone)
  ));
  assert!(matches!(handle.checkout(), Err(CartError::ProviderGone)));
}

#[test]
fn test_checkout_rejects_empty_cart() {
  setup_tracing();
  let (store, _storage) = memory_store();
  let (context, log) = context_with_phone(store);
  let handle = context.handle();

  assert!(matches!(handle.checkout(), Err(CartError::EmptyCart)));
  assert!(log.lock().is_empty()); // Nothing was presented
}

#[test]
fn test_checkout_rejects_missing_phone_number() {
  setup_tracing();
  let (store, _storage) = memory_store();
  let (presenter, log) = RecordingPresenter::new();
  let context = CartContext::new(store, CheckoutConfig::unset(), Box::new(presenter));
  let handle = context.handle();
  handle.add_to_cart(&dream_catcher(), 1).unwrap();

  assert!(matches!(handle.checkout(), Err(CartError::PhoneMissing)));
  assert!(log.lock().is_empty());
}

#[test]
fn test_checkout_presents_links_and_keeps_cart() {
  setup_tracing();
  let (store, _storage) = memory_store();
  let (context, log) = context_with_phone(store);
  let handle = context.handle();
  handle.add_to_cart(&dream_catcher(), 2).unwrap();

  let request = handle.checkout().unwrap();

  assert_eq!(request.phone_number, TEST_PHONE);
  assert!(request.links.mobile.starts_with("https://wa.me/6281234567890?text="));
  assert!(request
    .links
    .web
    .starts_with("https://web.whatsapp.com/send?phone=6281234567890&text="));
  assert!(request.message.contains("Dream Catcher Bulan"));

  let presented = log.lock();
  assert_eq!(presented.len(), 1);
  assert_eq!(presented[0].links.mobile, request.links.mobile);

  // The cart survives checkout: the order is only confirmed by follow-up.
  assert_eq!(handle.len().unwrap(), 1);
}
