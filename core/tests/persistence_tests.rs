// tests/persistence_tests.rs
mod common; // Reference the common module

use common::*;
use crafthaven_cart::{CartStore, MemoryStorage, StorageBackend, DEFAULT_CART_KEY};
use std::sync::Arc;

fn store_with_raw_blob(raw: &str) -> CartStore {
  let storage = Arc::new(MemoryStorage::new());
  storage.store(DEFAULT_CART_KEY, raw).unwrap();
  CartStore::new(storage)
}

#[test]
fn test_save_then_load_round_trips_contents_and_order() {
  setup_tracing();
  let (store, _storage) = memory_store();

  store.add_item(&dream_catcher(), 2).unwrap();
  store.add_item(&macrame_necklace(), 1).unwrap();
  store.add_item(&unstocked_product(), 5).unwrap();
  let written = store.cart();

  // A fresh read of the persisted blob yields exactly what was written.
  let reloaded = store.cart();
  assert_eq!(reloaded, written);
  assert_eq!(reloaded[0].product_id, 1);
  assert_eq!(reloaded[1].product_id, 2);
  assert_eq!(reloaded[2].product_id, 3);
}

#[test]
fn test_save_explicit_items_round_trips() {
  setup_tracing();
  let (store, _storage) = memory_store();
  let items = vec![
    crafthaven_cart::CartLineItem::from_product(&dream_catcher(), 4),
    crafthaven_cart::CartLineItem::from_product(&macrame_necklace(), 1),
  ];

  store.save(&items).unwrap();

  assert_eq!(store.cart(), items);
}

#[test]
fn test_malformed_json_degrades_to_empty_cart() {
  setup_tracing();
  let store = store_with_raw_blob("{not json at all");

  assert!(store.cart().is_empty());
  assert_eq!(store.total(), 0);
}

#[test]
fn test_wrong_shape_degrades_to_empty_cart() {
  setup_tracing();
  let store = store_with_raw_blob(r#"{"hello": "world"}"#);

  assert!(store.cart().is_empty());
}

#[test]
fn test_unknown_schema_version_degrades_to_empty_cart() {
  setup_tracing();
  let store = store_with_raw_blob(r#"{"version": 99, "items": []}"#);

  assert!(store.cart().is_empty());
}

#[test]
fn test_corrupt_blob_recovers_after_next_write() {
  setup_tracing();
  let storage = Arc::new(MemoryStorage::new());
  storage.store(DEFAULT_CART_KEY, "][").unwrap();
  let store = CartStore::new(storage);

  // Worst case is an empty cart; the user recovers by re-adding items.
  assert!(store.cart().is_empty());
  store.add_item(&dream_catcher(), 1).unwrap();
  assert_eq!(store.cart().len(), 1);
}

#[test]
fn test_legacy_bare_array_is_migrated() {
  setup_tracing();
  let legacy = r#"[
    {
      "id": 1716099123456,
      "product_id": 7,
      "name": "Tas Rajut Mini",
      "price": 120000,
      "quantity": 2,
      "main_photo_url": "https://utfs.io/f/tas-rajut-mini.jpg",
      "category_name": "Tas",
      "stock": 4
    }
  ]"#;
  let store = store_with_raw_blob(legacy);

  let items = store.cart();
  assert_eq!(items.len(), 1);
  assert_eq!(items[0].product_id, 7);
  assert_eq!(items[0].unit_price, 120_000);
  assert_eq!(items[0].quantity, 2);
  assert_eq!(items[0].stock_at_add, 4);
  // Timestamp ids are replaced with fresh collision-free ids on migration.
  assert_eq!(items[0].name, "Tas Rajut Mini");
}

#[test]
fn test_zero_quantity_rows_are_dropped_on_read() {
  setup_tracing();
  let legacy = r#"[
    {
      "id": 1716099123456,
      "product_id": 7,
      "name": "Tas Rajut Mini",
      "price": 120000,
      "quantity": 0,
      "main_photo_url": "https://utfs.io/f/tas-rajut-mini.jpg",
      "category_name": "Tas",
      "stock": 4
    },
    {
      "id": 1716099123999,
      "product_id": 8,
      "name": "Topi Pandan",
      "price": 60000,
      "quantity": 1,
      "main_photo_url": "https://utfs.io/f/topi-pandan.jpg",
      "category_name": "Topi",
      "stock": 2
    }
  ]"#;
  let store = store_with_raw_blob(legacy);

  let items = store.cart();
  assert_eq!(items.len(), 1);
  assert_eq!(items[0].product_id, 8);
}
