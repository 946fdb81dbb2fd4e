// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::Level;

use crafthaven_cart::{
  CartContext, CartStore, CheckoutConfig, CheckoutPresenter, CheckoutRequest, MemoryStorage, Product, StorageBackend,
};

pub const TEST_PHONE: &str = "6281234567890";

// --- Sample catalog products ---

pub fn dream_catcher() -> Product {
  Product {
    id: 1,
    name: "Dream Catcher Bulan".to_string(),
    price: 85_000,
    stock: 12,
    main_photo_url: "https://utfs.io/f/dream-catcher-bulan.jpg".to_string(),
    category_name: "Hiasan Dinding".to_string(),
  }
}

pub fn macrame_necklace() -> Product {
  Product {
    id: 2,
    name: "Kalung Makrame Daun".to_string(),
    price: 45_000,
    stock: 5,
    main_photo_url: "https://utfs.io/f/kalung-makrame-daun.jpg".to_string(),
    category_name: "Kalung".to_string(),
  }
}

pub fn unstocked_product() -> Product {
  Product {
    id: 3,
    name: "Gelang Anyam".to_string(),
    price: 25_000,
    stock: 0,
    main_photo_url: "https://utfs.io/f/gelang-anyam.jpg".to_string(),
    category_name: "Gelang".to_string(),
  }
}

// --- Store / context constructors ---

pub fn memory_store() -> (CartStore, Arc<MemoryStorage>) {
  let storage = Arc::new(MemoryStorage::new());
  (CartStore::new(storage.clone()), storage)
}

pub fn context_with_phone(store: CartStore) -> (CartContext, Arc<Mutex<Vec<CheckoutRequest>>>) {
  let (presenter, log) = RecordingPresenter::new();
  let context = CartContext::new(store, CheckoutConfig::new(TEST_PHONE), Box::new(presenter));
  (context, log)
}

// --- Presenter that records what it was asked to show ---

pub struct RecordingPresenter {
  log: Arc<Mutex<Vec<CheckoutRequest>>>,
}

impl RecordingPresenter {
  pub fn new() -> (Self, Arc<Mutex<Vec<CheckoutRequest>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    (Self { log: log.clone() }, log)
  }
}

impl CheckoutPresenter for RecordingPresenter {
  fn present(&self, checkout: &CheckoutRequest) {
    self.log.lock().push(checkout.clone());
  }
}

// --- Backend that always fails, for degradation tests ---

pub struct FailingStorage;

impl StorageBackend for FailingStorage {
  fn load(&self, _key: &str) -> Result<Option<String>, anyhow::Error> {
    Err(anyhow::anyhow!("storage offline"))
  }

  fn store(&self, _key: &str, _value: &str) -> Result<(), anyhow::Error> {
    Err(anyhow::anyhow!("storage offline"))
  }

  fn remove(&self, _key: &str) -> Result<(), anyhow::Error> {
    Err(anyhow::anyhow!("storage offline"))
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
