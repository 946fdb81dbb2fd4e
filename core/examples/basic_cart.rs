// core/examples/basic_cart.rs

use crafthaven_cart::{CartStore, MemoryStorage, Product};
use std::sync::Arc;
use tracing::info;

fn main() -> Result<(), crafthaven_cart::CartError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Cart Example ---");

  // 1. Pick a storage backend. Real applications inject whatever blob store
  //    the execution context offers; here an in-memory map is enough.
  let storage = Arc::new(MemoryStorage::new());
  let store = CartStore::new(storage);

  // 2. Add a couple of catalog products. Adding the same product twice
  //    merges into one line item instead of duplicating the row.
  let dream_catcher = Product {
    id: 1,
    name: "Dream Catcher Bulan".to_string(),
    price: 85_000,
    stock: 12,
    main_photo_url: "https://utfs.io/f/dream-catcher-bulan.jpg".to_string(),
    category_name: "Hiasan Dinding".to_string(),
  };
  let necklace = Product {
    id: 2,
    name: "Kalung Makrame Daun".to_string(),
    price: 45_000,
    stock: 5,
    main_photo_url: "https://utfs.io/f/kalung-makrame-daun.jpg".to_string(),
    category_name: "Kalung".to_string(),
  };

  store.add_item(&dream_catcher, 1)?;
  store.add_item(&necklace, 2)?;
  store.add_item(&dream_catcher, 1)?; // merges: quantity becomes 2

  for item in store.cart() {
    info!(
      "{} x{} @ Rp {} (subtotal Rp {})",
      item.name,
      item.quantity,
      crafthaven_cart::format_rupiah(item.unit_price),
      crafthaven_cart::format_rupiah(item.subtotal())
    );
  }
  info!("Total: Rp {}", crafthaven_cart::format_rupiah(store.total()));

  // 3. Remove a line and clear the rest.
  let first_line_id = store.cart()[0].id;
  store.remove_item(first_line_id)?;
  info!("After removal: {} line(s)", store.cart().len());

  store.clear()?;
  info!("After clear: {} line(s), total {}", store.cart().len(), store.total());

  Ok(())
}
