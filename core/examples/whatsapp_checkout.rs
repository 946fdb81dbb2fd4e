// core/examples/whatsapp_checkout.rs

use crafthaven_cart::{
  CartContext, CartStore, CheckoutConfig, CheckoutPresenter, CheckoutRequest, MemoryStorage, Product,
};
use std::sync::Arc;
use tracing::info;

// A presenter that just prints the prepared checkout. A storefront would
// open a dialog offering the web link, the app link and a copy button.
struct PrintingPresenter;

impl CheckoutPresenter for PrintingPresenter {
  fn present(&self, checkout: &CheckoutRequest) {
    info!("WhatsApp number : {}", checkout.phone_number);
    info!("App link        : {}", checkout.links.mobile);
    info!("Web link        : {}", checkout.links.web);
    info!("Message:\n{}", checkout.message);
  }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- WhatsApp Checkout Example ---");

  // 1. Install the context adapter around a store. The adapter owns the
  //    single authoritative store instance for the session.
  let store = CartStore::new(Arc::new(MemoryStorage::new()));
  let context = CartContext::new(
    store,
    CheckoutConfig::new("6281234567890"),
    Box::new(PrintingPresenter),
  );

  // 2. Components work through cheap handles.
  let handle = context.handle();
  let subscription = handle.subscribe(|items| {
    info!("cart changed: {} line(s)", items.len());
  })?;

  let bag = Product {
    id: 7,
    name: "Tas Rajut Mini".to_string(),
    price: 120_000,
    stock: 4,
    main_photo_url: "https://utfs.io/f/tas-rajut-mini.jpg".to_string(),
    category_name: "Tas".to_string(),
  };
  handle.add_to_cart(&bag, 2)?;

  // 3. Checkout renders the order summary and presents the deep links.
  //    The cart deliberately survives checkout.
  handle.checkout()?;
  info!("cart still has {} line(s) after checkout", handle.len()?);

  handle.unsubscribe(subscription)?;
  Ok(())
}
