// demos/storefront_app/src/main.rs

// Declare modules for the application
mod api;
mod config;
mod errors;
mod guard;
mod models;
mod services;
mod session;
mod state;
mod storage;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::errors::Result as AppResult;
use crate::guard::RouteDecision;
use crate::models::{Category, CreateProductRequest, Product};
use crate::services::{CheckoutDialog, LogNotifier, Notifier};
use crate::session::TokenStore;
use crate::state::AppState;
use crate::storage::FileStorage;

use chrono::Utc;
use crafthaven_cart::{CartContext, CartError, CartStore, CheckoutConfig};
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

#[tokio::main]
async fn main() -> AppResult<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  info!("Starting CraftHaven storefront demo...");

  // Load application configuration
  let config = Arc::new(AppConfig::from_env()?);

  // Wire up the collaborators: token store, API client, notifications,
  // file-backed cart storage and the cart context adapter.
  let tokens = Arc::new(TokenStore::new());
  let api = ApiClient::new(&config, tokens.clone())?;
  let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);

  let cart_store = CartStore::new(Arc::new(FileStorage::new(&config.cart_storage_path)));
  let cart = CartContext::new(
    cart_store,
    CheckoutConfig {
      phone_number: config.whatsapp_number.clone(),
    },
    Box::new(CheckoutDialog::new(notifier.clone())),
  );

  let state = AppState {
    config,
    api,
    cart,
    tokens,
    notifier,
  };

  run_storefront_session(&state).await?;

  // The admin part of the demo only runs when dashboard credentials are
  // configured; API failures there surface as notifications, not crashes.
  if let (Some(email), Some(password)) = (state.config.admin_email.clone(), state.config.admin_password.clone()) {
    if let Err(e) = run_admin_session(&state, &email, &password).await {
      warn!(error = %e, "admin session aborted");
      state.notifier.error("Sesi admin gagal, silakan coba lagi");
    }
  }

  Ok(())
}

/// Walks the admin dashboard flow: log in, inspect the session, manage one
/// product through its create/update/delete lifecycle, log out.
async fn run_admin_session(state: &AppState, email: &str, password: &str) -> AppResult<()> {
  // Without a session cookie the dashboard bounces; after login both the
  // gate and the login redirect flip.
  navigate(state, "/dashboard/products");
  let login = state.api.login(email, password).await?;
  state
    .notifier
    .success(&format!("Selamat datang, {}", login.user.name));
  navigate(state, "/login");
  navigate(state, "/dashboard/products");

  let me = state.api.me().await?;
  info!(user_id = me.id, email = %me.email, "session verified");

  // One product through the full dashboard lifecycle. The photo URL is
  // whatever the upload provider returned; it is never interpreted here.
  let draft = CreateProductRequest {
    category_id: 2,
    name: "Kalung Resin Bunga".to_string(),
    description: "Kalung resin dengan bunga kering asli.".to_string(),
    price: 95_000,
    stock: 3,
    main_photo_url: "https://utfs.io/f/kalung-resin-bunga.jpg".to_string(),
    instagram_link: None,
    gallery_photos: Some(vec!["https://utfs.io/f/kalung-resin-bunga-detail.jpg".to_string()]),
  };
  let created = state.api.create_product(&draft).await?;
  state
    .notifier
    .success(&format!("Produk {} berhasil ditambahkan", created.name));

  let mut revised = draft.clone();
  revised.stock = 10;
  let updated = state.api.update_product(created.id, &revised).await?;
  info!(product_id = updated.id, stock = updated.stock, "product restocked");

  let fetched = state.api.product(created.id).await?;
  info!(product_id = fetched.id, "dashboard detail view loaded");

  state.api.delete_product(created.id).await?;
  state.notifier.success("Produk berhasil dihapus");

  state.api.logout().await?;
  navigate(state, "/dashboard/products"); // gated again after logout
  Ok(())
}

/// Walks one customer session through the storefront: browse the catalog,
/// fill the cart, adjust it, and hand off to WhatsApp checkout.
async fn run_storefront_session(state: &AppState) -> AppResult<()> {
  // The dashboard is gated; an anonymous session bounces to login.
  navigate(state, "/products");
  navigate(state, "/dashboard/products");

  let catalog = load_catalog(state).await;
  if catalog.is_empty() {
    state.notifier.error("Belum ada produk yang tersedia");
    return Ok(());
  }
  for product in &catalog {
    info!(
      "katalog: {} ({}) - Rp {}, stok {}",
      product.name,
      product.category.name,
      crafthaven_cart::format_rupiah(product.price),
      product.stock
    );
  }

  let handle = state.cart.handle();

  // Floating-cart-badge stand-in: re-rendered on every cart change.
  let badge_subscription = handle.subscribe(|items| {
    info!(target: "cart_badge", "{} item(s) in cart", items.len());
  })?;

  // Fill the cart. Adding the same product again merges into one line.
  let first = &catalog[0];
  handle.add_to_cart(&first.cart_snapshot(), 1)?;
  state
    .notifier
    .success(&format!("1 {} ditambahkan ke keranjang", first.name));
  if let Some(second) = catalog.get(1) {
    handle.add_to_cart(&second.cart_snapshot(), 2)?;
    state
      .notifier
      .success(&format!("2 {} ditambahkan ke keranjang", second.name));
  }
  handle.add_to_cart(&first.cart_snapshot(), 1)?;

  // Quantity edits clamp to [1, stock snapshot] on this path.
  let lines = handle.items()?;
  handle.update_quantity(lines[0].id, 0)?; // floors to 1
  let refreshed = handle.items()?;
  info!("after clamped edit: {} x{}", refreshed[0].name, refreshed[0].quantity);

  info!(
    "cart total: Rp {}",
    crafthaven_cart::format_rupiah(handle.total()?)
  );

  // Hand off to WhatsApp. The cart deliberately survives checkout: the
  // order is only confirmed by manual follow-up with the shop.
  navigate(state, "/cart");
  match handle.checkout() {
    Ok(_) => {
      info!(
        "cart still holds {} line(s) for follow-up",
        handle.len()?
      );
    }
    Err(CartError::EmptyCart) => state.notifier.error("Keranjang masih kosong"),
    Err(CartError::PhoneMissing) => state
      .notifier
      .error("Nomor WhatsApp toko belum dikonfigurasi; checkout tidak tersedia"),
    Err(e) => {
      warn!(error = %e, "checkout failed");
      state.notifier.error("Checkout gagal, silakan coba lagi");
    }
  }

  handle.unsubscribe(badge_subscription)?;
  Ok(())
}

/// Evaluates the route gate the way the storefront middleware does.
fn navigate(state: &AppState, path: &str) {
  match guard::route_decision(path, state.tokens.has_cookie()) {
    RouteDecision::Allow => info!("navigating to {}", path),
    RouteDecision::RedirectToLogin => info!("{} requires auth; redirecting to {}", path, guard::LOGIN_PATH),
    RouteDecision::RedirectToDashboard => {
      info!("{} with active session; redirecting to {}", path, guard::DASHBOARD_PREFIX)
    }
  }
}

/// Fetches the catalog, falling back to a bundled sample so the demo still
/// works without a reachable backend. API failures surface as notifications
/// and are not retried.
async fn load_catalog(state: &AppState) -> Vec<Product> {
  match state.api.products().await {
    Ok(products) => {
      info!("loaded {} product(s) from {}", products.len(), state.config.api_base_url);
      products
    }
    Err(e) => {
      warn!(error = %e, "catalog fetch failed");
      state
        .notifier
        .error("Gagal memuat produk dari server; menampilkan katalog contoh");
      sample_catalog()
    }
  }
}

fn sample_catalog() -> Vec<Product> {
  let now = Utc::now();
  let category = |id, name: &str| Category {
    id,
    name: name.to_string(),
  };
  vec![
    Product {
      id: 1,
      category_id: 1,
      name: "Dream Catcher Bulan".to_string(),
      description: "Dream catcher rajutan tangan dengan bulu alami.".to_string(),
      price: 85_000,
      stock: 12,
      main_photo_url: "https://utfs.io/f/dream-catcher-bulan.jpg".to_string(),
      instagram_link: None,
      created_at: now,
      updated_at: now,
      category: category(1, "Hiasan Dinding"),
      galleries: Vec::new(),
    },
    Product {
      id: 2,
      category_id: 2,
      name: "Kalung Makrame Daun".to_string(),
      description: "Kalung makrame motif daun, tali katun.".to_string(),
      price: 45_000,
      stock: 5,
      main_photo_url: "https://utfs.io/f/kalung-makrame-daun.jpg".to_string(),
      instagram_link: Some("https://instagram.com/p/kalung-makrame".to_string()),
      created_at: now,
      updated_at: now,
      category: category(2, "Kalung"),
      galleries: Vec::new(),
    },
    Product {
      id: 3,
      category_id: 3,
      name: "Tas Rajut Mini".to_string(),
      description: "Tas rajut mini untuk keperluan sehari-hari.".to_string(),
      price: 120_000,
      stock: 4,
      main_photo_url: "https://utfs.io/f/tas-rajut-mini.jpg".to_string(),
      instagram_link: None,
      created_at: now,
      updated_at: now,
      category: category(3, "Tas"),
      galleries: Vec::new(),
    },
  ]
}
