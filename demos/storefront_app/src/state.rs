// demos/storefront_app/src/state.rs

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::services::Notifier;
use crate::session::TokenStore;
use crafthaven_cart::CartContext;
use std::sync::Arc;

pub struct AppState {
  pub config: Arc<AppConfig>,
  pub api: ApiClient,
  /// The single authoritative cart adapter for this session. Components
  /// work through `cart.handle()`, never through a store of their own.
  pub cart: CartContext,
  pub tokens: Arc<TokenStore>,
  pub notifier: Arc<dyn Notifier>,
}
