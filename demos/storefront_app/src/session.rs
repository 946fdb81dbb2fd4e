// demos/storefront_app/src/session.rs

//! Bearer token storage.
//!
//! Mirrors the browser behavior: the auth cookie is the primary slot and a
//! local key-value slot is the fallback, consulted when no cookie is
//! present. Login writes both, logout clears both. The route guard only
//! looks at the cookie slot, matching the middleware it models.

use parking_lot::RwLock;

#[derive(Debug, Default)]
pub struct TokenStore {
  cookie: RwLock<Option<String>>,
  fallback: RwLock<Option<String>>,
}

impl TokenStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// The token to attach as `Authorization: Bearer <token>`, cookie first.
  pub fn token(&self) -> Option<String> {
    self.cookie.read().clone().or_else(|| self.fallback.read().clone())
  }

  /// Stores a freshly issued token in both slots.
  pub fn store(&self, token: &str) {
    *self.cookie.write() = Some(token.to_string());
    self.store_fallback(token);
  }

  /// Fallback-only write, for contexts where cookies are unavailable.
  pub fn store_fallback(&self, token: &str) {
    *self.fallback.write() = Some(token.to_string());
  }

  /// Clears both slots.
  pub fn clear(&self) {
    *self.cookie.write() = None;
    *self.fallback.write() = None;
  }

  /// Whether the auth cookie is set; this is what the route guard gates on.
  pub fn has_cookie(&self) -> bool {
    self.cookie.read().is_some()
  }
}
