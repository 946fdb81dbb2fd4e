// demos/storefront_app/src/services/checkout_dialog.rs

//! Checkout confirmation surface.
//!
//! The storefront shows a dialog offering three ways to reach the shop:
//! the WhatsApp web client, the app deep link, and copying the message to
//! send manually. This terminal rendition prints the same three options.

use crafthaven_cart::{CheckoutPresenter, CheckoutRequest};
use std::sync::Arc;
use tracing::info;

use crate::services::notify::Notifier;

pub struct CheckoutDialog {
  notifier: Arc<dyn Notifier>,
}

impl CheckoutDialog {
  pub fn new(notifier: Arc<dyn Notifier>) -> Self {
    Self { notifier }
  }
}

impl CheckoutPresenter for CheckoutDialog {
  fn present(&self, checkout: &CheckoutRequest) {
    info!("Checkout via WhatsApp, nomor {}", checkout.phone_number);
    info!("Buka di WhatsApp Web     : {}", checkout.links.web);
    info!("Buka di Aplikasi WhatsApp: {}", checkout.links.mobile);
    info!("Atau salin pesan berikut dan kirim manual:\n{}", checkout.message);
    self.notifier.success("Pesan checkout siap dikirim");
  }
}
