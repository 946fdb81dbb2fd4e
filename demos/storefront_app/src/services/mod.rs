// demos/storefront_app/src/services/mod.rs

pub mod checkout_dialog;
pub mod notify;

pub use checkout_dialog::CheckoutDialog;
pub use notify::{LogNotifier, Notifier};
