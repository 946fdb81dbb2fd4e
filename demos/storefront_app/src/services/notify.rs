// demos/storefront_app/src/services/notify.rs

//! User-facing feedback. Failures in this application are handled at the
//! call site with a notification; nothing propagates to a global error
//! surface.

use tracing::{info, warn};

pub trait Notifier: Send + Sync {
  fn success(&self, message: &str);
  fn error(&self, message: &str);
}

/// Terminal stand-in for the storefront's toast stack.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
  fn success(&self, message: &str) {
    info!(target: "toast", "{}", message);
  }

  fn error(&self, message: &str) {
    warn!(target: "toast", "{}", message);
  }
}
