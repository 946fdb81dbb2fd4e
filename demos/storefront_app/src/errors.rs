// demos/storefront_app/src/errors.rs

use crafthaven_cart::CartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("API Request Error: {0}")]
  Api(#[from] reqwest::Error),

  #[error("Cart Error: {source}")]
  Cart {
    #[from] // Allows conversion from crafthaven_cart::CartError
    source: CartError,
  },

  #[error("Internal Error: {0}")]
  Internal(String), // For miscellaneous errors
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in call sites that use `?` on functions returning anyhow::Result
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    if err.is::<CartError>() {
      // We already have `From<CartError>`, but this handles if it was wrapped in anyhow
      return AppError::Cart {
        source: err.downcast::<CartError>().unwrap(),
      };
    }
    AppError::Internal(err.to_string())
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
