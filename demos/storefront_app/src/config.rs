// demos/storefront_app/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use url::Url;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  /// Base URL of the backend REST API (auth + product catalog).
  pub api_base_url: String,

  /// Destination WhatsApp number for checkout. Optional here: a missing
  /// number only fails at checkout time, loudly.
  pub whatsapp_number: Option<String>,

  /// Path of the file standing in for the browser's cart storage.
  pub cart_storage_path: String,

  pub request_timeout_secs: u64,

  /// Dashboard credentials for the admin part of the demo; both unset in a
  /// plain customer session.
  pub admin_email: Option<String>,
  pub admin_password: Option<String>,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let api_base_url = get_env("CRAFTHAVEN_API_URL")?;
    // Validate the shape early; a bad base URL should abort startup, not
    // surface as a failed request later.
    Url::parse(&api_base_url).map_err(|e| AppError::Config(format!("Invalid CRAFTHAVEN_API_URL: {}", e)))?;

    let whatsapp_number = get_env("CRAFTHAVEN_WHATSAPP_NUMBER")
      .ok()
      .map(|n| n.trim().to_string())
      .filter(|n| !n.is_empty());
    if whatsapp_number.is_none() {
      tracing::warn!("CRAFTHAVEN_WHATSAPP_NUMBER is not set; checkout will be unavailable.");
    }

    let cart_storage_path =
      get_env("CRAFTHAVEN_CART_FILE").unwrap_or_else(|_| "crafthaven_cart.json".to_string());

    let request_timeout_secs = get_env("CRAFTHAVEN_REQUEST_TIMEOUT_SECS")
      .unwrap_or_else(|_| "10".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid CRAFTHAVEN_REQUEST_TIMEOUT_SECS: {}", e)))?;

    let admin_email = get_env("CRAFTHAVEN_ADMIN_EMAIL").ok();
    let admin_password = get_env("CRAFTHAVEN_ADMIN_PASSWORD").ok();

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      api_base_url,
      whatsapp_number,
      cart_storage_path,
      request_timeout_secs,
      admin_email,
      admin_password,
    })
  }
}
