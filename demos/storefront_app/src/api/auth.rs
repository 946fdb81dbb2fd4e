// demos/storefront_app/src/api/auth.rs

//! `/auth` endpoints. The backend owns the authentication protocol; this
//! side only forwards credentials and keeps the issued bearer token around.

use tracing::{info, instrument};

use crate::api::client::ApiClient;
use crate::errors::Result;
use crate::models::{LoginRequest, LoginResponse, User};

impl ApiClient {
  /// `POST /auth/login`. On success the issued token is stored and
  /// attached to all subsequent requests.
  #[instrument(name = "api::login", skip(self, password), fields(email = %email))]
  pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
    let payload = LoginRequest {
      email: email.to_string(),
      password: password.to_string(),
    };
    let response: LoginResponse = self.post_json("/auth/login", &payload).await?;
    self.tokens.store(&response.token);
    info!(user_id = response.user.id, "login succeeded");
    Ok(response)
  }

  /// `POST /auth/logout`. Clears the stored token after the backend
  /// acknowledges; a failed request leaves the session untouched.
  #[instrument(name = "api::logout", skip(self))]
  pub async fn logout(&self) -> Result<()> {
    self.post_empty("/auth/logout").await?;
    self.tokens.clear();
    info!("logout succeeded; token cleared");
    Ok(())
  }

  /// `GET /auth/me`
  pub async fn me(&self) -> Result<User> {
    self.get_json("/auth/me").await
  }
}
