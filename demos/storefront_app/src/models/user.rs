// demos/storefront_app/src/models/user.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub id: u64,
  pub name: String,
  pub email: String,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
  pub email: String,
  pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
  pub token: String,
  pub user: User,
}
