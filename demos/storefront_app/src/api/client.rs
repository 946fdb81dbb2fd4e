// demos/storefront_app/src/api/client.rs

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::session::TokenStore;

/// HTTP client for the backend API.
///
/// Every request picks the current bearer token off the shared
/// [`TokenStore`] at send time, so a login in one part of the application is
/// immediately visible to all subsequent requests.
#[derive(Clone)]
pub struct ApiClient {
  http: reqwest::Client,
  base_url: String,
  pub(crate) tokens: Arc<TokenStore>,
}

impl ApiClient {
  pub fn new(config: &AppConfig, tokens: Arc<TokenStore>) -> Result<Self> {
    let http = reqwest::Client::builder()
      .timeout(Duration::from_secs(config.request_timeout_secs))
      .build()?;
    Ok(Self {
      http,
      base_url: config.api_base_url.trim_end_matches('/').to_string(),
      tokens,
    })
  }

  fn endpoint(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }

  /// Attaches `Authorization: Bearer <token>` when a token is available.
  fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
    match self.tokens.token() {
      Some(token) => request.bearer_auth(token),
      None => request,
    }
  }

  /// Maps the interesting HTTP statuses onto the app error taxonomy before
  /// the blanket `error_for_status`.
  async fn check(response: Response) -> Result<Response> {
    match response.status() {
      StatusCode::UNAUTHORIZED => Err(AppError::Auth("Backend rejected the request (401).".to_string())),
      StatusCode::NOT_FOUND => Err(AppError::NotFound(format!(
        "Backend has no resource at {}",
        response.url().path()
      ))),
      _ => Ok(response.error_for_status()?),
    }
  }

  pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    debug!(path, "GET");
    let response = self.authorize(self.http.get(self.endpoint(path))).send().await?;
    Ok(Self::check(response).await?.json().await?)
  }

  pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
    debug!(path, "POST");
    let response = self.authorize(self.http.post(self.endpoint(path)).json(body)).send().await?;
    Ok(Self::check(response).await?.json().await?)
  }

  pub(crate) async fn post_empty(&self, path: &str) -> Result<()> {
    debug!(path, "POST (no body)");
    let response = self.authorize(self.http.post(self.endpoint(path))).send().await?;
    Self::check(response).await?;
    Ok(())
  }

  pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
    debug!(path, "PUT");
    let response = self.authorize(self.http.put(self.endpoint(path)).json(body)).send().await?;
    Ok(Self::check(response).await?.json().await?)
  }

  pub(crate) async fn delete(&self, path: &str) -> Result<()> {
    debug!(path, "DELETE");
    let response = self.authorize(self.http.delete(self.endpoint(path))).send().await?;
    Self::check(response).await?;
    Ok(())
  }
}
