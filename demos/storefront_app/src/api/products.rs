// demos/storefront_app/src/api/products.rs

//! `/products` endpoints: the catalog reads used by the storefront and the
//! CRUD used by the admin dashboard.

use tracing::instrument;

use crate::api::client::ApiClient;
use crate::errors::Result;
use crate::models::{CreateProductRequest, Product};

impl ApiClient {
  /// `GET /products`
  pub async fn products(&self) -> Result<Vec<Product>> {
    self.get_json("/products").await
  }

  /// `GET /products/:id`
  pub async fn product(&self, id: u64) -> Result<Product> {
    self.get_json(&format!("/products/{}", id)).await
  }

  /// `POST /products`
  #[instrument(name = "api::create_product", skip(self, data), fields(name = %data.name))]
  pub async fn create_product(&self, data: &CreateProductRequest) -> Result<Product> {
    self.post_json("/products", data).await
  }

  /// `PUT /products/:id`
  #[instrument(name = "api::update_product", skip(self, data), fields(product_id = id))]
  pub async fn update_product(&self, id: u64, data: &CreateProductRequest) -> Result<Product> {
    self.put_json(&format!("/products/{}", id), data).await
  }

  /// `DELETE /products/:id`
  #[instrument(name = "api::delete_product", skip(self), fields(product_id = id))]
  pub async fn delete_product(&self, id: u64) -> Result<()> {
    self.delete(&format!("/products/{}", id)).await
  }
}
