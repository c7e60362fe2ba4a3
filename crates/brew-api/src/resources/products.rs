//! # Product Endpoints
//!
//! Read-only access to the product catalog. The catalog is never cached
//! here; screens fetch what they need and filter locally.

use brew_core::types::Product;

use crate::client::CafeClient;
use crate::error::ApiResult;

/// Accessor for `/products`.
#[derive(Debug)]
pub struct ProductsApi<'a> {
    client: &'a CafeClient,
}

impl<'a> ProductsApi<'a> {
    pub(crate) fn new(client: &'a CafeClient) -> Self {
        ProductsApi { client }
    }

    /// Fetches the full product list.
    pub async fn list(&self) -> ApiResult<Vec<Product>> {
        self.client.get("/products").await
    }

    /// Fetches a single product by id.
    pub async fn get(&self, product_id: &str) -> ApiResult<Product> {
        self.client.get(&format!("/products/{}", product_id)).await
    }
}
