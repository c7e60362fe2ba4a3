//! # Order Endpoints
//!
//! Placing orders and reading receipts. Order processing (status
//! transitions, pricing authority) happens entirely on the backend; the
//! client only submits what the cart computed and renders what comes back.

use brew_core::types::{NewOrder, Order};
use tracing::info;

use crate::client::CafeClient;
use crate::error::ApiResult;

/// Accessor for `/orders`.
#[derive(Debug)]
pub struct OrdersApi<'a> {
    client: &'a CafeClient,
}

impl<'a> OrdersApi<'a> {
    pub(crate) fn new(client: &'a CafeClient) -> Self {
        OrdersApi { client }
    }

    /// Fetches the authenticated user's orders.
    pub async fn list(&self) -> ApiResult<Vec<Order>> {
        self.client.get("/orders").await
    }

    /// Fetches a single order by id — the receipt view.
    pub async fn get(&self, order_id: &str) -> ApiResult<Order> {
        self.client.get(&format!("/orders/{}", order_id)).await
    }

    /// Submits a new order.
    pub async fn create(&self, order: &NewOrder) -> ApiResult<Order> {
        let created: Order = self.client.post("/orders", order).await?;
        info!(order_id = %created.order_id, total = %created.total_price, "Order placed");
        Ok(created)
    }
}
