//! Order history and tracking endpoints.

use minutemart_core::OrderId;
use serde_json::{Value, json};

use super::types::{Order, OrdersData};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// Raw paginated order history envelope.
    pub async fn order_history_raw(&self, page: u32, limit: u32) -> Result<Value, ApiError> {
        self.get_raw(
            "/orders",
            &[("page", page.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    /// Typed order history, consumed by the recommendation deriver.
    pub async fn order_history(&self, page: u32, limit: u32) -> Result<Vec<Order>, ApiError> {
        let envelope = self.order_history_raw(page, limit).await?;
        let data: OrdersData = Self::data_from_envelope(envelope)?;
        Ok(data.orders)
    }

    /// Detail for one order.
    pub async fn order_detail(&self, order_id: &OrderId) -> Result<Value, ApiError> {
        self.get_raw(&format!("/orders/{order_id}"), &[]).await
    }

    /// Real-time tracking status for one order.
    pub async fn order_status(&self, order_id: &OrderId) -> Result<Value, ApiError> {
        self.get_raw(&format!("/orders/{order_id}/status"), &[])
            .await
    }

    /// Cancel an order, subject to the upstream's own time-window rules.
    pub async fn cancel_order(
        &self,
        order_id: &OrderId,
        reason: Option<&str>,
    ) -> Result<Value, ApiError> {
        let payload = reason.map_or_else(|| json!({}), |r| json!({"reason": r}));
        self.post_raw(&format!("/orders/{order_id}/cancel"), &payload)
            .await
    }

    /// Check availability of a previous order's items for reordering.
    pub async fn reorder(&self, order_id: &OrderId) -> Result<Value, ApiError> {
        self.post_raw(&format!("/orders/{order_id}/reorder"), &json!({}))
            .await
    }
}
