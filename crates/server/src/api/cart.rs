//! Cart endpoints. All of these require a logged-in session.

use minutemart_core::ProductId;
use serde_json::{Value, json};

use super::types::CartData;
use super::{ApiClient, ApiError};

impl ApiClient {
    /// Raw cart envelope.
    pub async fn cart_raw(&self) -> Result<Value, ApiError> {
        self.get_raw("/cart", &[]).await
    }

    /// Typed cart contents plus the uninterpreted bill block.
    pub async fn cart(&self) -> Result<CartData, ApiError> {
        let envelope = self.cart_raw().await?;
        Self::data_from_envelope(envelope)
    }

    /// Add an item to the cart. This is the single mutating request of the
    /// confirmed cart-add path.
    pub async fn add_cart_item(
        &self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Value, ApiError> {
        self.post_raw(
            "/cart/items",
            &json!({"productId": product_id, "quantity": quantity}),
        )
        .await
    }

    /// Update an item's quantity (0 removes it upstream).
    pub async fn update_cart_item(
        &self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Value, ApiError> {
        self.put_raw(
            &format!("/cart/items/{product_id}"),
            &json!({"quantity": quantity}),
        )
        .await
    }

    /// Remove an item entirely.
    pub async fn remove_cart_item(&self, product_id: &ProductId) -> Result<Value, ApiError> {
        self.delete_raw(&format!("/cart/items/{product_id}")).await
    }

    /// Empty the cart.
    pub async fn clear_cart(&self) -> Result<Value, ApiError> {
        self.delete_raw("/cart").await
    }
}
