//! Checkout and payment endpoints. Pure pass-throughs with header
//! attachment; the remote API owns all validation.

use minutemart_core::{AddressId, OrderId, PaymentMode};
use serde_json::{Value, json};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Create a pending order from the current cart contents.
    pub async fn checkout(&self, address_id: &AddressId) -> Result<Value, ApiError> {
        self.post_raw("/checkout", &json!({"addressId": address_id}))
            .await
    }

    /// Set the payment mode for a pending order.
    pub async fn set_payment_mode(
        &self,
        order_id: &OrderId,
        mode: PaymentMode,
    ) -> Result<Value, ApiError> {
        self.put_raw(
            &format!("/orders/{order_id}/payment-mode"),
            &json!({"paymentMode": mode}),
        )
        .await
    }

    /// Process payment; upstream clears the cart on success.
    pub async fn process_payment(&self, order_id: &OrderId) -> Result<Value, ApiError> {
        self.post_raw(&format!("/orders/{order_id}/pay"), &json!({}))
            .await
    }
}
