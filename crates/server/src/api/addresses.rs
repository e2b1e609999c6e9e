//! Delivery address endpoints.

use minutemart_core::AddressId;
use serde_json::{Value, json};

use super::types::{Address, AddressesData};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// Raw address list envelope.
    pub async fn addresses_raw(&self) -> Result<Value, ApiError> {
        self.get_raw("/addresses", &[]).await
    }

    /// Typed address list.
    pub async fn addresses(&self) -> Result<Vec<Address>, ApiError> {
        let envelope = self.addresses_raw().await?;
        let data: AddressesData = Self::data_from_envelope(envelope)?;
        Ok(data.addresses)
    }

    /// Create a new delivery address. The payload is already in the
    /// upstream's camelCase shape.
    pub async fn create_address(&self, payload: &Value) -> Result<Value, ApiError> {
        self.post_raw("/addresses", payload).await
    }

    /// Mark an address as the default delivery address.
    pub async fn set_default_address(&self, address_id: &AddressId) -> Result<Value, ApiError> {
        self.put_raw(&format!("/addresses/{address_id}/default"), &json!({}))
            .await
    }
}
