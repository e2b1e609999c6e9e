//! Executor implementations for the pass-through domains: auth,
//! addresses, checkout, order tracking, and health.
//!
//! These forward the upstream envelope unchanged; only the health check
//! converts a transport failure into an explicit unavailability envelope.

use minutemart_core::{AddressId, ApiEnvelope, OrderId, PaymentMode};
use serde_json::{Value, json};
use tracing::warn;

use crate::error::ServerError;
use crate::mcp::types::ToolContent;

use super::{ToolExecutor, bool_or, opt_str, require_str, u32_or};

/// Unavailability message returned when the API server is unreachable.
pub(super) const API_UNAVAILABLE_MSG: &str = "Cannot connect to Minutemart API server";

impl ToolExecutor<'_> {
    // -------------------------------------------------------------------------
    // Auth
    // -------------------------------------------------------------------------

    pub(super) async fn login(&self, input: &Value) -> Result<Vec<ToolContent>, ServerError> {
        let email = require_str(input, "email")?;
        let password = require_str(input, "password")?;
        let envelope = self.api.login(email, password).await?;
        Self::envelope_content(&envelope)
    }

    pub(super) async fn register(&self, input: &Value) -> Result<Vec<ToolContent>, ServerError> {
        let email = require_str(input, "email")?;
        let password = require_str(input, "password")?;
        let name = require_str(input, "name")?;
        let phone = require_str(input, "phone")?;
        let envelope = self.api.register(email, password, name, phone).await?;
        Self::envelope_content(&envelope)
    }

    pub(super) async fn get_current_user(&self) -> Result<Vec<ToolContent>, ServerError> {
        let envelope = self.api.current_user().await?;
        Self::envelope_content(&envelope)
    }

    // -------------------------------------------------------------------------
    // Addresses
    // -------------------------------------------------------------------------

    pub(super) async fn get_addresses(&self) -> Result<Vec<ToolContent>, ServerError> {
        let envelope = self.api.addresses_raw().await?;
        Self::envelope_content(&envelope)
    }

    pub(super) async fn create_address(
        &self,
        input: &Value,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let mut payload = json!({
            "type": opt_str(input, "address_type").unwrap_or_else(|| "home".to_string()),
            "name": require_str(input, "name")?,
            "phone": require_str(input, "phone")?,
            "addressLine1": require_str(input, "address_line1")?,
            "city": require_str(input, "city")?,
            "state": require_str(input, "state")?,
            "pincode": require_str(input, "pincode")?,
            "isDefault": bool_or(input, "is_default", false),
        });
        if let Some(line2) = opt_str(input, "address_line2") {
            payload["addressLine2"] = Value::String(line2);
        }
        if let Some(landmark) = opt_str(input, "landmark") {
            payload["landmark"] = Value::String(landmark);
        }
        let envelope = self.api.create_address(&payload).await?;
        Self::envelope_content(&envelope)
    }

    pub(super) async fn set_default_address(
        &self,
        input: &Value,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let address_id = AddressId::new(require_str(input, "address_id")?);
        let envelope = self.api.set_default_address(&address_id).await?;
        Self::envelope_content(&envelope)
    }

    // -------------------------------------------------------------------------
    // Checkout & payment
    // -------------------------------------------------------------------------

    pub(super) async fn proceed_to_checkout(
        &self,
        input: &Value,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let address_id = AddressId::new(require_str(input, "address_id")?);
        let envelope = self.api.checkout(&address_id).await?;
        Self::envelope_content(&envelope)
    }

    pub(super) async fn set_payment_mode(
        &self,
        input: &Value,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let order_id = OrderId::new(require_str(input, "order_id")?);
        let mode = match require_str(input, "payment_mode")? {
            "upi" => PaymentMode::Upi,
            "cod" => PaymentMode::Cod,
            other => {
                return Err(ServerError::InvalidParams(format!(
                    "payment_mode must be 'upi' or 'cod', got '{other}'"
                )));
            }
        };
        let envelope = self.api.set_payment_mode(&order_id, mode).await?;
        Self::envelope_content(&envelope)
    }

    pub(super) async fn process_payment(
        &self,
        input: &Value,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let order_id = OrderId::new(require_str(input, "order_id")?);
        let envelope = self.api.process_payment(&order_id).await?;
        Self::envelope_content(&envelope)
    }

    // -------------------------------------------------------------------------
    // Order tracking
    // -------------------------------------------------------------------------

    pub(super) async fn get_order_history(
        &self,
        input: &Value,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let page = u32_or(input, "page", 1);
        let limit = u32_or(input, "limit", 10);
        let envelope = self.api.order_history_raw(page, limit).await?;
        Self::envelope_content(&envelope)
    }

    pub(super) async fn get_order_details(
        &self,
        input: &Value,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let order_id = OrderId::new(require_str(input, "order_id")?);
        let envelope = self.api.order_detail(&order_id).await?;
        Self::envelope_content(&envelope)
    }

    pub(super) async fn track_order(&self, input: &Value) -> Result<Vec<ToolContent>, ServerError> {
        let order_id = OrderId::new(require_str(input, "order_id")?);
        let envelope = self.api.order_status(&order_id).await?;
        Self::envelope_content(&envelope)
    }

    pub(super) async fn cancel_order(
        &self,
        input: &Value,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let order_id = OrderId::new(require_str(input, "order_id")?);
        let reason = opt_str(input, "reason");
        let envelope = self.api.cancel_order(&order_id, reason.as_deref()).await?;
        Self::envelope_content(&envelope)
    }

    pub(super) async fn reorder(&self, input: &Value) -> Result<Vec<ToolContent>, ServerError> {
        let order_id = OrderId::new(require_str(input, "order_id")?);
        let envelope = self.api.reorder(&order_id).await?;
        Self::envelope_content(&envelope)
    }

    // -------------------------------------------------------------------------
    // Health
    // -------------------------------------------------------------------------

    pub(super) async fn check_api_health(&self) -> Result<Vec<ToolContent>, ServerError> {
        match self.api.health().await {
            Ok(envelope) => Self::envelope_content(&envelope),
            Err(e) if e.is_connect() => {
                warn!(error = %e, "API health check could not reach the server");
                let envelope =
                    serde_json::to_value(ApiEnvelope::<Value>::failure(API_UNAVAILABLE_MSG))?;
                Self::envelope_content(&envelope)
            }
            Err(e) => Err(e.into()),
        }
    }
}
