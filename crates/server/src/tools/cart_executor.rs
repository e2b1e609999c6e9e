//! Executor implementations for the cart domain, including the two-phase
//! add-to-cart confirmation gate and the post-add recommendation hook.

use minutemart_core::ProductId;
use serde_json::{Value, json};
use tracing::debug;

use crate::api::ApiError;
use crate::cart_view;
use crate::error::ServerError;
use crate::images::fetch_image;
use crate::mcp::types::ToolContent;
use crate::recommend;

use super::{ToolExecutor, bool_or, require_str, u32_or};

impl ToolExecutor<'_> {
    /// Compose cart contents and saved addresses into the enhanced view.
    pub(super) async fn view_cart(&self) -> Result<Vec<ToolContent>, ServerError> {
        let envelope = self.api.cart_raw().await?;
        if envelope["success"] != true {
            return Self::envelope_content(&envelope);
        }
        let cart_data = crate::api::ApiClient::data_from_envelope(envelope)?;

        // A failing address read degrades to "no addresses": the cart view
        // must still come back. Transport failures propagate as usual.
        let addresses = match self.api.addresses().await {
            Ok(addresses) => addresses,
            Err(ApiError::Upstream(_) | ApiError::Parse(_)) => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        let view = cart_view::build_view(&cart_data, &addresses);
        Self::envelope_content(&view)
    }

    /// Two-phase cart add.
    ///
    /// `confirmed=false` returns a proposal without mutating anything;
    /// `confirmed=true` issues exactly one mutating request and then runs
    /// the best-effort recommendation derivation.
    pub(super) async fn add_to_cart(&self, input: &Value) -> Result<Vec<ToolContent>, ServerError> {
        let product_id = ProductId::new(require_str(input, "product_id")?);
        let quantity = u32_or(input, "quantity", 1);
        let confirmed = bool_or(input, "confirmed", false);

        if confirmed {
            self.add_confirmed(&product_id, quantity).await
        } else {
            self.propose_add(&product_id, quantity).await
        }
    }

    pub(super) async fn update_cart_item(
        &self,
        input: &Value,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let product_id = ProductId::new(require_str(input, "product_id")?);
        let quantity = input["quantity"]
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| {
                ServerError::InvalidParams("missing required field: quantity".to_string())
            })?;
        let envelope = self.api.update_cart_item(&product_id, quantity).await?;
        Self::envelope_content(&envelope)
    }

    pub(super) async fn remove_from_cart(
        &self,
        input: &Value,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let product_id = ProductId::new(require_str(input, "product_id")?);
        let envelope = self.api.remove_cart_item(&product_id).await?;
        Self::envelope_content(&envelope)
    }

    pub(super) async fn clear_cart(&self) -> Result<Vec<ToolContent>, ServerError> {
        let envelope = self.api.clear_cart().await?;
        Self::envelope_content(&envelope)
    }

    /// Phase one: fetch product detail and return a proposal with a literal
    /// yes/no question. No remote state is touched.
    async fn propose_add(
        &self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Vec<ToolContent>, ServerError> {
        let envelope = self.api.product_detail_raw(product_id).await?;
        if envelope["success"] != true {
            return Self::envelope_content(&envelope);
        }

        let raw_product = envelope["data"]["product"].clone();
        let product: crate::api::types::Product = serde_json::from_value(raw_product.clone())
            .map_err(|e| ApiError::Parse(format!("invalid product payload: {e}")))?;

        let message = format!(
            "**{}** ({})\n\n\
             Price: ₹{} (MRP: ₹{}, {}% off)\n\
             Rating: {}/5 ({} reviews)\n\
             Delivery: ~{} minutes\n\n\
             Shall I add {} item(s) to your cart? (Say 'Yes' to confirm)",
            product.name,
            product.unit.as_deref().unwrap_or("1 unit"),
            product.price,
            product.mrp,
            product.discount(),
            product.rating.unwrap_or(0.0),
            product.review_count,
            product.delivery_mins(),
            quantity,
        );

        let proposal = json!({
            "awaiting_confirmation": true,
            "message": message,
            "product_id": product_id,
            "product": raw_product,
        });

        let mut contents = Vec::new();
        if let Some(image) = fetch_image(self.api.http(), product.image.as_deref()).await {
            contents.push(image);
        }
        contents.push(ToolContent::json(&proposal)?);
        Ok(contents)
    }

    /// Phase two: the single mutating request, followed by best-effort
    /// recommendation derivation on success.
    async fn add_confirmed(
        &self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Vec<ToolContent>, ServerError> {
        // Product name for the recommendation teaser; failures fall back to
        // a generic label rather than blocking the add.
        let product_name = match self.api.product_detail(product_id).await {
            Ok(product) => product.name,
            Err(e) => {
                debug!(error = %e, "could not resolve product name before add");
                "this item".to_string()
            }
        };

        let mut result = self.api.add_cart_item(product_id, quantity).await?;

        if result["success"] == true {
            match recommend::derive(self.api, product_id, &product_name).await {
                Some(recommendation) => {
                    result["recommendation"] = serde_json::to_value(&recommendation)?;
                    result["has_recommendation"] = Value::Bool(true);
                }
                None => {
                    result["has_recommendation"] = Value::Bool(false);
                }
            }
        }

        Self::envelope_content(&result)
    }
}
