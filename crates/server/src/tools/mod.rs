//! Façade tool definitions organized by domain.
//!
//! Each tool maps one remote capability (search, cart mutation, checkout,
//! order tracking) onto one outbound HTTP call, with light response
//! reshaping. Tools share nothing but the client's session credential.
//!
//! The cart-mutation confirmation gate is not an executor-level
//! interception: `add_to_cart` itself carries a `confirmed` parameter and
//! the agent re-submits full intent for the second phase (stateless
//! two-phase protocol).

mod addresses;
mod auth;
mod cart;
mod checkout;
mod orders;
mod products;

pub use addresses::address_tools;
pub use auth::auth_tools;
pub use cart::cart_tools;
pub use checkout::checkout_tools;
pub use orders::order_tools;
pub use products::product_tools;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::instrument;

use crate::api::ApiClient;
use crate::error::ServerError;
use crate::mcp::types::ToolContent;

/// A tool definition exposed to the agent host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    /// Name of the tool.
    pub name: String,
    /// Description of what the tool does.
    pub description: String,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: Value,
}

/// Get all tools (28 total) in a stable order: discovery first, then the
/// session and transactional domains.
#[must_use]
pub fn all_tools() -> Vec<Tool> {
    let mut tools = Vec::with_capacity(28);
    tools.extend(auth_tools());
    tools.extend(product_tools());
    tools.extend(cart_tools());
    tools.extend(address_tools());
    tools.extend(checkout_tools());
    tools.extend(order_tools());
    tools.push(health_tool());
    tools
}

/// Get a tool by name.
#[must_use]
pub fn get_tool_by_name(name: &str) -> Option<Tool> {
    all_tools().into_iter().find(|t| t.name == name)
}

fn health_tool() -> Tool {
    Tool {
        name: "check_api_health".to_string(),
        description: "Check if the Minutemart API server is running and accessible.".to_string(),
        input_schema: json!({"type": "object", "properties": {}}),
    }
}

/// Executor for façade tools.
///
/// Maps tool names to commerce API calls. Image content, when attached,
/// precedes the structured JSON text content in the returned sequence.
pub struct ToolExecutor<'a> {
    api: &'a ApiClient,
}

impl<'a> ToolExecutor<'a> {
    /// Create a new tool executor.
    #[must_use]
    pub const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Execute a tool and return its content sequence.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown tools, missing required parameters, or
    /// upstream failures that the tool's contract does not absorb.
    #[instrument(skip(self, input), fields(tool_name = %name))]
    pub async fn execute(
        &self,
        name: &str,
        input: &Value,
    ) -> Result<Vec<ToolContent>, ServerError> {
        match name {
            // Auth
            "login" => self.login(input).await,
            "register" => self.register(input).await,
            "get_current_user" => self.get_current_user().await,

            // Product discovery
            "search_products" => self.search_products(input).await,
            "get_categories" => self.get_categories().await,
            "get_products_by_category" => self.get_products_by_category(input).await,
            "filter_products" => self.filter_products(input).await,
            "get_product_details" => self.get_product_details(input).await,
            "show_product_image" => self.show_product_image(input).await,
            "get_alternative_products" => self.get_alternative_products(input).await,
            "get_featured_products" => self.get_featured_products(input).await,

            // Cart
            "view_cart" => self.view_cart().await,
            "add_to_cart" => self.add_to_cart(input).await,
            "update_cart_item" => self.update_cart_item(input).await,
            "remove_from_cart" => self.remove_from_cart(input).await,
            "clear_cart" => self.clear_cart().await,

            // Addresses
            "get_addresses" => self.get_addresses().await,
            "create_address" => self.create_address(input).await,
            "set_default_address" => self.set_default_address(input).await,

            // Checkout & payment
            "proceed_to_checkout" => self.proceed_to_checkout(input).await,
            "set_payment_mode" => self.set_payment_mode(input).await,
            "process_payment" => self.process_payment(input).await,

            // Order tracking
            "get_order_history" => self.get_order_history(input).await,
            "get_order_details" => self.get_order_details(input).await,
            "track_order" => self.track_order(input).await,
            "cancel_order" => self.cancel_order(input).await,
            "reorder" => self.reorder(input).await,

            // Health
            "check_api_health" => self.check_api_health().await,

            _ => Err(ServerError::UnknownTool(name.to_string())),
        }
    }

    /// Wrap a raw envelope as a single text content item.
    fn envelope_content(envelope: &Value) -> Result<Vec<ToolContent>, ServerError> {
        Ok(vec![ToolContent::json(envelope)?])
    }
}

// Parameter extraction helpers shared by the executor impls.

fn require_str<'v>(input: &'v Value, field: &str) -> Result<&'v str, ServerError> {
    input[field]
        .as_str()
        .ok_or_else(|| ServerError::InvalidParams(format!("missing required field: {field}")))
}

fn opt_str(input: &Value, field: &str) -> Option<String> {
    input[field].as_str().map(ToString::to_string)
}

fn u32_or(input: &Value, field: &str, default: u32) -> u32 {
    input[field]
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(default)
}

fn bool_or(input: &Value, field: &str, default: bool) -> bool {
    input[field].as_bool().unwrap_or(default)
}

// Include the executor implementations.
mod cart_executor;
mod executor;
mod product_executor;
