//! Checkout and payment tools.

use serde_json::json;

use super::Tool;

/// Get all checkout tools.
#[must_use]
pub fn checkout_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "proceed_to_checkout".to_string(),
            description: "Create an order from the current cart contents. Validates cart \
                items and creates a pending order. Returns order details including order \
                ID, items, and total amount. Requires login."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "address_id": {
                        "type": "string",
                        "description": "The delivery address ID to use"
                    }
                },
                "required": ["address_id"]
            }),
        },
        Tool {
            name: "set_payment_mode".to_string(),
            description: "Set the payment method for an order: 'upi' for UPI payment or \
                'cod' for Cash on Delivery. Requires login."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "order_id": {
                        "type": "string",
                        "description": "The order's ID"
                    },
                    "payment_mode": {
                        "type": "string",
                        "enum": ["upi", "cod"],
                        "description": "Payment method"
                    }
                },
                "required": ["order_id", "payment_mode"]
            }),
        },
        Tool {
            name: "process_payment".to_string(),
            description: "Process payment and confirm the order. For UPI: returns UPI \
                payment link/QR code data. For COD: confirms the order directly. Clears \
                the cart upon successful payment. Requires login."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "order_id": {
                        "type": "string",
                        "description": "The order's ID"
                    }
                },
                "required": ["order_id"]
            }),
        },
    ]
}
