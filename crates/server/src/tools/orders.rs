//! Order tracking tools.

use serde_json::json;

use super::Tool;

/// Get all order tracking tools.
#[must_use]
pub fn order_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "get_order_history".to_string(),
            description: "Get the user's order history: past orders with status, items, \
                and amounts. Requires login."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "page": {
                        "type": "integer",
                        "description": "Page number for pagination",
                        "default": 1
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Number of orders per page",
                        "default": 10
                    }
                }
            }),
        },
        Tool {
            name: "get_order_details".to_string(),
            description: "Get detailed information about a specific order. Requires login."
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
        Tool {
            name: "track_order".to_string(),
            description: "Get real-time order tracking status: current status (pending, \
                confirmed, preparing, out_for_delivery, delivered, cancelled), status \
                history with timestamps, rider info when out for delivery, and the \
                delivery countdown. Requires login."
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
        Tool {
            name: "cancel_order".to_string(),
            description: "Cancel an order. Can only be cancelled within 5 minutes of \
                placing and before delivery. Refund is initiated for UPI payments. \
                Requires login."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "order_id": {
                        "type": "string",
                        "description": "The order's ID"
                    },
                    "reason": {
                        "type": "string",
                        "description": "Optional cancellation reason"
                    }
                },
                "required": ["order_id"]
            }),
        },
        Tool {
            name: "reorder".to_string(),
            description: "Check availability of items from a previous order for \
                reordering. Returns available and unavailable items. Requires login."
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
