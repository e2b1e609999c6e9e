//! Cart management tools.

use serde_json::json;

use super::Tool;

/// Get all cart tools.
#[must_use]
pub fn cart_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "view_cart".to_string(),
            description: "Get complete cart information: all items with quantities and \
                prices, bill summary (subtotal, delivery fee, taxes, total), estimated \
                delivery time, and the selected delivery address. Requires login."
                .to_string(),
            input_schema: json!({"type": "object", "properties": {}}),
        },
        add_to_cart_tool(),
        Tool {
            name: "update_cart_item".to_string(),
            description: "Update the quantity of an item already in the cart. Set \
                quantity to 0 to remove the item. Requires login."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "product_id": {
                        "type": "string",
                        "description": "The product's ID"
                    },
                    "quantity": {
                        "type": "integer",
                        "description": "New quantity (0 removes the item)",
                        "minimum": 0
                    }
                },
                "required": ["product_id", "quantity"]
            }),
        },
        Tool {
            name: "remove_from_cart".to_string(),
            description: "Remove an item completely from the cart. Requires login.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "product_id": {
                        "type": "string",
                        "description": "The product's ID"
                    }
                },
                "required": ["product_id"]
            }),
        },
        Tool {
            name: "clear_cart".to_string(),
            description: "Remove all items from the cart. Requires login.".to_string(),
            input_schema: json!({"type": "object", "properties": {}}),
        },
    ]
}

fn add_to_cart_tool() -> Tool {
    Tool {
        name: "add_to_cart".to_string(),
        description: "Add a product to the cart.\n\n\
            MANDATORY WORKFLOW:\n\
            1. First call with confirmed=false to show product details, price, and ETA \
            to the user\n\
            2. Only call with confirmed=true AFTER the user explicitly says 'Yes' or \
            'Confirm'\n\n\
            Requires login."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "product_id": {
                    "type": "string",
                    "description": "The product's ID"
                },
                "quantity": {
                    "type": "integer",
                    "description": "Number of items to add (max 10 per product)",
                    "default": 1,
                    "minimum": 1,
                    "maximum": 10
                },
                "confirmed": {
                    "type": "boolean",
                    "description": "Must be true only after user confirmation",
                    "default": false
                }
            },
            "required": ["product_id"]
        }),
    }
}
