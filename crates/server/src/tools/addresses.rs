//! Delivery address tools.

use serde_json::json;

use super::Tool;

/// Get all address tools.
#[must_use]
pub fn address_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "get_addresses".to_string(),
            description: "Get all saved delivery addresses for the user. Requires login."
                .to_string(),
            input_schema: json!({"type": "object", "properties": {}}),
        },
        create_address_tool(),
        Tool {
            name: "set_default_address".to_string(),
            description: "Set an address as the default delivery address. Requires login."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "address_id": {
                        "type": "string",
                        "description": "The address ID"
                    }
                },
                "required": ["address_id"]
            }),
        },
    ]
}

fn create_address_tool() -> Tool {
    Tool {
        name: "create_address".to_string(),
        description: "Create a new delivery address. Requires login.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Recipient name"
                },
                "phone": {
                    "type": "string",
                    "description": "10-digit phone number"
                },
                "address_line1": {
                    "type": "string",
                    "description": "Street address"
                },
                "city": {
                    "type": "string",
                    "description": "City name"
                },
                "state": {
                    "type": "string",
                    "description": "State name"
                },
                "pincode": {
                    "type": "string",
                    "description": "6-digit postal code"
                },
                "address_type": {
                    "type": "string",
                    "enum": ["home", "work", "other"],
                    "description": "Address kind",
                    "default": "home"
                },
                "address_line2": {
                    "type": "string",
                    "description": "Additional address info (optional)"
                },
                "landmark": {
                    "type": "string",
                    "description": "Nearby landmark (optional)"
                },
                "is_default": {
                    "type": "boolean",
                    "description": "Set as default address",
                    "default": false
                }
            },
            "required": ["name", "phone", "address_line1", "city", "state", "pincode"]
        }),
    }
}
