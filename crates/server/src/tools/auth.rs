//! Authentication tools.

use serde_json::json;

use super::Tool;

/// Get all authentication tools.
#[must_use]
pub fn auth_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "login".to_string(),
            description: "Login to a Minutemart account. Required before cart, checkout, \
                and order operations. Returns user info and stores the session token."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "email": {
                        "type": "string",
                        "description": "Account email address"
                    },
                    "password": {
                        "type": "string",
                        "description": "Account password"
                    }
                },
                "required": ["email", "password"]
            }),
        },
        Tool {
            name: "register".to_string(),
            description: "Register a new Minutemart account. Phone should be a valid \
                10-digit Indian mobile number starting with 6-9. Password must be at \
                least 6 characters."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "email": {
                        "type": "string",
                        "description": "Account email address"
                    },
                    "password": {
                        "type": "string",
                        "description": "Password (min 6 characters)"
                    },
                    "name": {
                        "type": "string",
                        "description": "Full name"
                    },
                    "phone": {
                        "type": "string",
                        "description": "10-digit mobile number"
                    }
                },
                "required": ["email", "password", "name", "phone"]
            }),
        },
        Tool {
            name: "get_current_user".to_string(),
            description: "Get the currently logged-in user's profile information.".to_string(),
            input_schema: json!({"type": "object", "properties": {}}),
        },
    ]
}
