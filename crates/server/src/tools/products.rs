//! Product discovery tools.

use serde_json::json;

use super::Tool;

/// Get all product discovery tools.
#[must_use]
pub fn product_tools() -> Vec<Tool> {
    vec![
        search_products_tool(),
        Tool {
            name: "get_categories".to_string(),
            description: "Get all available product categories. Useful for browsing \
                products by category (Fruits, Vegetables, Dairy, etc.)"
                .to_string(),
            input_schema: json!({"type": "object", "properties": {}}),
        },
        Tool {
            name: "get_products_by_category".to_string(),
            description: "Get products within a specific category. Use category_id from \
                get_categories()."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "category_id": {
                        "type": "string",
                        "description": "Category ID from get_categories()"
                    },
                    "page": {
                        "type": "integer",
                        "description": "Page number for pagination",
                        "default": 1
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Number of results per page",
                        "default": 10
                    },
                    "show_images": {
                        "type": "boolean",
                        "description": "If true (default), attaches images of the top 3 products",
                        "default": true
                    }
                },
                "required": ["category_id"]
            }),
        },
        filter_products_tool(),
        Tool {
            name: "get_product_details".to_string(),
            description: "Get detailed information about a specific product. Use this to \
                show full product details before adding to cart."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "product_id": {
                        "type": "string",
                        "description": "The product's ID"
                    },
                    "show_image": {
                        "type": "boolean",
                        "description": "If true, attaches the product image along with details",
                        "default": false
                    }
                },
                "required": ["product_id"]
            }),
        },
        Tool {
            name: "show_product_image".to_string(),
            description: "Display the image of a product. Use this to show users what a \
                product looks like."
                .to_string(),
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
            name: "get_alternative_products".to_string(),
            description: "Get alternative/similar products for a given product. Useful \
                when an item is out of stock or the user wants options."
                .to_string(),
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
            name: "get_featured_products".to_string(),
            description: "Get featured/popular products. Good for showing recommendations \
                or popular items."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "integer",
                        "description": "Number of products to return",
                        "default": 12
                    },
                    "show_images": {
                        "type": "boolean",
                        "description": "If true (default), attaches images of the top 3 products",
                        "default": true
                    }
                }
            }),
        },
    ]
}

fn search_products_tool() -> Tool {
    Tool {
        name: "search_products".to_string(),
        description: "Search for products by name, description, brand, or tags. Use this \
            for finding specific items like 'Coke', 'Milk', 'Tomatoes', etc.\n\n\
            RECIPE RULE: If the user mentioned a RECIPE or DISH, DO NOT call this tool \
            until you have asked and received answers for: 1. How many people? \
            2. Dietary preference? 3. Any allergies?\n\n\
            Only use this tool IMMEDIATELY for DIRECT item requests (e.g., 'Buy Coke', \
            'Get milk').\n\n\
            Returns product ID, name, price, MRP, unit, rating, and estimated delivery time."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search term (e.g., 'Coke', 'Milk', 'Tomatoes')"
                },
                "page": {
                    "type": "integer",
                    "description": "Page number for pagination",
                    "default": 1
                },
                "limit": {
                    "type": "integer",
                    "description": "Number of results per page",
                    "default": 10
                },
                "show_images": {
                    "type": "boolean",
                    "description": "If true (default), attaches images of the top 3 products found",
                    "default": true
                }
            },
            "required": ["query"]
        }),
    }
}

fn filter_products_tool() -> Tool {
    Tool {
        name: "filter_products".to_string(),
        description: "Filter products with multiple criteria: category, price range, \
            dietary preference, brand, and stock availability."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "category": {
                    "type": "string",
                    "description": "Category ID to filter by"
                },
                "min_price": {
                    "type": "number",
                    "description": "Minimum price in INR"
                },
                "max_price": {
                    "type": "number",
                    "description": "Maximum price in INR"
                },
                "dietary": {
                    "type": "string",
                    "enum": ["veg", "non_veg", "vegan"],
                    "description": "Dietary preference"
                },
                "brand": {
                    "type": "string",
                    "description": "Brand name to filter by"
                },
                "in_stock": {
                    "type": "boolean",
                    "description": "Only show in-stock items",
                    "default": true
                },
                "sort_by": {
                    "type": "string",
                    "enum": ["rating", "price_low", "price_high", "name", "newest", "discount"],
                    "description": "Sort order",
                    "default": "rating"
                },
                "page": {
                    "type": "integer",
                    "description": "Page number for pagination",
                    "default": 1
                },
                "limit": {
                    "type": "integer",
                    "description": "Number of results per page",
                    "default": 10
                },
                "show_images": {
                    "type": "boolean",
                    "description": "If true (default), attaches images of the top 3 products",
                    "default": true
                }
            }
        }),
    }
}
