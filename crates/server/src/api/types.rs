//! Upstream commerce API response shapes.
//!
//! The remote API serializes with camelCase keys and MongoDB `_id`
//! identifiers. Deserialization is deliberately tolerant: every field the
//! façade merely forwards is defaulted, so a partially populated upstream
//! row never fails the whole call.

use chrono::{DateTime, Utc};
use minutemart_core::{AddressId, AddressType, Dietary, OrderId, OrderStatus, ProductId,
    discount_percent};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default delivery estimate when the upstream omits one.
pub const DEFAULT_DELIVERY_MINS: u32 = 15;

/// A catalog product as returned by search, filter, and detail endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub mrp: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: u64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub estimated_delivery_mins: Option<u32>,
    #[serde(default)]
    pub dietary_preference: Option<Dietary>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Fields the façade forwards but does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Product {
    /// Derived discount percentage; never trusted from upstream.
    #[must_use]
    pub fn discount(&self) -> u32 {
        discount_percent(self.mrp, self.price)
    }

    /// Whether the product can currently be added to a cart.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Estimated delivery time with the quick-commerce default applied.
    #[must_use]
    pub fn delivery_mins(&self) -> u32 {
        self.estimated_delivery_mins.unwrap_or(DEFAULT_DELIVERY_MINS)
    }

    /// Flattened summary shape shared by all discovery tools.
    #[must_use]
    pub fn summary(&self) -> Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "price": self.price,
            "mrp": self.mrp,
            "discount_percent": self.discount(),
            "unit": self.unit,
            "rating": self.rating,
            "review_count": self.review_count,
            "estimated_delivery_mins": self.delivery_mins(),
            "in_stock": self.in_stock(),
            "dietary": self.dietary_preference.unwrap_or_default(),
            "brand": self.brand.clone().unwrap_or_default(),
            "image_url": self.image,
        })
    }
}

/// `data` payload of the product detail endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductData {
    pub product: Product,
}

/// `data` payload of the list-shaped product endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsData {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// A line in the current cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

const fn default_quantity() -> u32 {
    1
}

impl CartItem {
    /// Line total derived from unit price and quantity.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// The current cart.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total_items: Option<u64>,
}

/// `data` payload of the cart view endpoint. The bill block is forwarded
/// uninterpreted apart from the free-delivery fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartData {
    pub cart: Cart,
    #[serde(default)]
    pub bill: Value,
}

/// A line item inside a historical order.
///
/// Depending on the API version the product reference is either a flat
/// `productId` plus display fields, or an embedded `product` object.
/// Accessors below resolve whichever is present, flat fields first.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub product: Option<EmbeddedProduct>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Product object embedded in an order line by older API versions.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmbeddedProduct {
    #[serde(rename = "_id", default)]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl OrderItem {
    /// Resolve the product identifier from either representation.
    #[must_use]
    pub fn product_id(&self) -> Option<&ProductId> {
        self.product_id
            .as_ref()
            .or_else(|| self.product.as_ref().and_then(|p| p.id.as_ref()))
    }

    /// Resolve the display name from either representation.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or_else(|| self.product.as_ref().and_then(|p| p.name.as_deref()))
    }

    /// Resolve the unit price from either representation.
    #[must_use]
    pub fn unit_price(&self) -> Option<f64> {
        self.price
            .or_else(|| self.product.as_ref().and_then(|p| p.price))
    }

    /// Resolve the image reference from either representation.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image
            .as_deref()
            .or_else(|| self.product.as_ref().and_then(|p| p.image.as_deref()))
    }

    /// Resolve the unit label from either representation.
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.unit
            .as_deref()
            .or_else(|| self.product.as_ref().and_then(|p| p.unit.as_deref()))
    }
}

/// A historical order, consumed read-only by the recommendation deriver.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id")]
    pub id: OrderId,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// `data` payload of the order history endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersData {
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// A saved delivery address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(rename = "_id", alias = "id")]
    pub id: AddressId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub landmark: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(rename = "type", default)]
    pub address_type: Option<AddressType>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default = "default_serviceable")]
    pub is_serviceable: bool,
}

const fn default_serviceable() -> bool {
    true
}

/// `data` payload of the address list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressesData {
    #[serde(default)]
    pub addresses: Vec<Address>,
}

/// `data` payload of login/register, from which the bearer token is lifted.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthData {
    #[serde(default)]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_camel_case() {
        let json = r#"{
            "_id": "p1", "name": "Basmati Rice", "price": 180.0, "mrp": 240.0,
            "unit": "1 kg", "rating": 4.4, "reviewCount": 812, "stock": 34,
            "estimatedDeliveryMins": 12, "dietaryPreference": "veg",
            "brand": "Daawat", "image": "https://cdn.example/p1.jpg"
        }"#;
        let p: Product = serde_json::from_str(json).expect("deserialize");
        assert_eq!(p.id, "p1");
        assert_eq!(p.discount(), 25);
        assert!(p.in_stock());
        assert_eq!(p.delivery_mins(), 12);
    }

    #[test]
    fn test_product_sparse_row_uses_defaults() {
        let json = r#"{"id": "p2", "name": "Salt"}"#;
        let p: Product = serde_json::from_str(json).expect("deserialize");
        assert_eq!(p.discount(), 0);
        assert!(!p.in_stock());
        assert_eq!(p.delivery_mins(), DEFAULT_DELIVERY_MINS);
        let summary = p.summary();
        assert_eq!(summary["dietary"], "veg");
        assert_eq!(summary["in_stock"], false);
    }

    #[test]
    fn test_order_item_flat_vs_embedded() {
        let flat: OrderItem = serde_json::from_str(
            r#"{"productId": "p1", "name": "Milk", "price": 30.0}"#,
        )
        .expect("deserialize");
        assert_eq!(flat.product_id().expect("id"), &ProductId::new("p1"));
        assert_eq!(flat.display_name(), Some("Milk"));

        let embedded: OrderItem = serde_json::from_str(
            r#"{"product": {"_id": "p2", "name": "Bread", "price": 45.0, "unit": "400 g"}}"#,
        )
        .expect("deserialize");
        assert_eq!(embedded.product_id().expect("id"), &ProductId::new("p2"));
        assert_eq!(embedded.display_name(), Some("Bread"));
        assert_eq!(embedded.unit_price(), Some(45.0));
        assert_eq!(embedded.unit(), Some("400 g"));
    }

    #[test]
    fn test_order_item_flat_fields_win() {
        let item: OrderItem = serde_json::from_str(
            r#"{"productId": "flat", "name": "Flat", "product": {"_id": "embedded", "name": "Embedded"}}"#,
        )
        .expect("deserialize");
        assert_eq!(item.product_id().expect("id"), &ProductId::new("flat"));
        assert_eq!(item.display_name(), Some("Flat"));
    }

    #[test]
    fn test_cart_item_line_total() {
        let item: CartItem = serde_json::from_str(
            r#"{"productId": "p1", "name": "Eggs", "price": 72.0, "quantity": 3}"#,
        )
        .expect("deserialize");
        assert!((item.line_total() - 216.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_address_serviceable_defaults_true() {
        let addr: Address = serde_json::from_str(
            r#"{"_id": "a1", "city": "Bengaluru", "isDefault": true}"#,
        )
        .expect("deserialize");
        assert!(addr.is_serviceable);
        assert!(addr.is_default);
    }
}
