//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// Maps to the commerce API's tracking status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

/// Payment mode for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    /// UPI payment (refundable on cancellation).
    Upi,
    /// Cash on delivery.
    Cod,
}

/// Dietary classification of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Dietary {
    #[default]
    Veg,
    NonVeg,
    Vegan,
}

/// Sort orders accepted by the catalog filter endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Rating,
    PriceLow,
    PriceHigh,
    Name,
    Newest,
    Discount,
}

impl SortBy {
    /// The query-parameter value the upstream filter endpoint expects.
    #[must_use]
    pub const fn as_query_value(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::PriceLow => "price_low",
            Self::PriceHigh => "price_high",
            Self::Name => "name",
            Self::Newest => "newest",
            Self::Discount => "discount",
        }
    }
}

/// Address kind as stored upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AddressType {
    #[default]
    Home,
    Work,
    Other,
}
