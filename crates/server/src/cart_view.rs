//! Cart view aggregation.
//!
//! `view_cart` composes two independent reads (cart contents and saved
//! addresses) into one response: per-line totals, the default address,
//! a checkout-readiness flag, and exactly one of four status messages.
//! Pure read-combine; nothing here mutates remote state.

use serde_json::{Value, json};

use crate::api::types::{Address, CartData, DEFAULT_DELIVERY_MINS};

/// Fallback free-delivery threshold when the bill block omits one.
const DEFAULT_FREE_DELIVERY_THRESHOLD: f64 = 199.0;

/// Status message when no default address is set.
pub const MSG_NO_ADDRESS: &str = "No delivery address set. Please add an address before checkout.";
/// Status message when the default address cannot be served.
pub const MSG_UNSERVICEABLE: &str = "Delivery not available at the selected address.";
/// Status message when the cart is empty.
pub const MSG_EMPTY_CART: &str = "Your cart is empty.";

/// Build the enhanced cart view from the two upstream reads.
///
/// Checkout readiness holds exactly when the cart is non-empty AND a
/// default address exists AND that address is serviceable.
#[must_use]
pub fn build_view(data: &CartData, addresses: &[Address]) -> Value {
    let default_address = addresses.iter().find(|a| a.is_default);

    let formatted_items: Vec<Value> = data
        .cart
        .items
        .iter()
        .map(|item| {
            json!({
                "product_id": item.product_id,
                "name": item.name,
                "quantity": item.quantity,
                "price_per_unit": item.price,
                "total_price": item.line_total(),
                "unit": item.unit,
                "image": item.image,
            })
        })
        .collect();

    let item_count = data.cart.items.len();
    let estimated_mins = DEFAULT_DELIVERY_MINS;

    let selected_address = default_address.map(|addr| {
        json!({
            "id": addr.id,
            "name": addr.name,
            "phone": addr.phone,
            "address_line1": addr.address_line1,
            "address_line2": addr.address_line2,
            "landmark": addr.landmark,
            "city": addr.city,
            "state": addr.state,
            "pincode": addr.pincode,
            "type": addr.address_type,
            "is_serviceable": addr.is_serviceable,
        })
    });

    let ready_for_checkout =
        item_count > 0 && default_address.is_some_and(|a| a.is_serviceable);

    let message = match default_address {
        None => MSG_NO_ADDRESS.to_string(),
        Some(addr) if !addr.is_serviceable => MSG_UNSERVICEABLE.to_string(),
        Some(addr) => {
            if item_count == 0 {
                MSG_EMPTY_CART.to_string()
            } else {
                let city = addr.city.as_deref().unwrap_or("your address");
                format!("Ready for checkout! Delivery to {city} in ~{estimated_mins} mins.")
            }
        }
    };

    let free_delivery_threshold = data_bill_number(data, "freeDeliveryThreshold")
        .unwrap_or(DEFAULT_FREE_DELIVERY_THRESHOLD);
    let amount_to_free_delivery = data_bill_number(data, "amountToFreeDelivery").unwrap_or(0.0);

    json!({
        "success": true,
        "data": {
            "cart": {
                "items": formatted_items,
                "total_items": data.cart.total_items.unwrap_or(item_count as u64),
                "item_count": item_count,
            },
            "bill": data.bill,
            "delivery": {
                "estimated_mins": estimated_mins,
                "estimated_time": format!("~{estimated_mins} minutes"),
                "free_delivery_threshold": free_delivery_threshold,
                "amount_to_free_delivery": amount_to_free_delivery,
            },
            "selected_address": selected_address,
            "has_address": default_address.is_some(),
            "ready_for_checkout": ready_for_checkout,
            "message": message,
        }
    })
}

fn data_bill_number(data: &CartData, key: &str) -> Option<f64> {
    data.bill.get(key).and_then(Value::as_f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart_data(items: Value, bill: Value) -> CartData {
        serde_json::from_value(json!({"cart": {"items": items}, "bill": bill})).expect("cart data")
    }

    fn address(is_default: bool, is_serviceable: bool) -> Address {
        serde_json::from_value(json!({
            "_id": "a1",
            "city": "Bengaluru",
            "isDefault": is_default,
            "isServiceable": is_serviceable,
        }))
        .expect("address")
    }

    fn one_item() -> Value {
        json!([{"productId": "p1", "name": "Milk", "price": 30.0, "quantity": 2}])
    }

    #[test]
    fn test_line_totals_and_counts() {
        let view = build_view(&cart_data(one_item(), json!({})), &[address(true, true)]);
        let item = &view["data"]["cart"]["items"][0];
        assert_eq!(item["total_price"], 60.0);
        assert_eq!(view["data"]["cart"]["item_count"], 1);
    }

    #[test]
    fn test_ready_when_cart_and_serviceable_default_address() {
        let view = build_view(&cart_data(one_item(), json!({})), &[address(true, true)]);
        assert_eq!(view["data"]["ready_for_checkout"], true);
        assert_eq!(view["data"]["has_address"], true);
        let message = view["data"]["message"].as_str().expect("message");
        assert!(message.starts_with("Ready for checkout!"));
        assert!(message.contains("Bengaluru"));
    }

    #[test]
    fn test_not_ready_without_any_address() {
        let view = build_view(&cart_data(one_item(), json!({})), &[]);
        assert_eq!(view["data"]["ready_for_checkout"], false);
        assert_eq!(view["data"]["has_address"], false);
        assert_eq!(view["data"]["message"], MSG_NO_ADDRESS);
        assert!(view["data"]["selected_address"].is_null());
    }

    #[test]
    fn test_non_default_address_does_not_count() {
        let view = build_view(&cart_data(one_item(), json!({})), &[address(false, true)]);
        assert_eq!(view["data"]["ready_for_checkout"], false);
        assert_eq!(view["data"]["message"], MSG_NO_ADDRESS);
    }

    #[test]
    fn test_not_ready_when_address_unserviceable() {
        let view = build_view(&cart_data(one_item(), json!({})), &[address(true, false)]);
        assert_eq!(view["data"]["ready_for_checkout"], false);
        assert_eq!(view["data"]["message"], MSG_UNSERVICEABLE);
    }

    #[test]
    fn test_not_ready_when_cart_empty() {
        let view = build_view(&cart_data(json!([]), json!({})), &[address(true, true)]);
        assert_eq!(view["data"]["ready_for_checkout"], false);
        assert_eq!(view["data"]["message"], MSG_EMPTY_CART);
    }

    #[test]
    fn test_bill_values_forwarded_with_defaults() {
        let view = build_view(
            &cart_data(one_item(), json!({"freeDeliveryThreshold": 149, "amountToFreeDelivery": 89})),
            &[address(true, true)],
        );
        assert_eq!(view["data"]["delivery"]["free_delivery_threshold"], 149.0);
        assert_eq!(view["data"]["delivery"]["amount_to_free_delivery"], 89.0);

        let view = build_view(&cart_data(one_item(), json!({})), &[address(true, true)]);
        assert_eq!(
            view["data"]["delivery"]["free_delivery_threshold"],
            DEFAULT_FREE_DELIVERY_THRESHOLD
        );
    }

    #[test]
    fn test_messages_are_mutually_exclusive() {
        // Unserviceable default address takes precedence over the empty cart.
        let view = build_view(&cart_data(json!([]), json!({})), &[address(true, false)]);
        assert_eq!(view["data"]["message"], MSG_UNSERVICEABLE);
    }
}
