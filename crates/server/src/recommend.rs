//! "Frequently bought together" recommendation derivation.
//!
//! After a confirmed cart-add succeeds, the user's recent order history is
//! scanned for products that co-occur with the just-added one. The single
//! most frequent co-purchase comes back enriched with live catalog data.
//!
//! Derivation is strictly best-effort: any failure while fetching history
//! or refreshing the winner produces "no recommendation", never an error,
//! and never affects the outcome of the cart-add itself.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

use minutemart_core::ProductId;

use crate::api::ApiClient;
use crate::api::types::Order;

/// How many recent orders to scan.
pub const HISTORY_LIMIT: u32 = 50;

/// Tag carried on every recommendation payload.
pub const RECOMMENDATION_KIND: &str = "frequently_bought_together";

/// A co-purchased product with its occurrence count and the first-seen
/// snapshot of its display attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct CoPurchase {
    pub product_id: ProductId,
    pub count: u32,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub unit: Option<String>,
}

/// A derived recommendation, ready to attach to a cart-add response.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: String,
    pub product: Value,
    pub times_bought_together: u32,
    pub prompt: String,
}

/// Scan order history for the most frequent co-purchase of `target`.
///
/// Orders that do not contain the target are discarded. Across the rest,
/// every line item with a different product identifier increments that
/// product's count - once per appearance, with no per-order dedup. The
/// first-seen snapshot of display attributes is retained. Ties on count
/// resolve to whichever product was encountered first (the tally is
/// insertion-ordered, so selection is stable).
#[must_use]
pub fn tally_co_purchases(orders: &[Order], target: &ProductId) -> Option<CoPurchase> {
    let mut tally: Vec<CoPurchase> = Vec::new();

    for order in orders {
        let contains_target = order
            .items
            .iter()
            .any(|item| item.product_id() == Some(target));
        if !contains_target {
            continue;
        }

        for item in &order.items {
            let Some(product_id) = item.product_id() else {
                continue;
            };
            if product_id == target {
                continue;
            }

            if let Some(entry) = tally.iter_mut().find(|e| &e.product_id == product_id) {
                entry.count += 1;
            } else {
                tally.push(CoPurchase {
                    product_id: product_id.clone(),
                    count: 1,
                    name: item.display_name().map(ToString::to_string),
                    price: item.unit_price(),
                    image: item.image().map(ToString::to_string),
                    unit: item.unit().map(ToString::to_string),
                });
            }
        }
    }

    // Strictly-highest count wins; on equal counts the earlier entry is kept.
    tally.into_iter().fold(None, |best, candidate| match best {
        Some(current) if current.count >= candidate.count => Some(current),
        _ => Some(candidate),
    })
}

/// Derive a recommendation for a product that was just added to the cart.
///
/// Returns `None` when history is unavailable, no co-purchase exists, or
/// anything else goes wrong along the way.
pub async fn derive(
    api: &ApiClient,
    added_id: &ProductId,
    added_name: &str,
) -> Option<Recommendation> {
    let orders = match api.order_history(1, HISTORY_LIMIT).await {
        Ok(orders) => orders,
        Err(e) => {
            debug!(error = %e, "order history unavailable, skipping recommendation");
            return None;
        }
    };

    let top = tally_co_purchases(&orders, added_id)?;
    let message = format!("Customers who bought **{added_name}** also frequently bought:");

    // Refresh live price, stock, and ETA; fall back to the history snapshot
    // (without a discount field) if the catalog lookup fails.
    let (product, prompt) = match api.product_detail(&top.product_id).await {
        Ok(live) => {
            let prompt = format!(
                "Would you like to add **{}** (₹{}) to your cart as well?",
                live.name, live.price
            );
            let product = json!({
                "id": top.product_id,
                "name": live.name,
                "price": live.price,
                "mrp": live.mrp,
                "discount_percent": live.discount(),
                "unit": live.unit,
                "image": live.image,
                "in_stock": live.in_stock(),
                "estimated_delivery_mins": live.delivery_mins(),
            });
            (product, prompt)
        }
        Err(e) => {
            debug!(error = %e, product_id = %top.product_id, "live refresh failed, using cached snapshot");
            let name = top.name.clone().unwrap_or_else(|| "this item".to_string());
            let price_note = top
                .price
                .map(|p| format!(" (₹{p})"))
                .unwrap_or_default();
            let prompt =
                format!("Would you like to add **{name}**{price_note} to your cart as well?");
            let product = json!({
                "id": top.product_id,
                "name": top.name,
                "price": top.price,
                "unit": top.unit,
                "image": top.image,
            });
            (product, prompt)
        }
    };

    Some(Recommendation {
        kind: RECOMMENDATION_KIND,
        message,
        product,
        times_bought_together: top.count,
        prompt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{Order, OrderItem};
    use minutemart_core::OrderId;

    fn item(product_id: &str, name: &str) -> OrderItem {
        OrderItem {
            product_id: Some(ProductId::new(product_id)),
            name: Some(name.to_string()),
            price: Some(10.0),
            ..OrderItem::default()
        }
    }

    fn order(id: &str, items: Vec<OrderItem>) -> Order {
        serde_json::from_value(serde_json::json!({"_id": id, "items": []}))
            .map(|mut o: Order| {
                o.items = items;
                o
            })
            .expect("order")
    }

    #[test]
    fn test_most_frequent_co_purchase_wins() {
        let a = "prod-a";
        let target = ProductId::new(a);
        let orders = vec![
            order("o1", vec![item(a, "A"), item("prod-b", "B")]),
            order("o2", vec![item(a, "A"), item("prod-b", "B"), item("prod-c", "C")]),
            order("o3", vec![item(a, "A"), item("prod-b", "B")]),
        ];
        let top = tally_co_purchases(&orders, &target).expect("recommendation");
        assert_eq!(top.product_id, "prod-b");
        assert_eq!(top.count, 3);
    }

    #[test]
    fn test_orders_without_target_are_discarded() {
        let target = ProductId::new("prod-a");
        let orders = vec![
            order("o1", vec![item("prod-b", "B"), item("prod-c", "C")]),
            order("o2", vec![item("prod-a", "A"), item("prod-c", "C")]),
        ];
        let top = tally_co_purchases(&orders, &target).expect("recommendation");
        // B only appears in an order without the target.
        assert_eq!(top.product_id, "prod-c");
        assert_eq!(top.count, 1);
    }

    #[test]
    fn test_target_itself_is_never_recommended() {
        let target = ProductId::new("prod-a");
        let orders = vec![order("o1", vec![item("prod-a", "A")])];
        assert!(tally_co_purchases(&orders, &target).is_none());
    }

    #[test]
    fn test_no_history_means_no_recommendation() {
        let target = ProductId::new("prod-a");
        assert!(tally_co_purchases(&[], &target).is_none());
    }

    #[test]
    fn test_tie_breaks_to_first_encountered() {
        let target = ProductId::new("prod-a");
        let orders = vec![
            order("o1", vec![item("prod-a", "A"), item("prod-b", "B"), item("prod-c", "C")]),
            order("o2", vec![item("prod-a", "A"), item("prod-c", "C"), item("prod-b", "B")]),
        ];
        // Both B and C have count 2; B was encountered first.
        let top = tally_co_purchases(&orders, &target).expect("recommendation");
        assert_eq!(top.product_id, "prod-b");
        assert_eq!(top.count, 2);
    }

    #[test]
    fn test_repeated_line_items_each_increment() {
        let target = ProductId::new("prod-a");
        // Two separate lines of the same co-purchase in one order both
        // count; there is no per-order dedup.
        let orders = vec![order(
            "o1",
            vec![item("prod-a", "A"), item("prod-b", "B"), item("prod-b", "B")],
        )];
        let top = tally_co_purchases(&orders, &target).expect("recommendation");
        assert_eq!(top.count, 2);
    }

    #[test]
    fn test_first_seen_snapshot_wins() {
        let target = ProductId::new("prod-a");
        let orders = vec![
            order("o1", vec![item("prod-a", "A"), item("prod-b", "Old Label")]),
            order("o2", vec![item("prod-a", "A"), item("prod-b", "New Label")]),
        ];
        let top = tally_co_purchases(&orders, &target).expect("recommendation");
        assert_eq!(top.name.as_deref(), Some("Old Label"));
        assert_eq!(top.count, 2);
    }

    #[test]
    fn test_items_without_ids_are_skipped() {
        let target = ProductId::new("prod-a");
        let anonymous = OrderItem {
            name: Some("No id".to_string()),
            ..OrderItem::default()
        };
        let orders = vec![order("o1", vec![item("prod-a", "A"), anonymous])];
        assert!(tally_co_purchases(&orders, &target).is_none());
    }

    #[test]
    fn test_recommendation_serializes_with_kind_tag() {
        let rec = Recommendation {
            kind: RECOMMENDATION_KIND,
            message: "m".into(),
            product: serde_json::json!({"id": "p"}),
            times_bought_together: 3,
            prompt: "p?".into(),
        };
        let value = serde_json::to_value(&rec).expect("serialize");
        assert_eq!(value["type"], "frequently_bought_together");
        assert_eq!(value["times_bought_together"], 3);
    }

    #[test]
    fn test_order_id_parse_helper() {
        let o = order("o9", vec![]);
        assert_eq!(o.id, OrderId::new("o9"));
    }
}
