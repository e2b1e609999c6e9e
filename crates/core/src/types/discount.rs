//! Discount derivation.
//!
//! The upstream catalog carries both a selling price and an MRP (maximum
//! retail price). The discount percentage shown to shoppers is always
//! derived locally from those two numbers, never trusted from upstream.

/// Compute the discount percentage for a product.
///
/// Returns `round((mrp - price) / mrp * 100)` when `mrp > price`, else 0.
/// Non-positive MRPs yield 0 so a malformed catalog row can never produce
/// a negative or divide-by-zero discount.
#[must_use]
pub fn discount_percent(mrp: f64, price: f64) -> u32 {
    if mrp > price && mrp > 0.0 {
        let pct = (mrp - price) / mrp * 100.0;
        // Percentages are bounded to [0, 100] here, so the cast is lossless.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            pct.round() as u32
        }
    } else {
        0
    }
}
