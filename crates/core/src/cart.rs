//! Shopping cart lines, totals and dawn-delivery eligibility.
//!
//! The cart is a plain ordered list of lines. Adding the same flower twice
//! creates two lines; quantities are never merged. Lines are addressed by
//! position, so the quantity controls on each rendered line act on exactly
//! that line.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{Flower, Shop};
use crate::types::{FlowerId, Won};

/// Minimum cart total that unlocks dawn delivery.
pub const DAWN_DELIVERY_THRESHOLD: Won = Won::new(10_000);

/// Waste diverted per stem sold, in kilograms.
const IMPACT_KG_PER_UNIT: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// One line in the cart.
///
/// Shop name, item name, price and image are copied from the catalog when the
/// line is created; they are not live references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: FlowerId,
    #[serde(rename = "shopName")]
    pub shop_name: String,
    pub name: String,
    /// Unit price.
    pub price: Won,
    #[serde(rename = "qty")]
    pub quantity: u32,
    #[serde(rename = "thumb")]
    pub image: String,
}

impl CartItem {
    /// A new line for a catalog product, quantity 1.
    #[must_use]
    pub fn from_product(flower: &Flower, shop: &Shop) -> Self {
        Self {
            id: flower.id,
            shop_name: shop.name.to_string(),
            name: flower.name.to_string(),
            price: flower.price,
            quantity: 1,
            image: flower.image.to_string(),
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub const fn line_total(&self) -> Won {
        self.price.times(self.quantity)
    }
}

/// Ordered collection of cart lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a line. Duplicates are kept as separate lines.
    pub fn add(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Adjust the quantity of one line, never going below 1.
    ///
    /// Returns `false` if `line` is out of range.
    pub fn change_quantity(&mut self, line: usize, delta: i32) -> bool {
        let Some(item) = self.items.get_mut(line) else {
            return false;
        };
        let adjusted = i64::from(item.quantity) + i64::from(delta);
        item.quantity = u32::try_from(adjusted.max(1)).unwrap_or(u32::MAX);
        true
    }

    /// Remove one line, returning it.
    pub fn remove(&mut self, line: usize) -> Option<CartItem> {
        (line < self.items.len()).then(|| self.items.remove(line))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn lines(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Won {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Derived totals, recomputed from the current lines.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary::compute(self.total(), self.item_count(), !self.is_empty())
    }
}

/// Totals and delivery progress derived from a cart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartSummary {
    pub total: Won,
    pub threshold: Won,
    /// `min(total / threshold, 1)`.
    pub progress: f64,
    pub dawn_delivery_eligible: bool,
    /// Amount still needed to reach the threshold, zero once reached.
    pub remaining: Won,
    /// Cosmetic waste-reduction figure: 0.5kg per unit, two decimals.
    pub impact_kg: Decimal,
    pub item_count: u32,
    /// Checkout can only start from a non-empty cart.
    pub checkout_available: bool,
}

impl CartSummary {
    #[allow(clippy::cast_precision_loss)] // won amounts are far below 2^52
    fn compute(total: Won, item_count: u32, checkout_available: bool) -> Self {
        let threshold = DAWN_DELIVERY_THRESHOLD;
        let progress = (total.amount() as f64 / threshold.amount() as f64).clamp(0.0, 1.0);
        let impact_kg = (IMPACT_KG_PER_UNIT * Decimal::from(item_count)).round_dp(2);

        Self {
            total,
            threshold,
            progress,
            dawn_delivery_eligible: total >= threshold,
            remaining: threshold.saturating_sub(total).max(Won::ZERO),
            impact_kg,
            item_count,
            checkout_available,
        }
    }

    /// Progress as a whole percentage for the gauge width.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to 0..=100
    pub fn progress_percent(&self) -> u8 {
        (self.progress * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn item(id: i32, price: i64, quantity: u32) -> CartItem {
        CartItem {
            id: FlowerId::new(id),
            shop_name: "테스트 상가".to_string(),
            name: format!("꽃 {id}"),
            price: Won::new(price),
            quantity,
            image: String::new(),
        }
    }

    fn cart_of(items: Vec<CartItem>) -> Cart {
        let mut cart = Cart::new();
        for i in items {
            cart.add(i);
        }
        cart
    }

    #[test]
    fn test_total_is_sum_of_price_times_quantity() {
        let cart = cart_of(vec![item(1, 4500, 2), item(3, 2000, 3), item(6, 1500, 1)]);
        assert_eq!(cart.total(), Won::new(4500 * 2 + 2000 * 3 + 1500));
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn test_empty_cart_summary() {
        let summary = Cart::new().summary();
        assert_eq!(summary.total, Won::ZERO);
        assert!(!summary.dawn_delivery_eligible);
        assert!(!summary.checkout_available);
        assert_eq!(summary.remaining, DAWN_DELIVERY_THRESHOLD);
        assert_eq!(summary.progress_percent(), 0);
        assert_eq!(summary.impact_kg, Decimal::ZERO);
    }

    #[test]
    fn test_eligible_at_exactly_threshold() {
        let summary = cart_of(vec![item(1, 10_000, 1)]).summary();
        assert!(summary.dawn_delivery_eligible);
        assert_eq!(summary.remaining, Won::ZERO);
        assert_eq!(summary.progress_percent(), 100);
    }

    #[test]
    fn test_not_eligible_just_below_threshold() {
        let summary = cart_of(vec![item(1, 9999, 1)]).summary();
        assert!(!summary.dawn_delivery_eligible);
        assert_eq!(summary.remaining, Won::new(1));
    }

    #[test]
    fn test_progress_caps_at_one() {
        let summary = cart_of(vec![item(5, 8000, 3)]).summary();
        assert!((summary.progress - 1.0).abs() < f64::EPSILON);
        assert_eq!(summary.progress_percent(), 100);
    }

    #[test]
    fn test_progress_ratio() {
        let summary = cart_of(vec![item(1, 4500, 1)]).summary();
        assert!((summary.progress - 0.45).abs() < 1e-9);
        assert_eq!(summary.progress_percent(), 45);
    }

    #[test]
    fn test_decrement_clamps_at_one() {
        let mut cart = cart_of(vec![item(1, 4500, 1)]);
        assert!(cart.change_quantity(0, -1));
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_increment_and_large_decrement() {
        let mut cart = cart_of(vec![item(1, 4500, 1)]);
        cart.change_quantity(0, 1);
        cart.change_quantity(0, 1);
        assert_eq!(cart.lines()[0].quantity, 3);
        cart.change_quantity(0, -10);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_change_quantity_out_of_range() {
        let mut cart = cart_of(vec![item(1, 4500, 1)]);
        assert!(!cart.change_quantity(5, 1));
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_duplicates_are_separate_lines() {
        let catalog = Catalog::standard();
        let (flower, shop) = catalog.product(FlowerId::new(1)).unwrap();
        let mut cart = Cart::new();
        cart.add(CartItem::from_product(flower, shop));
        cart.add(CartItem::from_product(flower, shop));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), Won::new(9000));

        cart.change_quantity(1, 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.lines()[1].quantity, 2);
    }

    #[test]
    fn test_remove_line() {
        let mut cart = cart_of(vec![item(1, 4500, 1), item(2, 5000, 1)]);
        let removed = cart.remove(0).unwrap();
        assert_eq!(removed.id, FlowerId::new(1));
        assert_eq!(cart.len(), 1);
        assert!(cart.remove(3).is_none());
    }

    #[test]
    fn test_impact_is_half_kg_per_unit() {
        let summary = cart_of(vec![item(1, 4500, 2), item(2, 5000, 1)]).summary();
        assert_eq!(summary.impact_kg, Decimal::new(15, 1));
        assert_eq!(summary.impact_kg.to_string(), "1.5");
    }

    #[test]
    fn test_persisted_field_names() {
        let cart = cart_of(vec![item(4, 3000, 2)]);
        let json = serde_json::to_value(&cart).unwrap();
        let line = &json[0];
        assert_eq!(line["id"], 4);
        assert_eq!(line["shopName"], "테스트 상가");
        assert_eq!(line["qty"], 2);
        assert_eq!(line["price"], 3000);
        assert!(line.get("thumb").is_some());
    }

    #[test]
    fn test_from_product_copies_catalog_fields() {
        let catalog = Catalog::standard();
        let (flower, shop) = catalog.product(FlowerId::new(4)).unwrap();
        let line = CartItem::from_product(flower, shop);
        assert_eq!(line.quantity, 1);
        assert_eq!(line.price, Won::new(3000));
        assert_eq!(line.shop_name, "양재동 화훼공판장");
        assert_eq!(line.image, flower.image);
    }
}
