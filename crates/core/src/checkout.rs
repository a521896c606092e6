//! Simulated checkout.
//!
//! Payment always succeeds. Completing a checkout empties the cart and moves
//! to a terminal `Completed` phase that cannot be left or repeated.

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::cart::{Cart, CartItem, CartSummary};
use crate::delivery::DeliveryGate;
use crate::types::{DeliveryMethod, Won};

/// Errors starting or completing a checkout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Checkout is unavailable for an empty cart.
    #[error("cart is empty")]
    EmptyCart,
    /// The checkout already reached its terminal state.
    #[error("checkout already completed")]
    AlreadyCompleted,
}

/// Record of a completed (simulated) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub order_number: Uuid,
    pub method: DeliveryMethod,
    pub items: Vec<CartItem>,
    pub item_count: u32,
    pub items_total: Won,
    pub fee: Won,
    pub grand_total: Won,
    pub placed_at: DateTime<Utc>,
}

impl Receipt {
    /// First eight hex digits of the order number, for display.
    #[must_use]
    pub fn short_number(&self) -> String {
        self.order_number.simple().to_string().chars().take(8).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutPhase {
    Selecting,
    Completed(Receipt),
}

/// A checkout in progress for one cart.
#[derive(Debug, Clone)]
pub struct Checkout {
    summary: CartSummary,
    gate: DeliveryGate,
    phase: CheckoutPhase,
}

impl Checkout {
    /// Start checking out `cart`.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` if the cart has no lines.
    pub fn begin(cart: &Cart) -> Result<Self, CheckoutError> {
        let summary = cart.summary();
        if !summary.checkout_available {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(Self {
            summary,
            gate: DeliveryGate::new(summary.dawn_delivery_eligible),
            phase: CheckoutPhase::Selecting,
        })
    }

    /// Choose a fulfillment method; delivery is refused while ineligible.
    pub fn select_method(&mut self, method: DeliveryMethod) -> bool {
        self.gate.select(method)
    }

    #[must_use]
    pub const fn method(&self) -> DeliveryMethod {
        self.gate.method()
    }

    #[must_use]
    pub const fn summary(&self) -> &CartSummary {
        &self.summary
    }

    #[must_use]
    pub const fn dawn_delivery_eligible(&self) -> bool {
        self.gate.is_eligible()
    }

    /// Item total plus the selected method's fee.
    #[must_use]
    pub const fn payable_total(&self) -> Won {
        self.summary.total.saturating_add(self.method().fee())
    }

    #[must_use]
    pub const fn phase(&self) -> &CheckoutPhase {
        &self.phase
    }

    /// Pay (always succeeds) and clear the cart.
    ///
    /// Eligibility is re-checked against `cart` as it is now, so a delivery
    /// selection made against a stale total falls back to pickup.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::AlreadyCompleted` on a second call, and
    /// `CheckoutError::EmptyCart` if the cart was emptied in the meantime.
    pub fn complete(&mut self, cart: &mut Cart) -> Result<Receipt, CheckoutError> {
        if matches!(self.phase, CheckoutPhase::Completed(_)) {
            return Err(CheckoutError::AlreadyCompleted);
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.summary = cart.summary();
        self.gate.set_eligibility(self.summary.dawn_delivery_eligible);

        let method = self.method();
        let fee = method.fee();
        let receipt = Receipt {
            order_number: Uuid::new_v4(),
            method,
            items: cart.lines().to_vec(),
            item_count: self.summary.item_count,
            items_total: self.summary.total,
            fee,
            grand_total: self.summary.total.saturating_add(fee),
            placed_at: Utc::now(),
        };
        cart.clear();

        self.phase = CheckoutPhase::Completed(receipt.clone());
        Ok(receipt)
    }
}
