//! Pickup/delivery selection gated by dawn-delivery eligibility.
//!
//! Two states: `Pickup` (initial) and `Delivery`. Delivery can only be
//! entered while the cart is eligible, and losing eligibility forces the
//! selection back to pickup.

use crate::types::DeliveryMethod;

/// Delivery-method state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryGate {
    method: DeliveryMethod,
    eligible: bool,
}

impl DeliveryGate {
    /// A gate in the initial `Pickup` state.
    #[must_use]
    pub const fn new(eligible: bool) -> Self {
        Self {
            method: DeliveryMethod::Pickup,
            eligible,
        }
    }

    /// Build a gate and apply a requested method in one step.
    #[must_use]
    pub fn from_request(requested: Option<DeliveryMethod>, eligible: bool) -> Self {
        let mut gate = Self::new(eligible);
        if let Some(method) = requested {
            gate.select(method);
        }
        gate
    }

    /// Try to switch methods.
    ///
    /// Selecting `Delivery` while ineligible is a no-op and returns `false`.
    pub fn select(&mut self, method: DeliveryMethod) -> bool {
        if method.is_delivery() && !self.eligible {
            return false;
        }
        self.method = method;
        true
    }

    /// Update eligibility, falling back to pickup when it is lost.
    pub fn set_eligibility(&mut self, eligible: bool) {
        self.eligible = eligible;
        if !eligible && self.method.is_delivery() {
            self.method = DeliveryMethod::Pickup;
        }
    }

    #[must_use]
    pub const fn method(&self) -> DeliveryMethod {
        self.method
    }

    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        self.eligible
    }
}
