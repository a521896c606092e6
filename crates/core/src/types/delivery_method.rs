//! Fulfillment methods offered at checkout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::money::Won;

/// Flat surcharge for dawn delivery.
const DAWN_DELIVERY_FEE: Won = Won::new(3000);

/// How an order reaches the customer.
///
/// `Pickup` is always available. `Delivery` (dawn delivery) is gated behind
/// the cart threshold, see [`crate::delivery::DeliveryGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    #[default]
    Pickup,
    Delivery,
}

/// Error returned for an unknown delivery method string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid delivery method: {0}")]
pub struct DeliveryMethodParseError(pub String);

impl DeliveryMethod {
    /// Shipping fee charged on top of the item total.
    #[must_use]
    pub const fn fee(self) -> Won {
        match self {
            Self::Pickup => Won::ZERO,
            Self::Delivery => DAWN_DELIVERY_FEE,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Delivery => "delivery",
        }
    }

    /// Customer-facing name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pickup => "픽업",
            Self::Delivery => "새벽 배송",
        }
    }

    #[must_use]
    pub const fn is_delivery(self) -> bool {
        matches!(self, Self::Delivery)
    }
}

impl std::fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DeliveryMethod {
    type Err = DeliveryMethodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pickup" => Ok(Self::Pickup),
            "delivery" => Ok(Self::Delivery),
            _ => Err(DeliveryMethodParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pickup() {
        assert_eq!(DeliveryMethod::default(), DeliveryMethod::Pickup);
    }

    #[test]
    fn test_fees() {
        assert_eq!(DeliveryMethod::Pickup.fee(), Won::ZERO);
        assert_eq!(DeliveryMethod::Delivery.fee(), Won::new(3000));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "delivery".parse::<DeliveryMethod>().unwrap(),
            DeliveryMethod::Delivery
        );
        assert_eq!(
            "pickup".parse::<DeliveryMethod>().unwrap(),
            DeliveryMethod::Pickup
        );
        assert!("drone".parse::<DeliveryMethod>().is_err());
    }
}
