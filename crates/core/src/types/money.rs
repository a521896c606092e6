//! Korean won amounts.
//!
//! Prices in the catalog are whole won; there is no minor unit, so the
//! amount is a plain integer rather than a decimal.

use std::fmt;
use std::iter::Sum;

use serde::{Deserialize, Serialize};

/// An amount of Korean won.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Won(i64);

impl Won {
    /// Zero won.
    pub const ZERO: Self = Self(0);

    /// Create an amount from whole won.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// The amount in whole won.
    #[must_use]
    pub const fn amount(self) -> i64 {
        self.0
    }

    /// Unit price multiplied by a quantity.
    #[must_use]
    #[allow(clippy::cast_lossless)] // `i64::from` is not const
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as i64))
    }

    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Sum for Won {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl From<i64> for Won {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

/// Formats as `12,000원`.
impl fmt::Display for Won {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if self.0 < 0 {
            write!(f, "-{grouped}원")
        } else {
            write!(f, "{grouped}원")
        }
    }
}
