//! Core types for Un Sold Flower.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod delivery_method;
pub mod grade;
pub mod id;
pub mod money;

pub use delivery_method::{DeliveryMethod, DeliveryMethodParseError};
pub use grade::{Grade, GradeParseError};
pub use id::*;
pub use money::Won;
