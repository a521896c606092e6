//! Un Sold Flower Core - Domain types and storefront logic.
//!
//! This crate provides everything the storefront computes, independent of
//! how it is served:
//! - the static market and flower catalog
//! - cart arithmetic and dawn-delivery eligibility
//! - catalog filtering
//! - the liked-flowers set
//! - the delivery-method gate and checkout completion
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! sessions, no HTTP. Loading and saving visitor state is the storefront's
//! job; everything here operates on values handed to it.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, money, grades and delivery methods
//! - [`catalog`] - Static shops and flowers
//! - [`cart`] - Cart lines, totals and the delivery threshold
//! - [`filter`] - Search/filter predicates over the catalog
//! - [`likes`] - Liked-flower set
//! - [`delivery`] - Pickup/delivery gate
//! - [`checkout`] - Simulated checkout and receipts
//! - [`presentation`] - Cosmetic timing configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod delivery;
pub mod filter;
pub mod likes;
pub mod presentation;
pub mod types;

pub use cart::{Cart, CartItem, CartSummary, DAWN_DELIVERY_THRESHOLD};
pub use catalog::{Catalog, Flower, GradeCounts, Shop};
pub use checkout::{Checkout, CheckoutError, CheckoutPhase, Receipt};
pub use delivery::DeliveryGate;
pub use filter::{CATEGORIES, CatalogFilter};
pub use likes::{LikeToggle, LikedSet};
pub use types::*;
