//! Session-related types.
//!
//! The visitor's cart and liked flowers live in the session as two
//! independent JSON blobs.

/// Session keys for visitor state.
pub mod keys {
    /// Serialized array of cart lines.
    pub const CART: &str = "cart";

    /// Serialized array of liked flower ids.
    pub const LIKED_FLOWERS: &str = "liked_flowers";
}
