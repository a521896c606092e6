//! Session middleware configuration.
//!
//! Sessions are in-memory and end with the browser session, the server-side
//! counterpart of per-tab session storage.
//!
//! A record is only created once a visitor likes a flower or fills a cart;
//! browsing never opens one. `MemoryStore` does not evict, so records live
//! until the process restarts and memory grows with the number of visitors
//! who wrote something since then.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "uf_session";

/// Create the session layer with an in-memory store.
///
/// Cookies are marked `Secure` when the base URL is HTTPS.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnSessionEnd)
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
