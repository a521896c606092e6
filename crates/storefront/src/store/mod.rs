//! Load/save boundary for per-visitor state.
//!
//! Handlers never touch the session directly. They load a [`VisitorState`]
//! once through a [`VisitorStore`], mutate it with the core types, and
//! persist the part they changed.
//!
//! Reads and writes of the two blobs are independent. A read-modify-write
//! is not atomic across concurrent requests from the same visitor.

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tower_sessions::Session;
use tracing::instrument;

use unsold_flower_core::{Cart, LikedSet};

use crate::models::session_keys;

/// Errors from the session backend itself.
///
/// A blob that is present but unreadable is not an error; it loads as empty.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session backend error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("failed to serialize {key}: {source}")]
    Serialize {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Persistence for a visitor's cart and liked flowers.
pub trait VisitorStore {
    fn load_cart(&self) -> impl Future<Output = Result<Cart, StoreError>> + Send;
    fn save_cart(&self, cart: &Cart) -> impl Future<Output = Result<(), StoreError>> + Send;
    fn clear_cart(&self) -> impl Future<Output = Result<(), StoreError>> + Send;
    fn load_liked(&self) -> impl Future<Output = Result<LikedSet, StoreError>> + Send;
    fn save_liked(&self, liked: &LikedSet)
    -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// [`VisitorStore`] backed by a `tower-sessions` session.
#[derive(Debug, Clone, Copy)]
pub struct SessionStore<'a> {
    session: &'a Session,
}

impl<'a> SessionStore<'a> {
    #[must_use]
    pub const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Read a blob, treating absent or malformed values as the default.
    async fn load_or_default<T>(&self, key: &'static str) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        let Some(value) = self.session.get_value(key).await? else {
            return Ok(T::default());
        };

        match serde_json::from_value(value) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding malformed session blob");
                Ok(T::default())
            }
        }
    }

    async fn save<T: Serialize + Sync>(&self, key: &'static str, value: &T) -> Result<(), StoreError> {
        let json =
            serde_json::to_value(value).map_err(|source| StoreError::Serialize { key, source })?;
        self.session.insert_value(key, json).await?;
        Ok(())
    }
}

impl VisitorStore for SessionStore<'_> {
    async fn load_cart(&self) -> Result<Cart, StoreError> {
        self.load_or_default(session_keys::CART).await
    }

    async fn save_cart(&self, cart: &Cart) -> Result<(), StoreError> {
        self.save(session_keys::CART, cart).await
    }

    async fn clear_cart(&self) -> Result<(), StoreError> {
        self.session
            .remove_value(session_keys::CART)
            .await
            .map(|_| ())
            .map_err(StoreError::from)
    }

    async fn load_liked(&self) -> Result<LikedSet, StoreError> {
        self.load_or_default(session_keys::LIKED_FLOWERS).await
    }

    async fn save_liked(&self, liked: &LikedSet) -> Result<(), StoreError> {
        self.save(session_keys::LIKED_FLOWERS, liked).await
    }
}

/// Everything the storefront remembers about one visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitorState {
    pub cart: Cart,
    pub liked: LikedSet,
}

impl VisitorState {
    /// Read both blobs from `store`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only when the session backend fails.
    #[instrument(skip(store))]
    pub async fn load(store: &impl VisitorStore) -> Result<Self, StoreError> {
        Ok(Self {
            cart: store.load_cart().await?,
            liked: store.load_liked().await?,
        })
    }

    /// Write the cart back, dropping the blob entirely once it is empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the session backend fails.
    pub async fn persist_cart(&self, store: &impl VisitorStore) -> Result<(), StoreError> {
        if self.cart.is_empty() {
            store.clear_cart().await
        } else {
            store.save_cart(&self.cart).await
        }
    }

    /// Write the liked set back.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the session backend fails.
    pub async fn persist_liked(&self, store: &impl VisitorStore) -> Result<(), StoreError> {
        store.save_liked(&self.liked).await
    }
}
