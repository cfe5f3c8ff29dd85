//! Session Store
//!
//! Holds the bearer token in a single key-value slot.
//! No expiry tracking: the token lives until logout.

use std::sync::Arc;

use super::traits::KeyValueStore;
use crate::domain::DomainResult;

/// Fixed key of the token slot
pub const TOKEN_KEY: &str = "token";

#[derive(Clone)]
pub struct SessionStore {
    kv: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    pub async fn get(&self) -> DomainResult<Option<String>> {
        Ok(self.kv.get(TOKEN_KEY).await?.filter(|t| !t.is_empty()))
    }

    pub async fn set(&self, token: &str) -> DomainResult<()> {
        self.kv.set(TOKEN_KEY, token).await
    }

    pub async fn clear(&self) -> DomainResult<()> {
        self.kv.remove(TOKEN_KEY).await
    }

    /// Token for an outgoing request. A read failure is logged and the
    /// request goes out unauthenticated.
    pub async fn bearer(&self) -> Option<String> {
        match self.get().await {
            Ok(token) => token,
            Err(e) => {
                log::warn!("Could not read session token: {}", e);
                None
            }
        }
    }
}
