//! # Browser token store — tab-scoped `sessionStorage`
//!
//! [`SessionStorageTokenStore`] is the [`TokenStore`] used on the **web
//! platform**. The token lives under a single key (default `"authToken"`) in the
//! tab's `sessionStorage`, so it survives reloads but not closing the tab.
//!
//! ## Error handling
//!
//! Storage access can fail (private browsing, disabled storage). Reads degrade
//! to "no token", which the views treat as logged out; writes are dropped.

use web_sys::Storage;

use crate::session::TokenStore;

/// `sessionStorage`-backed TokenStore.
#[derive(Clone, Debug)]
pub struct SessionStorageTokenStore {
    key: String,
}

impl SessionStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.session_storage().ok()?
    }
}

impl TokenStore for SessionStorageTokenStore {
    fn get(&self) -> Option<String> {
        let token = Self::storage()?.get_item(&self.key).ok()??;
        let token = token.trim().to_string();
        (!token.is_empty()).then_some(token)
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(&self.key, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
