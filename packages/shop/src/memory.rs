use std::sync::{Arc, Mutex};

use crate::session::TokenStore;

/// In-memory TokenStore for tests and native builds.
///
/// Clones share the same slot, so a client and a session service built from
/// the same store see each other's writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_token() {
        let store = MemoryTokenStore::new();
        let other = store.clone();

        assert!(store.get().is_none());
        other.set("secret");
        assert_eq!(store.get().as_deref(), Some("secret"));

        store.clear();
        assert!(other.get().is_none());
    }

    #[test]
    fn test_with_token() {
        let store = MemoryTokenStore::with_token("t");
        assert_eq!(store.get().as_deref(), Some("t"));
    }
}
