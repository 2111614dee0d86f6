//! Platform glue: which [`shop::TokenStore`] backs the session, and timers.
//!
//! - **Web** (WASM + `web` feature): tab-scoped `sessionStorage` via
//!   [`shop::SessionStorageTokenStore`]
//! - **Native** (tests, `dx serve` without the web feature): an in-memory
//!   [`shop::MemoryTokenStore`]

use std::time::Duration;

use shop::ShopConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformTokenStore = shop::SessionStorageTokenStore;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformTokenStore = shop::MemoryTokenStore;

/// Create the token store for this platform, keyed by `auth.token_key`.
pub fn make_token_store(config: &ShopConfig) -> PlatformTokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        shop::SessionStorageTokenStore::new(config.auth.token_key.clone())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let _ = config;
        shop::MemoryTokenStore::new()
    }
}

/// Wait `ms` milliseconds without blocking the event loop.
pub async fn sleep_ms(ms: u32) {
    let duration = Duration::from_millis(u64::from(ms));
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop::TokenStore;

    #[test]
    fn test_native_store_starts_empty() {
        let store = make_token_store(&ShopConfig::default());
        assert_eq!(store.get(), None);
        store.set("t");
        assert_eq!(store.get().as_deref(), Some("t"));
    }

    #[tokio::test]
    async fn test_sleep_ms_elapses() {
        let start = std::time::Instant::now();
        sleep_ms(20).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
