//! # Client configuration — `shop.toml`
//!
//! Settings the web client reads at start-up. The web package embeds its
//! `shop.toml` at compile time and parses it with [`ShopConfig::from_toml`];
//! a missing or empty section falls back to the defaults below.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://dev-project-ecommerce.upgrad.dev/api"
//!
//! [auth]
//! token_key = "authToken"        # sessionStorage key
//! # fallback_token = "..."       # used when sign-in returns no token
//!
//! [ui]
//! notice_duration_ms = 3000
//! redirect_delay_ms = 3000       # after add/edit/delete/sign-up
//! order_redirect_delay_ms = 2000 # after placing an order
//! placeholder_image = "https://placehold.jp/400x400.png"
//!
//! [[featured]]                   # home page carousel
//! id = "..."
//! name = "..."
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ShopConfig`] | Top-level config with TOML (de)serialisation. |
//! | [`ApiConfig`] | Remote API base URL. |
//! | [`AuthConfig`] | Token storage key and optional fallback token. |
//! | [`UiConfig`] | Notice and redirect timings, placeholder image. |

use serde::{Deserialize, Serialize};

use crate::models::Product;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub featured: Vec<Product>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://dev-project-ecommerce.upgrad.dev/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
    /// Stored in place of the real token when sign-in succeeds without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_token: Option<String>,
}

fn default_token_key() -> String {
    "authToken".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            fallback_token: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_notice_duration")]
    pub notice_duration_ms: u32,
    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_ms: u32,
    #[serde(default = "default_order_redirect_delay")]
    pub order_redirect_delay_ms: u32,
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

fn default_notice_duration() -> u32 {
    3000
}

fn default_redirect_delay() -> u32 {
    3000
}

fn default_order_redirect_delay() -> u32 {
    2000
}

fn default_placeholder_image() -> String {
    "https://placehold.jp/400x400.png".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_duration_ms: default_notice_duration(),
            redirect_delay_ms: default_redirect_delay(),
            order_redirect_delay_ms: default_order_redirect_delay(),
            placeholder_image: default_placeholder_image(),
        }
    }
}

impl ShopConfig {
    /// Builder method to point the client at another API.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api.base_url = base_url.to_string();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "shop.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = ShopConfig::from_toml("").unwrap();
        assert_eq!(config, ShopConfig::default());
        assert_eq!(config.auth.token_key, "authToken");
        assert_eq!(config.ui.redirect_delay_ms, 3000);
        assert_eq!(config.ui.order_redirect_delay_ms, 2000);
        assert!(config.featured.is_empty());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = ShopConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:8080/api"

            [ui]
            redirect_delay_ms = 500

            [[featured]]
            id = "670a5ad3f7e88f41a7a97c45"
            name = "iPhone 16"
            category = "Electronics"
            price = 165999.0
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.ui.redirect_delay_ms, 500);
        assert_eq!(config.ui.notice_duration_ms, 3000);
        assert_eq!(config.auth.fallback_token, None);
        assert_eq!(config.featured.len(), 1);
        assert_eq!(config.featured[0].category, "Electronics");
    }

    #[test]
    fn test_config_roundtrip() {
        let config = ShopConfig::default().with_base_url("http://api.test");
        let parsed = ShopConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
