//! Paired fetches used by the catalog and product pages.
//!
//! Both requests are issued together with `futures::join!`; the pair fails if
//! either half fails.

use api::ApiError;
use shop::catalog::with_all_category;
use shop::Product;

use crate::session::ShopClient;

/// Categories (prefixed with "All") and the full product list.
pub async fn fetch_catalog(api: &ShopClient) -> Result<(Vec<String>, Vec<Product>), ApiError> {
    let (categories, products) = futures::join!(api.list_categories(), api.list_products());
    // A missing token or 401 on the products half decides the redirect.
    let products = products?;
    let categories = categories?;
    tracing::debug!(
        categories = categories.len(),
        products = products.len(),
        "catalog loaded"
    );
    Ok((with_all_category(categories), products))
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductPage {
    pub product: Product,
    pub categories: Vec<String>,
}

/// One product plus the category chips shown above it.
pub async fn fetch_product_page(api: &ShopClient, id: &str) -> Result<ProductPage, ApiError> {
    let (product, categories) = futures::join!(api.get_product(id), api.list_categories());
    Ok(ProductPage {
        product: product?,
        categories: with_all_category(categories?),
    })
}

/// How a page reacts to a failed product fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadFailure {
    /// Token missing or rejected: go to the login page.
    Login,
    /// The product does not exist: static inline message.
    NotFound,
    /// Anything else: show the error text as a notice.
    Notify(String),
}

impl LoadFailure {
    pub const NOT_FOUND_MESSAGE: &'static str = "Product not found. Please try again.";

    pub fn of(err: &ApiError) -> Self {
        if err.requires_login() {
            LoadFailure::Login
        } else if err.is_not_found() {
            LoadFailure::NotFound
        } else {
            LoadFailure::Notify(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop::MemoryTokenStore;

    #[tokio::test]
    async fn test_catalog_without_token_fails_fast() {
        let api = ShopClient::new("http://127.0.0.1:9/api", MemoryTokenStore::new());
        let err = fetch_catalog(&api).await.unwrap_err();
        assert_eq!(err, ApiError::MissingToken);
        assert!(err.requires_login());
    }

    #[test]
    fn test_load_failure_kinds() {
        assert_eq!(LoadFailure::of(&ApiError::MissingToken), LoadFailure::Login);
        assert_eq!(LoadFailure::of(&ApiError::from_status(401, "")), LoadFailure::Login);
        assert_eq!(LoadFailure::of(&ApiError::from_status(404, "")), LoadFailure::NotFound);
        assert_eq!(
            LoadFailure::of(&ApiError::from_status(500, r#"{"message":"Database unavailable"}"#)),
            LoadFailure::Notify("Database unavailable".to_string())
        );
        assert_eq!(
            LoadFailure::of(&ApiError::Network("connection refused".to_string())),
            LoadFailure::Notify(ApiError::Network("connection refused".to_string()).to_string())
        );
    }
}
