use dioxus::prelude::*;

use shop::ShopConfig;
use ui::ShopProvider;
use views::{
    AddProduct, CreateOrder, EditProduct, Home, Login, NotFound, ProductDetail, ProductList,
    Products, Shell, Signup,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/home")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/add-product")]
        AddProduct {},
        #[route("/list")]
        ProductList {},
        #[route("/products?:category")]
        Products { category: String },
        #[route("/product/:id")]
        ProductDetail { id: String },
        #[route("/edit-product/:id")]
        EditProduct { id: String },
        #[route("/create-order")]
        CreateOrder {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// `shop.toml` next to this crate's manifest.
const SHOP_TOML: &str = include_str!("../shop.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> ShopConfig {
    match ShopConfig::from_toml(SHOP_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {}", ShopConfig::filename(), e);
            ShopConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ShopProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// `/` shows the home page.
#[component]
fn Root() -> Element {
    rsx! {
        Home {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = ShopConfig::from_toml(SHOP_TOML).unwrap();
        assert_eq!(config.featured.len(), 6);
        assert_eq!(config.featured[3].name, "iPhone 16");
        assert_eq!(config.auth.token_key, "authToken");
        assert_eq!(config.ui.order_redirect_delay_ms, 2000);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(
            Route::ProductDetail { id: "abc".into() }.to_string(),
            "/product/abc"
        );
        assert_eq!(
            "/edit-product/p1".parse::<Route>().unwrap(),
            Route::EditProduct { id: "p1".into() }
        );
        assert_eq!("/list".parse::<Route>().unwrap(), Route::ProductList {});
    }

    #[test]
    fn test_category_query() {
        assert_eq!(
            "/products?category=Shoes".parse::<Route>().unwrap(),
            Route::Products {
                category: "Shoes".into()
            }
        );
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route = "/no/such/page".parse::<Route>().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
    }
}
