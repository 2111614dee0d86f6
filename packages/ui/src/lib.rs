//! This crate contains all shared UI for the storefront.
//!
//! Views in the `web` package are built from the providers and components
//! here: [`ShopProvider`] installs the session, API client, config and the
//! pending-order slot as context; the components are presentational and
//! report user actions through `EventHandler`s.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const SHOP_CSS: Asset = asset!("/assets/styling/shop.css");

mod platform;
pub use platform::{make_token_store, sleep_ms, PlatformTokenStore};

mod session;
pub use session::{
    use_api, use_config, use_pending_draft, use_pending_order, use_search, use_session,
    PendingOrder, SearchQuery, ShopClient, ShopProvider,
};

mod loaders;
pub use loaders::{fetch_catalog, fetch_product_page, LoadFailure, ProductPage};

pub mod notice;
pub use notice::{use_notices, NoticeLevel, Notices, Snackbar};

mod navbar;
pub use navbar::{Navbar, SearchBar};

mod confirm_dialog;
pub use confirm_dialog::{ConfirmDialog, ModalOverlay};

mod product_card;
pub use product_card::ProductCard;

mod category_filter;
pub use category_filter::{CategoryFilter, SortSelect};

mod product_form;
pub use product_form::ProductFormFields;

mod address_form;
pub use address_form::{AddressFormFields, AddressSelect};

mod order_stepper;
pub use order_stepper::OrderStepper;
