//! Product listing: category chips, sort dropdown, product grid.
//!
//! Categories and products are fetched once per mount (and again after a
//! delete). Filtering and sorting are recomputed on every render from the
//! fetched list, the active category, the navbar search text and the sort key.

use dioxus::prelude::*;
use shop::catalog::{filter_products, sort_products};
use shop::{DeletePrompt, SortKey, CATEGORY_ALL};
use ui::{
    fetch_catalog, sleep_ms, use_api, use_config, use_notices, use_search, use_session,
    CategoryFilter, ConfirmDialog, ProductCard, SortSelect,
};

use crate::Route;

/// `/list`: every category.
#[component]
pub fn ProductList() -> Element {
    rsx! {
        Catalog { category: CATEGORY_ALL.to_string() }
    }
}

/// `/products?category=X`
#[component]
pub fn Products(category: String) -> Element {
    let category = if category.trim().is_empty() {
        CATEGORY_ALL.to_string()
    } else {
        category
    };
    rsx! {
        Catalog { category }
    }
}

#[component]
fn Catalog(category: String) -> Element {
    let api = use_api();
    let config = use_config();
    let session = use_session();
    let search = use_search();
    let notices = use_notices();
    let nav = use_navigator();

    let mut sort = use_signal(SortKey::default);
    let mut prompt = use_signal(DeletePrompt::new);
    let mut reload = use_signal(|| 0u32);

    let fetch_api = api.clone();
    let data = use_resource(move || {
        let api = fetch_api.clone();
        // Re-run after a delete.
        let _ = reload();
        async move { fetch_catalog(&api).await }
    });

    // A missing or rejected token sends the user to the login page.
    use_effect(move || {
        if let Some(Err(e)) = &*data.read() {
            if e.requires_login() {
                nav.push(Route::Login {});
            }
        }
    });

    let is_admin = session.read().current().is_admin();
    let placeholder = config.ui.placeholder_image.clone();
    let redirect_delay = config.ui.redirect_delay_ms;

    let confirm_delete = move |_: ()| {
        let Some(id) = prompt.write().confirm() else {
            return;
        };
        let name = match &*data.read() {
            Some(Ok((_, products))) => products
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.name.clone())
                .unwrap_or_default(),
            _ => String::new(),
        };
        let api = api.clone();
        spawn(async move {
            match api.delete_product(&id).await {
                Ok(()) => {
                    tracing::info!(%id, "product deleted");
                    notices.success(format!("Product {name} deleted successfully"));
                    reload += 1;
                    sleep_ms(redirect_delay).await;
                    nav.push(Route::ProductList {});
                }
                Err(e) => {
                    notices.error(format!("Error deleting product: {e}"));
                    if e.requires_login() {
                        nav.push(Route::Login {});
                    }
                }
            }
        });
    };

    let body = match &*data.read() {
        None => rsx! {
            div { class: "loading", "Loading..." }
        },
        Some(Err(_)) => rsx! {
            div { class: "alert error", "Failed to load data. Please try again." }
        },
        Some(Ok((categories, products))) => {
            let visible = sort_products(&filter_products(products, &category, &search()), sort());
            let categories = categories.clone();
            let selected = category.clone();
            let placeholder = placeholder.clone();
            rsx! {
                CategoryFilter {
                    categories,
                    selected,
                    on_select: move |c: String| {
                        nav.push(Route::Products { category: c });
                    },
                }
                SortSelect {
                    selected: sort(),
                    on_change: move |key: SortKey| sort.set(key),
                }
                if visible.is_empty() {
                    p { class: "empty-state", "No products match your filters." }
                }
                div {
                    class: "product-grid",
                    for product in visible {
                        ProductCard {
                            key: "{product.id}",
                            product: product.clone(),
                            placeholder: placeholder.clone(),
                            is_admin,
                            on_buy: move |id: String| {
                                nav.push(Route::ProductDetail { id });
                            },
                            on_edit: move |id: String| {
                                nav.push(Route::EditProduct { id });
                            },
                            on_delete: move |id: String| prompt.write().open(&id),
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "catalog",
            {body}
            if prompt.read().is_open() {
                ConfirmDialog {
                    title: "Confirm deletion of product!",
                    message: "Are you sure you want to delete the product?",
                    on_confirm: confirm_delete,
                    on_cancel: move |_: ()| prompt.write().cancel(),
                }
            }
        }
    }
}
