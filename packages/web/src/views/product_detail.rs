use dioxus::prelude::*;
use shop::catalog::{format_inr, line_total, parse_quantity};
use shop::{OrderDraft, ProductSnapshot};
use ui::components::{Button, ButtonVariant, Field};
use ui::{
    fetch_product_page, use_api, use_config, use_notices, use_pending_order, CategoryFilter,
    LoadFailure,
};

use crate::Route;

#[component]
pub fn ProductDetail(id: String) -> Element {
    let api = use_api();
    let config = use_config();
    let mut pending = use_pending_order();
    let notices = use_notices();
    let nav = use_navigator();

    let mut quantity = use_signal(|| 1u32);

    // Re-fetch when the route moves to another product.
    let page = use_resource(use_reactive!(|(id,)| {
        let api = api.clone();
        async move { fetch_product_page(&api, &id).await }
    }));

    use_effect(move || {
        if let Some(Err(e)) = &*page.read() {
            match LoadFailure::of(e) {
                LoadFailure::Login => {
                    nav.push(Route::Login {});
                }
                LoadFailure::NotFound => tracing::warn!("product page failed: {e}"),
                LoadFailure::Notify(message) => notices.error(message),
            }
        }
    });

    let placeholder = config.ui.placeholder_image.clone();

    let loaded = page.read().clone();
    match loaded {
        None => rsx! {
            div { class: "loading", "Loading..." }
        },
        Some(Err(e)) if e.is_not_found() => rsx! {
            div { class: "alert error", {LoadFailure::NOT_FOUND_MESSAGE} }
        },
        Some(Err(e)) => rsx! {
            div { class: "alert error", "{e}" }
        },
        Some(Ok(loaded)) => {
            let product = loaded.product;
            let categories = loaded.categories;
            let total = format_inr(line_total(product.price, quantity()));
            let price = format_inr(product.price);
            let image = product.image_or(&placeholder).to_string();
            let snapshot = ProductSnapshot::of(&product, &placeholder);

            rsx! {
                div {
                    class: "product-detail",
                    CategoryFilter {
                        categories,
                        selected: product.category.clone(),
                        on_select: move |c: String| {
                            nav.push(Route::Products { category: c });
                        },
                    }
                    div {
                        class: "product-detail-body",
                        img { class: "product-detail-image", src: image, alt: product.name.clone() }
                        div {
                            class: "product-detail-info",
                            div {
                                class: "product-detail-heading",
                                h1 { "{product.name}" }
                                span { class: "badge", "Available Quantity: {product.available_items}" }
                            }
                            p { "Category: " strong { "{product.category}" } }
                            p { class: "product-detail-description", "{product.description}" }
                            p { class: "product-detail-price", "₹ {price}" }
                            Field {
                                id: "order-quantity",
                                label: "Enter Quantity",
                                kind: "number",
                                required: true,
                                value: quantity().to_string(),
                                oninput: move |v: String| quantity.set(parse_quantity(&v)),
                            }
                            p { class: "product-detail-total", "Total Price: ₹ {total}" }
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_: MouseEvent| {
                                    pending.put(OrderDraft {
                                        product: snapshot.clone(),
                                        quantity: Some(quantity()),
                                    });
                                    nav.push(Route::CreateOrder {});
                                },
                                "Place Order"
                            }
                        }
                    }
                }
            }
        }
    }
}
