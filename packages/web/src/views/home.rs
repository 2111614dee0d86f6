//! Landing page with the featured-product carousel.

use dioxus::prelude::*;
use shop::catalog::{cycle_index, format_inr};
use ui::components::{Button, ButtonVariant};
use ui::{use_config, use_session};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let config = use_config();
    let session = use_session();
    let nav = use_navigator();
    let mut index = use_signal(|| 0usize);

    let featured = config.featured;
    let count = featured.len();
    // The list is fixed for the page lifetime, but clamp in case it is empty.
    let current = featured.get(index().min(count.saturating_sub(1))).cloned();
    let price = current
        .as_ref()
        .map(|p| format_inr(p.price))
        .unwrap_or_default();

    let shop_now = move |_: MouseEvent| {
        if session.read().current().is_logged_in {
            nav.push(Route::ProductList {});
        } else {
            nav.push(Route::Login {});
        }
    };

    rsx! {
        section {
            class: "hero",
            if let Some(product) = current {
                div {
                    class: "hero-feature",
                    div {
                        class: "hero-card",
                        h1 { "{product.name}" }
                        h2 { class: "hero-category", "{product.category}" }
                        p { "{product.description}" }
                        p { class: "hero-price", "Price: ₹{price}" }
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_: MouseEvent| index.set(cycle_index(index(), count)),
                            "Next Product"
                        }
                    }
                    img {
                        class: "hero-image",
                        src: product.image_or(&config.ui.placeholder_image).to_string(),
                        alt: "{product.name} - {product.category}",
                    }
                }
            }
            div {
                class: "hero-welcome",
                h1 { "Welcome to upGrad E-Shop!" }
                p {
                    "Browse through our exclusive collection of products and enjoy amazing offers. "
                    "Shop now and elevate your lifestyle!"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: shop_now,
                    "Shop Now"
                }
            }
        }
    }
}
