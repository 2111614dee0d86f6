use dioxus::prelude::*;
use shop::catalog::format_inr;
use shop::Product;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaPenToSquare, FaTrash};
use crate::Icon;

/// One tile in the catalog grid. Edit/delete controls render only for admins;
/// each handler receives the product id.
#[component]
pub fn ProductCard(
    product: Product,
    placeholder: String,
    is_admin: bool,
    on_buy: EventHandler<String>,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let image = product.image_or(&placeholder).to_string();
    let price = format_inr(product.price);
    let buy_id = product.id.clone();
    let edit_id = product.id.clone();
    let delete_id = product.id.clone();

    rsx! {
        div {
            class: "product-card",
            img { class: "product-card-image", src: image, alt: product.name.clone() }
            div {
                class: "product-card-body",
                div {
                    class: "product-card-heading",
                    h3 { class: "product-card-name", "{product.name}" }
                    span { class: "product-card-price", "₹ {price}" }
                }
                p { class: "product-card-description", "{product.description}" }
            }
            div {
                class: "product-card-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_: MouseEvent| on_buy.call(buy_id.clone()),
                    "Buy"
                }
                if is_admin {
                    div {
                        class: "product-card-admin",
                        button {
                            class: "icon-button",
                            title: "Edit",
                            onclick: move |_: MouseEvent| on_edit.call(edit_id.clone()),
                            Icon { icon: FaPenToSquare, width: 16, height: 16 }
                        }
                        button {
                            class: "icon-button",
                            title: "Delete",
                            onclick: move |_: MouseEvent| on_delete.call(delete_id.clone()),
                            Icon { icon: FaTrash, width: 16, height: 16 }
                        }
                    }
                }
            }
        }
    }
}
