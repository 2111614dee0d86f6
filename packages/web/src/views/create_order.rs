//! Order wizard: confirm the item, pick or add an address, review and place.
//!
//! The flow starts from the draft the product page left in the pending-order
//! slot. Opening this route without one (for example after a reload) shows a
//! link back to the catalog instead.

use dioxus::prelude::*;
use dioxus::router::Navigator;
use shop::catalog::format_inr;
use shop::{AddressForm, Back, OrderFlow, OrderStep};
use ui::components::{Button, ButtonVariant, Field};
use ui::{
    sleep_ms, use_api, use_config, use_notices, use_pending_draft, AddressFormFields,
    AddressSelect, Notices, OrderStepper, ShopClient,
};

use crate::Route;

#[component]
pub fn CreateOrder() -> Element {
    let api = use_api();
    let config = use_config();
    let notices = use_notices();
    let nav = use_navigator();
    let draft = use_pending_draft();

    let mut flow = use_signal(move || draft.map(OrderFlow::start));
    let mut address_form = use_signal(AddressForm::default);
    let mut saving = use_signal(|| false);
    let mut placed = use_signal(|| false);
    let order_delay = config.ui.order_redirect_delay_ms;

    // Addresses are fetched once on entry and again after a save.
    let load_api = api.clone();
    use_hook(move || {
        if flow.peek().is_some() {
            refresh_addresses(load_api, flow, notices, nav);
        }
    });

    let save_address = move |_: ()| {
        let new_address = match address_form.read().validate() {
            Ok(address) => address,
            Err(_) => {
                notices.error(AddressForm::MISSING_FIELDS);
                return;
            }
        };
        saving.set(true);
        let api = api.clone();
        spawn(async move {
            match api.create_address(&new_address).await {
                Ok(()) => {
                    tracing::info!("address saved");
                    notices.success("Address saved successfully");
                    address_form.set(AddressForm::default());
                    refresh_addresses(api, flow, notices, nav);
                }
                Err(e) => {
                    notices.error(format!("Error saving address: {e}"));
                    if e.requires_login() {
                        nav.push(Route::Login {});
                    }
                }
            }
            saving.set(false);
        });
    };

    let next = move |_: MouseEvent| {
        let result = flow.write().as_mut().map(OrderFlow::next);
        if let Some(Err(e)) = result {
            notices.error(e.to_string());
        }
    };

    let back = move |_: MouseEvent| {
        let result = flow.write().as_mut().map(OrderFlow::back);
        if result == Some(Back::Exit) {
            nav.go_back();
        }
    };

    let place_order = move |_: MouseEvent| {
        let result = match flow.read().as_ref() {
            Some(current) => current.place_order(),
            None => return,
        };
        match result {
            Ok(summary) => {
                tracing::info!(
                    product = %summary.product.id,
                    quantity = summary.quantity,
                    total = summary.total,
                    "order placed"
                );
                notices.success("Order placed successfully!");
                placed.set(true);
                spawn(async move {
                    sleep_ms(order_delay).await;
                    nav.push(Route::ProductList {});
                });
            }
            Err(e) => notices.error(e.to_string()),
        }
    };

    let Some(current) = flow.read().clone() else {
        return rsx! {
            div {
                class: "empty-state",
                p { "There is no order in progress." }
                Link { to: Route::ProductList {}, "Browse products" }
            }
        };
    };

    let product = current.product().clone();
    let total = format_inr(current.total());

    let step_body = match current.step() {
        OrderStep::Confirm => rsx! {
            div {
                class: "order-card",
                h2 { "{product.name}" }
                p { "Category: " strong { "{product.category}" } }
                p { class: "product-detail-description", "{product.description}" }
                Field {
                    id: "order-quantity",
                    label: "Quantity",
                    kind: "number",
                    required: true,
                    value: current.quantity().to_string(),
                    oninput: move |v: String| {
                        if let Some(f) = flow.write().as_mut() {
                            f.enter_quantity(&v);
                        }
                    },
                }
                p { class: "product-detail-total", "Total Price: ₹ {total}" }
            }
        },
        OrderStep::Address => rsx! {
            div {
                class: "order-card",
                AddressSelect {
                    addresses: current.addresses().to_vec(),
                    selected: current.selected_id().map(str::to_string),
                    on_select: move |id: String| {
                        if let Some(f) = flow.write().as_mut() {
                            f.select_address(&id);
                        }
                    },
                }
                p { class: "order-divider", "-OR-" }
                AddressFormFields {
                    form: address_form,
                    saving: saving(),
                    on_save: save_address,
                }
            }
        },
        OrderStep::Review => {
            let address = current.selected_address().cloned();
            rsx! {
                div {
                    class: "order-review",
                    div {
                        class: "order-card",
                        h2 { "{product.name}" }
                        p { "Quantity: " strong { "{current.quantity()}" } }
                        p { "Category: " strong { "{product.category}" } }
                        p { class: "product-detail-description", "{product.description}" }
                        p { class: "product-detail-total", "Total Price: ₹ {total}" }
                    }
                    if let Some(address) = address {
                        div {
                            class: "order-card",
                            h2 { "Address Details:" }
                            p { "{address.name}" }
                            p { "Contact Number: {address.contact_number}" }
                            p { "{address.street}, {address.city}" }
                            if let Some(landmark) = address.landmark.clone() {
                                p { "{landmark}" }
                            }
                            p { "{address.state}" }
                            p { "{address.zipcode}" }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "order-page",
            OrderStepper { current: current.step() }
            {step_body}
            div {
                class: "order-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: back,
                    "Back"
                }
                if current.step() == OrderStep::Review {
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: !current.can_place_order() || placed(),
                        onclick: place_order,
                        "Place Order"
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: next,
                        "Next"
                    }
                }
            }
        }
    }
}

fn refresh_addresses(
    api: ShopClient,
    mut flow: Signal<Option<OrderFlow>>,
    notices: Notices,
    nav: Navigator,
) {
    spawn(async move {
        match api.list_addresses().await {
            Ok(addresses) => {
                tracing::debug!(count = addresses.len(), "addresses loaded");
                if let Some(current) = flow.write().as_mut() {
                    current.set_addresses(addresses);
                }
            }
            Err(e) => {
                notices.error(format!("Error fetching addresses: {e}"));
                if e.requires_login() {
                    nav.push(Route::Login {});
                }
            }
        }
    });
}
