use dioxus::prelude::*;
use shop::{Address, AddressForm};

use crate::components::{Button, ButtonVariant, Field};

/// Dropdown of saved addresses. Picking the blank entry clears the selection.
#[component]
pub fn AddressSelect(
    addresses: Vec<Address>,
    selected: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    let current = selected.unwrap_or_default();
    rsx! {
        div {
            class: "form-field",
            label { class: "form-label", r#for: "address-select", "Select Address" }
            select {
                id: "address-select",
                class: "form-input",
                value: current.clone(),
                onchange: move |evt| on_select.call(evt.value()),
                option { value: "", selected: current.is_empty(), "Select..." }
                for address in addresses {
                    option {
                        key: "{address.key()}",
                        value: address.key().to_string(),
                        selected: address.key() == current,
                        "{address.label()}"
                    }
                }
            }
        }
    }
}

/// New-address draft with a save button. Validation happens in the page.
#[component]
pub fn AddressFormFields(
    mut form: Signal<AddressForm>,
    #[props(default)] saving: bool,
    on_save: EventHandler<()>,
) -> Element {
    let draft = form.read().clone();

    rsx! {
        div {
            class: "address-form",
            h3 { "Add Address" }
            Field {
                id: "address-name",
                label: "Name",
                required: true,
                value: draft.name,
                oninput: move |v: String| form.write().name = v,
            }
            Field {
                id: "address-contact",
                label: "Contact Number",
                required: true,
                value: draft.contact_number,
                oninput: move |v: String| form.write().contact_number = v,
            }
            Field {
                id: "address-street",
                label: "Street",
                required: true,
                value: draft.street,
                oninput: move |v: String| form.write().street = v,
            }
            Field {
                id: "address-city",
                label: "City",
                required: true,
                value: draft.city,
                oninput: move |v: String| form.write().city = v,
            }
            Field {
                id: "address-state",
                label: "State",
                required: true,
                value: draft.state,
                oninput: move |v: String| form.write().state = v,
            }
            Field {
                id: "address-landmark",
                label: "Landmark",
                value: draft.landmark,
                oninput: move |v: String| form.write().landmark = v,
            }
            Field {
                id: "address-zipcode",
                label: "Zip Code",
                required: true,
                value: draft.zipcode,
                oninput: move |v: String| form.write().zipcode = v,
            }
            Button {
                variant: ButtonVariant::Primary,
                disabled: saving,
                onclick: move |_: MouseEvent| on_save.call(()),
                if saving { "Saving..." } else { "Save Address" }
            }
        }
    }
}
