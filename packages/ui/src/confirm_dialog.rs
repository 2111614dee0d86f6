use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_: MouseEvent| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Yes/no dialog. Dismissing the overlay counts as cancel.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Ok".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_: ()| on_cancel.call(()),
            div {
                class: "modal-body",
                h2 { class: "modal-title", "{title}" }
                p { "{message}" }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_: MouseEvent| on_confirm.call(()),
                        "{confirm_label}"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_: MouseEvent| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
