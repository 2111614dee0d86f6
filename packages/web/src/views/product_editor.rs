//! Admin pages for creating and modifying products.
//!
//! Both pages validate locally before sending. The edit page also requires an
//! image URL; the add page does not.

use api::ApiError;
use dioxus::prelude::*;
use shop::{FieldErrors, ProductForm, TokenStore};
use ui::components::{Button, ButtonVariant};
use ui::{sleep_ms, use_api, use_config, use_notices, LoadFailure, ProductFormFields};

use crate::Route;

#[component]
pub fn AddProduct() -> Element {
    let api = use_api();
    let config = use_config();
    let notices = use_notices();
    let nav = use_navigator();

    let form = use_signal(ProductForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);
    let redirect_delay = config.ui.redirect_delay_ms;

    let categories_api = api.clone();
    let categories = use_resource(move || {
        let api = categories_api.clone();
        async move { api.list_categories().await }
    });

    let submit = move |_: MouseEvent| {
        if api.tokens().get().is_none() {
            notices.error(ApiError::MissingToken.to_string());
            return;
        }
        let payload = match form.read().validate_create() {
            Ok(payload) => payload,
            Err(invalid) => {
                notices.error(invalid.to_string());
                errors.set(invalid);
                return;
            }
        };
        errors.set(FieldErrors::new());
        saving.set(true);

        let api = api.clone();
        spawn(async move {
            match api.create_product(&payload).await {
                Ok(product) => {
                    tracing::info!(id = %product.id, "product added");
                    notices.success(format!("Product {} added successfully", product.name));
                    sleep_ms(redirect_delay).await;
                    nav.push(Route::ProductList {});
                }
                Err(e) => {
                    notices.error(format!("Error adding product: {e}"));
                    saving.set(false);
                }
            }
        });
    };

    let known = categories.read().clone().and_then(Result::ok).unwrap_or_default();

    rsx! {
        div {
            class: "editor-page",
            h1 { "Add Product" }
            ProductFormFields { form, errors, categories: known }
            Button {
                variant: ButtonVariant::Primary,
                class: "editor-submit",
                disabled: saving(),
                onclick: submit,
                "Save Product"
            }
        }
    }
}

#[component]
pub fn EditProduct(id: String) -> Element {
    let api = use_api();
    let config = use_config();
    let notices = use_notices();
    let nav = use_navigator();

    let mut form = use_signal(ProductForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);
    let redirect_delay = config.ui.redirect_delay_ms;

    let categories_api = api.clone();
    let categories = use_resource(move || {
        let api = categories_api.clone();
        async move { api.list_categories().await }
    });

    let product_api = api.clone();
    let product = {
        let id = id.clone();
        use_resource(use_reactive!(|(id,)| {
            let api = product_api.clone();
            async move { api.get_product(&id).await }
        }))
    };

    // Seed the form once the product arrives.
    use_effect(move || {
        match &*product.read() {
            Some(Ok(loaded)) => form.set(ProductForm::from(loaded)),
            Some(Err(e)) => match LoadFailure::of(e) {
                LoadFailure::Login => {
                    nav.push(Route::Login {});
                }
                LoadFailure::NotFound => {}
                LoadFailure::Notify(message) => notices.error(message),
            },
            None => {}
        }
    });

    let submit = move |_: MouseEvent| {
        if api.tokens().get().is_none() {
            notices.error(ApiError::MissingToken.to_string());
            return;
        }
        let payload = match form.read().validate_update() {
            Ok(payload) => payload,
            Err(invalid) => {
                notices.error(invalid.to_string());
                errors.set(invalid);
                return;
            }
        };
        errors.set(FieldErrors::new());
        saving.set(true);

        let api = api.clone();
        let id = id.clone();
        spawn(async move {
            match api.update_product(&id, &payload).await {
                Ok(product) => {
                    tracing::info!(%id, "product updated");
                    notices.success(format!("Product {} modified successfully.", product.name));
                    sleep_ms(redirect_delay).await;
                    nav.push(Route::ProductList {});
                }
                Err(e) => {
                    notices.error(format!("Error updating product: {e}"));
                    saving.set(false);
                }
            }
        });
    };

    let known = categories.read().clone().and_then(Result::ok).unwrap_or_default();
    let load_state = match &*product.read() {
        None => Some("Loading...".to_string()),
        Some(Err(e)) if e.is_not_found() => Some(LoadFailure::NOT_FOUND_MESSAGE.to_string()),
        Some(Err(e)) => Some(e.to_string()),
        Some(Ok(_)) => None,
    };

    rsx! {
        div {
            class: "editor-page",
            h1 { "Modify Product" }
            if let Some(message) = load_state {
                p { class: "alert", "{message}" }
            } else {
                ProductFormFields { form, errors, categories: known, image_required: true }
                Button {
                    variant: ButtonVariant::Primary,
                    class: "editor-submit",
                    disabled: saving(),
                    onclick: submit,
                    "Modify Product"
                }
            }
        }
    }
}
