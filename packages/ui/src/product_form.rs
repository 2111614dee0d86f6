use dioxus::prelude::*;
use shop::{FieldErrors, ProductForm, CATEGORY_ALL};

use crate::components::Field;

/// The product fields shared by the add and edit pages. Editing a field
/// clears its error; submission and validation belong to the page.
#[component]
pub fn ProductFormFields(
    mut form: Signal<ProductForm>,
    mut errors: Signal<FieldErrors>,
    categories: Vec<String>,
    #[props(default)] image_required: bool,
) -> Element {
    let mut update = move |field: &'static str, value: String| {
        form.write().set(field, value);
        errors.write().clear(field);
    };
    let error = move |field: &str| errors.read().get(field).map(str::to_string);
    let draft = form.read().clone();
    let known: Vec<String> = categories
        .into_iter()
        .filter(|c| c != CATEGORY_ALL)
        .collect();

    rsx! {
        div {
            class: "product-form",
            Field {
                id: "product-name",
                label: "Name",
                required: true,
                value: draft.name,
                error: error(ProductForm::NAME),
                oninput: move |v: String| update(ProductForm::NAME, v),
            }
            div {
                class: "form-field",
                label { class: "form-label", r#for: "product-category", "Category *" }
                // Free text with suggestions, so a new category can be created.
                input {
                    id: "product-category",
                    class: if errors.read().contains(ProductForm::CATEGORY) { "form-input invalid" } else { "form-input" },
                    list: "product-categories",
                    value: draft.category,
                    oninput: move |evt| update(ProductForm::CATEGORY, evt.value()),
                }
                datalist {
                    id: "product-categories",
                    for category in known {
                        option { key: "{category}", value: "{category}" }
                    }
                }
                if let Some(message) = error(ProductForm::CATEGORY) {
                    p { class: "form-error", "{message}" }
                }
            }
            Field {
                id: "product-manufacturer",
                label: "Manufacturer",
                value: draft.manufacturer,
                error: error(ProductForm::MANUFACTURER),
                oninput: move |v: String| update(ProductForm::MANUFACTURER, v),
            }
            Field {
                id: "product-available-items",
                label: "Available Items",
                kind: "number",
                value: draft.available_items,
                error: error(ProductForm::AVAILABLE_ITEMS),
                oninput: move |v: String| update(ProductForm::AVAILABLE_ITEMS, v),
            }
            Field {
                id: "product-price",
                label: "Price",
                kind: "number",
                required: true,
                value: draft.price,
                error: error(ProductForm::PRICE),
                oninput: move |v: String| update(ProductForm::PRICE, v),
            }
            Field {
                id: "product-image-url",
                label: "Image URL",
                required: image_required,
                value: draft.image_url,
                error: error(ProductForm::IMAGE_URL),
                oninput: move |v: String| update(ProductForm::IMAGE_URL, v),
            }
            div {
                class: "form-field",
                label { class: "form-label", r#for: "product-description", "Product Description *" }
                textarea {
                    id: "product-description",
                    class: if errors.read().contains(ProductForm::DESCRIPTION) { "form-input invalid" } else { "form-input" },
                    rows: 4,
                    value: draft.description,
                    oninput: move |evt| update(ProductForm::DESCRIPTION, evt.value()),
                }
                if let Some(message) = error(ProductForm::DESCRIPTION) {
                    p { class: "form-error", "{message}" }
                }
            }
        }
    }
}
