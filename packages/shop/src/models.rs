//! # Domain models for the storefront
//!
//! Wire types exchanged with the remote shop API and the transient drafts the
//! views hold between requests. Everything is `Serialize + Deserialize` with
//! camelCase field names so the structs match the API's JSON directly.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Product`] | A catalog entry owned by the API. The client only ever holds read-only or edit-draft copies. |
//! | [`NewProduct`] | Body of `POST /products` and `PUT /products/{id}`; produced by [`crate::validation::ProductForm`]. |
//! | [`Address`] | A saved shipping address returned by `GET /addresses`. |
//! | [`NewAddress`] | Body of `POST /addresses`; produced by [`crate::validation::AddressForm`]. |
//! | [`ProductSnapshot`] | The slice of a product the order flow needs, frozen when the user clicks "Place order". |
//! | [`OrderDraft`] | Snapshot plus quantity, handed from the detail view to the order flow. |
//! | [`Credentials`] / [`SignInResponse`] / [`NewAccount`] | Auth payloads. |

use serde::{Deserialize, Serialize};

/// A product as served by `GET /products` and `GET /products/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub available_items: u32,
    #[serde(default)]
    pub image_url: String,
}

impl Product {
    /// Image URL, or `placeholder` when the product has none.
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.image_url.trim().is_empty() {
            placeholder
        } else {
            &self.image_url
        }
    }
}

/// Request body for creating or replacing a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub manufacturer: String,
    pub available_items: u32,
    pub image_url: String,
}

/// A saved address.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub landmark: Option<String>,
}

impl Address {
    /// Selection key: the id, or the name for addresses saved without one.
    pub fn key(&self) -> &str {
        if self.id.is_empty() {
            &self.name
        } else {
            &self.id
        }
    }

    /// One-line label used by the address picker: "Home --> 1 Main St, Pune".
    pub fn label(&self) -> String {
        format!("{} --> {}, {}", self.name, self.street, self.city)
    }
}

/// Request body for `POST /addresses`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAddress {
    pub name: String,
    pub contact_number: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
}

/// The product fields carried into the order flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub available_items: u32,
    pub image_url: String,
}

impl ProductSnapshot {
    /// Freeze `product`, substituting `placeholder` for a missing image.
    pub fn of(product: &Product, placeholder: &str) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
            price: product.price,
            available_items: product.available_items,
            image_url: product.image_or(placeholder).to_string(),
        }
    }
}

/// Hand-off payload from the product detail view to the order flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub product: ProductSnapshot,
    /// Requested quantity; the flow falls back to 1 when absent.
    pub quantity: Option<u32>,
}

/// Body of `POST /auth/signin`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of a successful `POST /auth/signin`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub contact_number: String,
}
