//! Local form validation.
//!
//! Every form is a plain struct of strings, edited field by field by a view.
//! `validate*` either returns the typed request body or a [`FieldErrors`] map
//! that the view renders next to each input.
//!
//! Creating and editing a product apply different rules: only
//! [`ProductForm::validate_update`] requires an image URL.

use std::collections::BTreeMap;

use crate::models::{Credentials, NewAccount, NewAddress, NewProduct, Product};

/// Field name → message. Empty means valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("Please fix the validation errors.")]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    /// Drop the error for `field` (called as the user edits it).
    pub fn clear(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    fn require(&mut self, field: &'static str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Editable product draft shared by the add and edit views.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub description: String,
    pub manufacturer: String,
    pub available_items: String,
    pub image_url: String,
}

impl ProductForm {
    pub const NAME: &'static str = "name";
    pub const CATEGORY: &'static str = "category";
    pub const PRICE: &'static str = "price";
    pub const DESCRIPTION: &'static str = "description";
    pub const MANUFACTURER: &'static str = "manufacturer";
    pub const AVAILABLE_ITEMS: &'static str = "availableItems";
    pub const IMAGE_URL: &'static str = "imageUrl";

    /// Set a field by its wire name. Unknown names are ignored.
    pub fn set(&mut self, field: &str, value: String) {
        match field {
            Self::NAME => self.name = value,
            Self::CATEGORY => self.category = value,
            Self::PRICE => self.price = value,
            Self::DESCRIPTION => self.description = value,
            Self::MANUFACTURER => self.manufacturer = value,
            Self::AVAILABLE_ITEMS => self.available_items = value,
            Self::IMAGE_URL => self.image_url = value,
            _ => {}
        }
    }

    /// Rules for `POST /products`: name, category, price > 0, description.
    pub fn validate_create(&self) -> Result<NewProduct, FieldErrors> {
        let errors = self.common_errors();
        errors.into_result(|| self.payload())
    }

    /// Rules for `PUT /products/{id}`: the create rules plus an image URL.
    pub fn validate_update(&self) -> Result<NewProduct, FieldErrors> {
        let mut errors = self.common_errors();
        errors.require(Self::IMAGE_URL, &self.image_url, "Image URL is required.");
        errors.into_result(|| self.payload())
    }

    fn common_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require(Self::NAME, &self.name, "Product name is required.");
        errors.require(Self::CATEGORY, &self.category, "Category is required.");
        if self.parsed_price().is_none() {
            errors.add(Self::PRICE, "Valid price is required.");
        }
        errors.require(Self::DESCRIPTION, &self.description, "Description is required.");
        errors
    }

    fn parsed_price(&self) -> Option<f64> {
        self.price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0)
    }

    /// Blank or unparseable stock counts are sent as 0.
    fn parsed_available_items(&self) -> u32 {
        self.available_items.trim().parse().unwrap_or(0)
    }

    fn payload(&self) -> NewProduct {
        NewProduct {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            price: self.parsed_price().unwrap_or_default(),
            description: self.description.trim().to_string(),
            manufacturer: self.manufacturer.trim().to_string(),
            available_items: self.parsed_available_items(),
            image_url: self.image_url.trim().to_string(),
        }
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            manufacturer: product.manufacturer.clone(),
            available_items: product.available_items.to_string(),
            image_url: product.image_url.clone(),
        }
    }
}

/// New-address draft in the order flow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddressForm {
    pub name: String,
    pub contact_number: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub landmark: String,
    pub zipcode: String,
}

impl AddressForm {
    pub const MISSING_FIELDS: &'static str = "All fields are required to add a new address.";

    /// Every field but the landmark is required.
    pub fn validate(&self) -> Result<NewAddress, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Name is required.");
        errors.require("contactNumber", &self.contact_number, "Contact number is required.");
        errors.require("street", &self.street, "Street is required.");
        errors.require("city", &self.city, "City is required.");
        errors.require("state", &self.state, "State is required.");
        errors.require("zipcode", &self.zipcode, "Zip code is required.");
        errors.into_result(|| {
            let landmark = self.landmark.trim();
            NewAddress {
                name: self.name.trim().to_string(),
                contact_number: self.contact_number.trim().to_string(),
                street: self.street.trim().to_string(),
                city: self.city.trim().to_string(),
                state: self.state.trim().to_string(),
                zipcode: self.zipcode.trim().to_string(),
                landmark: (!landmark.is_empty()).then(|| landmark.to_string()),
            }
        })
    }
}

/// Sign-up form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub contact_number: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<NewAccount, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("firstName", &self.first_name, "First Name is required.");
        errors.require("lastName", &self.last_name, "Last Name is required.");
        if self.email.trim().is_empty() {
            errors.add("email", "Email Address is required.");
        } else if !looks_like_email(self.email.trim()) {
            errors.add("email", "Please enter a valid Email Address.");
        }
        if self.password.is_empty() {
            errors.add("password", "Password is required.");
        }
        if self.confirm_password.is_empty() {
            errors.add("confirmPassword", "Confirm Password is required.");
        } else if self.password != self.confirm_password {
            errors.add("confirmPassword", "Passwords do not match.");
        }
        errors.require("contactNumber", &self.contact_number, "Contact Number is required.");
        errors.into_result(|| NewAccount {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            contact_number: self.contact_number.trim().to_string(),
        })
    }
}

/// Sign-in form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("username", &self.username, "Email Address is required.");
        if self.password.is_empty() {
            errors.add("password", "Password is required.");
        }
        errors.into_result(|| Credentials {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// `local@domain.tld` with no whitespace and a dot after the `@`.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
