//! # Order flow — the three-step purchase wizard
//!
//! ```text
//! Confirm (0) --next--> Address (1) --next [address selected]--> Review (2)
//!     ^                     |                                       |
//!     +-------back----------+<----------------back------------------+
//! back at Confirm exits the flow
//! ```
//!
//! [`OrderFlow`] holds everything that survives between steps: the product
//! snapshot and quantity, the fetched address list and the selected address.
//! The new-address form is a separate [`crate::validation::AddressForm`] owned by
//! the view. Placing an order is only possible at [`OrderStep::Review`] and
//! yields an [`OrderSummary`]; no order is sent to the API.

use crate::catalog::{clamp_quantity, line_total, parse_quantity};
use crate::models::{Address, OrderDraft, ProductSnapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderStep {
    Confirm,
    Address,
    Review,
}

impl OrderStep {
    pub const ALL: [OrderStep; 3] = [OrderStep::Confirm, OrderStep::Address, OrderStep::Review];

    pub fn index(&self) -> usize {
        match self {
            OrderStep::Confirm => 0,
            OrderStep::Address => 1,
            OrderStep::Review => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStep::Confirm => "Confirm Purchase",
            OrderStep::Address => "Address Details",
            OrderStep::Review => "Order Confirmation",
        }
    }
}

/// Reasons a step transition or order placement is refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("Please select an address before proceeding.")]
    AddressRequired,
    #[error("There is no step after order confirmation.")]
    NoNextStep,
    #[error("Orders can only be placed from the confirmation step.")]
    NotAtReview,
    #[error("Please select an address before placing the order.")]
    NoAddressForOrder,
}

/// Result of pressing "Back".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Back {
    /// Leave the flow (back at the first step).
    Exit,
    /// Stay in the flow at this step.
    To(OrderStep),
}

/// What was ordered, returned by [`OrderFlow::place_order`].
#[derive(Clone, Debug, PartialEq)]
pub struct OrderSummary {
    pub product: ProductSnapshot,
    pub quantity: u32,
    pub total: f64,
    pub address: Address,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderFlow {
    product: ProductSnapshot,
    quantity: u32,
    step: OrderStep,
    addresses: Vec<Address>,
    selected: Option<String>,
}

impl OrderFlow {
    /// Enter the flow at [`OrderStep::Confirm`]. Quantity defaults to 1.
    pub fn start(draft: OrderDraft) -> Self {
        Self {
            product: draft.product,
            quantity: clamp_quantity(i64::from(draft.quantity.unwrap_or(1))),
            step: OrderStep::Confirm,
            addresses: Vec::new(),
            selected: None,
        }
    }

    pub fn step(&self) -> OrderStep {
        self.step
    }

    pub fn product(&self) -> &ProductSnapshot {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_quantity(&mut self, input: i64) {
        self.quantity = clamp_quantity(input);
    }

    /// Quantity typed into a form field, read the same way as on the product page.
    pub fn enter_quantity(&mut self, input: &str) {
        self.quantity = parse_quantity(input);
    }

    pub fn total(&self) -> f64 {
        line_total(self.product.price, self.quantity)
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Replace the address list (initial fetch or refresh after a save).
    /// A selection that no longer exists is dropped.
    pub fn set_addresses(&mut self, addresses: Vec<Address>) {
        self.addresses = addresses;
        let still_listed = self
            .selected
            .as_deref()
            .is_some_and(|id| self.addresses.iter().any(|a| a.key() == id));
        if !still_listed {
            self.selected = None;
        }
    }

    /// Select an address by [`Address::key`]; an empty key clears the selection.
    pub fn select_address(&mut self, id: &str) {
        self.selected = if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        };
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_address(&self) -> Option<&Address> {
        let id = self.selected.as_deref()?;
        self.addresses.iter().find(|a| a.key() == id)
    }

    /// Advance one step. Leaving [`OrderStep::Address`] needs a selection.
    pub fn next(&mut self) -> Result<OrderStep, FlowError> {
        self.step = match self.step {
            OrderStep::Confirm => OrderStep::Address,
            OrderStep::Address => {
                if self.selected.is_none() {
                    return Err(FlowError::AddressRequired);
                }
                OrderStep::Review
            }
            OrderStep::Review => return Err(FlowError::NoNextStep),
        };
        Ok(self.step)
    }

    pub fn back(&mut self) -> Back {
        match self.step {
            OrderStep::Confirm => Back::Exit,
            OrderStep::Address => {
                self.step = OrderStep::Confirm;
                Back::To(self.step)
            }
            OrderStep::Review => {
                self.step = OrderStep::Address;
                Back::To(self.step)
            }
        }
    }

    pub fn can_place_order(&self) -> bool {
        self.step == OrderStep::Review
    }

    pub fn place_order(&self) -> Result<OrderSummary, FlowError> {
        if !self.can_place_order() {
            return Err(FlowError::NotAtReview);
        }
        let address = self
            .selected_address()
            .cloned()
            .ok_or(FlowError::NoAddressForOrder)?;
        Ok(OrderSummary {
            product: self.product.clone(),
            quantity: self.quantity,
            total: self.total(),
            address,
        })
    }
}
