pub mod catalog;
pub mod config;
pub mod models;
pub mod order;
pub mod prompt;
pub mod session;
pub mod validation;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod session_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use session_storage::SessionStorageTokenStore;

pub use catalog::{SortKey, CATEGORY_ALL};
pub use config::ShopConfig;
pub use models::{
    Address, Credentials, NewAccount, NewAddress, NewProduct, OrderDraft, Product,
    ProductSnapshot, SignInResponse,
};
pub use order::{Back, FlowError, OrderFlow, OrderStep, OrderSummary};
pub use prompt::DeletePrompt;
pub use session::{Role, Session, SessionService, TokenStore};
pub use validation::{AddressForm, FieldErrors, LoginForm, ProductForm, SignupForm};
