mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod catalog;
pub use catalog::{ProductList, Products};

mod product_detail;
pub use product_detail::ProductDetail;

mod create_order;
pub use create_order::CreateOrder;

mod product_editor;
pub use product_editor::{AddProduct, EditProduct};

mod not_found;
pub use not_found::NotFound;
