//! Layout wrapping every route: navbar, snackbar, then the page.

use dioxus::prelude::*;
use ui::icons::FaCartShopping;
use ui::{use_session, Icon, Navbar, SearchBar, Snackbar};

use crate::Route;

#[component]
pub fn Shell() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let current = session.read().current();

    let logout = move |_: MouseEvent| {
        session.write().logout();
        tracing::info!("logged out");
        nav.push(Route::Login {});
    };

    rsx! {
        Navbar {
            Link {
                class: "navbar-brand",
                to: Route::Home {},
                Icon { icon: FaCartShopping, width: 20, height: 20 }
                span { "upGrad E-Shop" }
            }
            SearchBar {}
            div {
                class: "navbar-links",
                Link { to: Route::Home {}, "Home" }
                if current.is_logged_in {
                    if current.is_admin() {
                        Link { to: Route::AddProduct {}, "Add Product" }
                    }
                    button {
                        class: "btn btn-destructive",
                        onclick: logout,
                        "Logout"
                    }
                } else {
                    // Adding a product needs an admin login first.
                    Link { to: Route::Login {}, "Add Product" }
                    Link { to: Route::Login {}, "Login" }
                    Link { to: Route::Signup {}, "Sign Up" }
                }
            }
        }
        Snackbar {}
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
