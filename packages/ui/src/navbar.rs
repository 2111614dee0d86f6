use dioxus::prelude::*;

use crate::icons::FaMagnifyingGlass;
use crate::session::use_search;
use crate::Icon;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: crate::SHOP_CSS }
        nav {
            class: "navbar",
            {children}
        }
    }
}

/// Search box bound to the shared search text. Hidden on narrow screens by CSS.
#[component]
pub fn SearchBar() -> Element {
    let mut search = use_search();

    rsx! {
        div {
            class: "navbar-search",
            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            input {
                r#type: "search",
                placeholder: "Search...",
                value: search(),
                oninput: move |evt| search.set(evt.value()),
            }
        }
    }
}
