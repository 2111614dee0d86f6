use dioxus::prelude::*;
use shop::SortKey;

/// Exclusive category chips. The active chip is highlighted.
#[component]
pub fn CategoryFilter(
    categories: Vec<String>,
    selected: String,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "category-filter",
            role: "group",
            for category in categories {
                button {
                    key: "{category}",
                    class: if category == selected { "chip active" } else { "chip" },
                    onclick: {
                        let category = category.clone();
                        move |_: MouseEvent| on_select.call(category.clone())
                    },
                    "{category}"
                }
            }
        }
    }
}

#[component]
pub fn SortSelect(selected: SortKey, on_change: EventHandler<SortKey>) -> Element {
    rsx! {
        div {
            class: "sort-select",
            label { r#for: "sort-by", "Sort By:" }
            select {
                id: "sort-by",
                value: selected.as_str(),
                onchange: move |evt| on_change.call(SortKey::parse(&evt.value())),
                for key in SortKey::ALL {
                    option {
                        key: "{key.as_str()}",
                        value: key.as_str(),
                        selected: key == selected,
                        "{key.label()}"
                    }
                }
            }
        }
    }
}
