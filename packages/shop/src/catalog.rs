//! # Catalog derivation — filter, sort, and price helpers
//!
//! The catalog view keeps the raw product list from the API and derives what it
//! shows on every render. Both steps are pure functions so they can be tested
//! without a UI harness:
//!
//! 1. [`filter_products`] keeps products in the selected category whose name or
//!    description contains the search text (case-insensitive).
//! 2. [`sort_products`] orders the filtered set by a [`SortKey`]. The sort is
//!    stable, and [`SortKey::Default`] keeps the filtered order untouched.

use std::cmp::Ordering;

use crate::models::Product;

/// Pseudo-category that matches every product.
pub const CATEGORY_ALL: &str = "All";

/// Catalog ordering selected in the "Sort By" dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    Newest,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Default,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Newest,
    ];

    /// Parse a dropdown value. Unknown values fall back to [`SortKey::Default`].
    pub fn parse(value: &str) -> Self {
        match value {
            "priceLowToHigh" => SortKey::PriceAsc,
            "priceHighToLow" => SortKey::PriceDesc,
            "newest" => SortKey::Newest,
            _ => SortKey::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceAsc => "priceLowToHigh",
            SortKey::PriceDesc => "priceHighToLow",
            SortKey::Newest => "newest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Default => "Default",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Newest => "Newest",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Default => Ordering::Equal,
            SortKey::PriceAsc => a.price.total_cmp(&b.price),
            SortKey::PriceDesc => b.price.total_cmp(&a.price),
            SortKey::Newest => compare_ids(&b.id, &a.id),
        }
    }
}

/// Identifiers are either numeric or fixed-width hex object ids whose prefix is
/// a creation timestamp. Numeric ids compare as numbers and rank below every
/// other id; the rest compare lexicographically. Ties fall back to the raw text
/// so the ordering stays total.
fn compare_ids(a: &str, b: &str) -> Ordering {
    id_key(a).cmp(&id_key(b))
}

fn id_key(id: &str) -> (bool, Option<u64>, &str) {
    let numeric = id.parse::<u64>().ok();
    (numeric.is_none(), numeric, id)
}

/// Prefix the API's category list with [`CATEGORY_ALL`].
pub fn with_all_category(categories: Vec<String>) -> Vec<String> {
    let mut all = Vec::with_capacity(categories.len() + 1);
    all.push(CATEGORY_ALL.to_string());
    all.extend(categories.into_iter().filter(|c| c != CATEGORY_ALL));
    all
}

/// Products matching `category` (or all, for [`CATEGORY_ALL`]) whose name or
/// description contains `search`, ignoring case. Input order is preserved.
pub fn filter_products(products: &[Product], category: &str, search: &str) -> Vec<Product> {
    let needle = search.trim().to_lowercase();
    products
        .iter()
        .filter(|p| category == CATEGORY_ALL || category.is_empty() || p.category == category)
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Stable sort of `filtered` by `key`.
pub fn sort_products(filtered: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = filtered.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

/// Quantity after an edit: never below 1.
pub fn clamp_quantity(input: i64) -> u32 {
    input.clamp(1, u32::MAX as i64) as u32
}

/// Parse a quantity field. Anything that is not a number counts as 0 and is
/// clamped up to 1.
pub fn parse_quantity(input: &str) -> u32 {
    let value = input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.trunc() as i64)
        .unwrap_or(0);
    clamp_quantity(value)
}

pub fn line_total(price: f64, quantity: u32) -> f64 {
    price * f64::from(quantity)
}

/// Format a rupee amount with Indian digit grouping: `165999` → `"1,65,999"`.
/// Fractional paise are kept to two places only when present.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = (amount.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let paise = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (h, t) = rest.split_at(rest.len() - 2);
            groups.push(t);
            rest = h;
        }
        groups.push(rest);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    let sign = if negative { "-" } else { "" };
    if paise == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{paise:02}")
    }
}

/// Next index in a carousel of `len` items, wrapping to the start.
pub fn cycle_index(current: usize, len: usize) -> usize {
    if len == 0 || current + 1 >= len {
        0
    } else {
        current + 1
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    fn product(id: &str, name: &str, category: &str, price: f64, description: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price,
            description: description.to_string(),
            ..Product::default()
        }
    }

    /// Six products spanning four categories, ids in creation order.
    pub(crate) fn sample_catalog() -> Vec<Product> {
        vec![
            product("670505df50a4f058652090c1", "Sports Shoes By Reebok", "Shoes", 5003.0, "It's not a shoe, it's your partner!"),
            product("67096581c82c184b2f24a4ef", "Microwave Oven", "Cooking", 20000.0, "Microwave oven with multiple options."),
            product("67028dd0a987f12c70da77dd", "Ladies Watch", "Watches", 1998.0, "It's not a watch, it's your partner!"),
            product("670a5ad3f7e88f41a7a97c45", "iPhone 16", "Electronics", 165999.0, "iPhone 16 new."),
            product("671909c6162b5a7ded803011", "Running Shoes for Men", "Shoes", 899.0, "Stylish and comfortable running shoes."),
            product("671a00000000000000000001", "Trail Runner", "Shoes", 2499.0, "Grippy sole for RUNNING off-road."),
        ]
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_filter_category_and_search() {
        let catalog = sample_catalog();
        let filtered = filter_products(&catalog, "Shoes", "running");
        assert_eq!(names(&filtered), vec!["Running Shoes for Men", "Trail Runner"]);

        let sorted = sort_products(&filtered, SortKey::PriceAsc);
        assert_eq!(names(&sorted), vec!["Running Shoes for Men", "Trail Runner"]);
        let sorted = sort_products(&filtered, SortKey::PriceDesc);
        assert_eq!(names(&sorted), vec!["Trail Runner", "Running Shoes for Men"]);
    }

    #[test]
    fn test_filter_all_category_and_empty_search() {
        let catalog = sample_catalog();
        assert_eq!(filter_products(&catalog, CATEGORY_ALL, "").len(), 6);
        assert_eq!(filter_products(&catalog, "Shoes", "").len(), 3);
        assert!(filter_products(&catalog, "Toys", "").is_empty());
    }

    #[test]
    fn test_search_matches_description_case_insensitive() {
        let catalog = sample_catalog();
        let filtered = filter_products(&catalog, CATEGORY_ALL, "PARTNER");
        assert_eq!(names(&filtered), vec!["Sports Shoes By Reebok", "Ladies Watch"]);
    }

    #[test]
    fn test_sort_by_price() {
        let catalog = sample_catalog();
        let asc = sort_products(&catalog, SortKey::PriceAsc);
        assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));
        let desc = sort_products(&catalog, SortKey::PriceDesc);
        assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn test_sort_is_stable_on_equal_prices() {
        let items = vec![
            product("1", "a", "X", 10.0, ""),
            product("2", "b", "X", 5.0, ""),
            product("3", "c", "X", 10.0, ""),
            product("4", "d", "X", 5.0, ""),
        ];
        assert_eq!(names(&sort_products(&items, SortKey::PriceAsc)), vec!["b", "d", "a", "c"]);
        assert_eq!(names(&sort_products(&items, SortKey::PriceDesc)), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_sort_newest_by_id_descending() {
        let catalog = sample_catalog();
        let newest = sort_products(&catalog, SortKey::Newest);
        assert_eq!(newest[0].name, "Trail Runner");
        assert_eq!(newest[5].name, "Ladies Watch");

        let numeric = vec![product("9", "nine", "X", 1.0, ""), product("10", "ten", "X", 1.0, "")];
        assert_eq!(names(&sort_products(&numeric, SortKey::Newest)), vec!["ten", "nine"]);
    }

    #[test]
    fn test_sort_newest_with_mixed_ids() {
        let mut items = Vec::new();
        for n in 0..200 {
            items.push(product(&n.to_string(), "numeric", "X", 1.0, ""));
            items.push(product(&format!("{n}a"), "text", "X", 1.0, ""));
        }
        let sorted = sort_products(&items, SortKey::Newest);
        assert_eq!(sorted.len(), 400);
        // Text ids first (descending), then numeric ids by value.
        assert_eq!(sorted[0].id, "9a");
        assert!(sorted[..200].iter().all(|p| p.name == "text"));
        assert_eq!(sorted[200].id, "199");
        assert_eq!(sorted[399].id, "0");
        assert!(sorted
            .windows(2)
            .all(|w| compare_ids(&w[1].id, &w[0].id) != Ordering::Greater));
    }

    #[test]
    fn test_default_and_unknown_keys_preserve_order() {
        let catalog = sample_catalog();
        assert_eq!(sort_products(&catalog, SortKey::Default), catalog);
        assert_eq!(SortKey::parse("alphabetical"), SortKey::Default);
        assert_eq!(sort_products(&catalog, SortKey::parse("")), catalog);
    }

    #[test]
    fn test_sort_key_values_roundtrip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
    }

    #[test]
    fn test_with_all_category() {
        let categories = with_all_category(vec!["Shoes".to_string(), "Watches".to_string()]);
        assert_eq!(categories, vec!["All", "Shoes", "Watches"]);
    }

    #[test]
    fn test_quantity_clamped_to_one() {
        assert_eq!(clamp_quantity(-4), 1);
        assert_eq!(clamp_quantity(0), 1);
        assert_eq!(clamp_quantity(3), 3);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("-2"), 1);
        assert_eq!(parse_quantity("7"), 7);
        assert_eq!(parse_quantity("2.9"), 2);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(899.0, 3), 2697.0);
        assert_eq!(line_total(19.99, 1), 19.99);
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(899.0), "899");
        assert_eq!(format_inr(5003.0), "5,003");
        assert_eq!(format_inr(165999.0), "1,65,999");
        assert_eq!(format_inr(12345678.0), "1,23,45,678");
        assert_eq!(format_inr(1998.5), "1,998.50");
    }

    #[test]
    fn test_cycle_index_wraps() {
        assert_eq!(cycle_index(0, 3), 1);
        assert_eq!(cycle_index(2, 3), 0);
        assert_eq!(cycle_index(0, 0), 0);
    }
}
