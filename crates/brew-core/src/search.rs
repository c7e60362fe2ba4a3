//! # Search Filter
//!
//! A single free-text search string shared across screens, plus the pure
//! filter screens apply to their fetched product lists.
//!
//! There is no indexing and no persistence: screens filter their local copy
//! of the catalog on each render.

use std::sync::{Arc, RwLock};

use crate::types::Product;

/// Filters products by case-insensitive substring match against the name.
///
/// An empty (or whitespace-only) query returns the full list; a query
/// matching no product name returns an empty list.
///
/// ## Example
/// ```rust,ignore
/// let hits = filter_by_name(&products, "coffee"); // matches "Coffee Latte"
/// ```
pub fn filter_by_name<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let query = query.trim().to_lowercase();

    if query.is_empty() {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&query))
        .collect()
}

/// Shared handle to the search string.
///
/// Screens that render a search box write to it; screens that list products
/// read it and filter with [`filter_by_name`]. Reads vastly outnumber
/// writes, hence `RwLock` rather than `Mutex`.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: Arc<RwLock<String>>,
}

impl SearchState {
    /// Creates a new empty search state.
    pub fn new() -> Self {
        SearchState::default()
    }

    /// Returns a copy of the current query.
    pub fn query(&self) -> String {
        self.query.read().expect("search lock poisoned").clone()
    }

    /// Replaces the current query.
    pub fn set_query(&self, query: impl Into<String>) {
        *self.query.write().expect("search lock poisoned") = query.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use chrono::Utc;

    fn product(name: &str) -> Product {
        Product {
            product_id: format!("p-{}", name.to_lowercase().replace(' ', "-")),
            name: name.to_string(),
            category_id: "c-1".to_string(),
            price: Money::from_cents(350),
            image: String::new(),
            quantity: 5,
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("Coffee Latte"),
            product("Cappuccino"),
            product("Iced Coffee"),
            product("Green Tea"),
        ]
    }

    #[test]
    fn test_empty_query_returns_full_list() {
        let products = catalog();
        assert_eq!(filter_by_name(&products, "").len(), 4);
        assert_eq!(filter_by_name(&products, "   ").len(), 4);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let products = catalog();
        let hits = filter_by_name(&products, "coffee");
        let names: Vec<&str> = hits.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Coffee Latte", "Iced Coffee"]);

        assert_eq!(filter_by_name(&products, "COFFEE").len(), 2);
        assert_eq!(filter_by_name(&products, "cApPuC").len(), 1);
    }

    #[test]
    fn test_no_match_returns_empty_list() {
        let products = catalog();
        assert!(filter_by_name(&products, "espresso").is_empty());
    }

    #[test]
    fn test_search_state_is_shared() {
        let state = SearchState::new();
        let other = state.clone();

        state.set_query("latte");
        assert_eq!(other.query(), "latte");
    }
}
