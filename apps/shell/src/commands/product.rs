//! # Product Commands
//!
//! Catalog browsing with local search filtering.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  User types "latte" in the search box                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  set_search_query("latte")   ◄── updates the shared query string        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  list_products()                                                        │
//! │       │                                                                 │
//! │       ├──► GET /products          (full catalog, never cached)          │
//! │       │                                                                 │
//! │       └──► filter_by_name(...)    (case-insensitive substring, local)   │
//! │                                                                         │
//! │  Empty query ⇒ the whole catalog comes back unfiltered.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use brew_core::search::filter_by_name;
use brew_core::types::Product;

use crate::error::ShellError;
use crate::state::AppState;

/// Updates the shared search query.
///
/// Takes effect on the next `list_products` call; no request is made here.
pub fn set_search_query(state: &AppState, query: impl Into<String>) {
    let query = query.into();
    debug!(query = %query, "set_search_query command");
    state.search().set_query(query);
}

/// Fetches the catalog and applies the current search filter.
///
/// ## Returns
/// Products whose name contains the query, case-insensitively; the whole
/// catalog when the query is blank.
pub async fn list_products(state: &AppState) -> Result<Vec<Product>, ShellError> {
    let query = state.search().query();
    debug!(query = %query, "list_products command");

    let products = state.api().products().list().await?;
    let filtered: Vec<Product> = filter_by_name(&products, &query)
        .into_iter()
        .cloned()
        .collect();

    debug!(
        fetched = products.len(),
        shown = filtered.len(),
        "list_products complete"
    );

    Ok(filtered)
}

/// Fetches a single product for the detail screen.
pub async fn get_product(state: &AppState, product_id: &str) -> Result<Product, ShellError> {
    debug!(product_id = %product_id, "get_product command");
    let product = state.api().products().get(product_id).await?;
    Ok(product)
}
