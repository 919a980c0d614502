//! Screen state types for UI binding.
//!
//! Each screen owns exactly one state value. View-models replace the whole
//! value on every transition; views only ever read snapshots.

use serde::Serialize;

use crate::product::Product;

/// Message shown when the product list is empty during a search.
pub const NO_PRODUCTS_FOUND: &str = "No products found";

/// Message shown when the product list is empty outside a search.
pub const NO_PRODUCTS_AVAILABLE: &str = "No products available";

/// State of the product list screen.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ListUiState {
    /// Products currently displayed, in server order.
    pub products: Vec<Product>,
    /// A full-list load is in flight.
    pub is_loading: bool,
    /// Message of the last failed action, if any.
    pub error: Option<String>,
    /// Query of the last non-blank search.
    pub search_query: String,
    /// A search is in flight.
    pub is_searching: bool,
}

/// What the list screen should render, in priority order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListView<'a> {
    /// Show a progress indicator.
    Loading,
    /// Show the error with a retry action.
    Error(&'a str),
    /// Show an empty-list placeholder message.
    Empty(&'static str),
    /// Show the products.
    Products(&'a [Product]),
}

impl ListUiState {
    /// Derives what the list screen should render.
    ///
    /// Only the full-list load blocks the screen; results of an in-flight
    /// search replace the list once they arrive.
    #[must_use]
    pub fn view(&self) -> ListView<'_> {
        if self.is_loading {
            return ListView::Loading;
        }
        if let Some(error) = &self.error {
            return ListView::Error(error);
        }
        if self.products.is_empty() {
            return ListView::Empty(if self.is_searching {
                NO_PRODUCTS_FOUND
            } else {
                NO_PRODUCTS_AVAILABLE
            });
        }
        ListView::Products(&self.products)
    }
}

/// State of the product detail screen.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DetailUiState {
    /// The loaded product; absent until loaded or after a failure.
    pub product: Option<Product>,
    /// A load is in flight.
    pub is_loading: bool,
    /// Message of the last failed load, if any.
    pub error: Option<String>,
}

/// What the detail screen should render, in priority order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailView<'a> {
    /// Show a progress indicator.
    Loading,
    /// Show the error with a retry action.
    Error(&'a str),
    /// Show the product.
    Product(&'a Product),
    /// Nothing requested yet.
    Idle,
}

impl DetailUiState {
    /// Derives what the detail screen should render.
    #[must_use]
    pub fn view(&self) -> DetailView<'_> {
        if self.is_loading {
            return DetailView::Loading;
        }
        if let Some(error) = &self.error {
            return DetailView::Error(error);
        }
        self.product
            .as_ref()
            .map_or(DetailView::Idle, DetailView::Product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            description: String::new(),
            price: 1.0,
            discount_percentage: 0.0,
            rating: 0.0,
            stock: 0,
            brand: "Brand".to_string(),
            category: "misc".to_string(),
            thumbnail: String::new(),
            images: Vec::new(),
        }
    }

    #[test]
    fn test_list_defaults() {
        let state = ListUiState::default();
        assert!(state.products.is_empty());
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(state.search_query, "");
        assert!(!state.is_searching);
    }

    #[test]
    fn test_list_view_priority() {
        let mut state = ListUiState {
            is_loading: true,
            error: Some("boom".to_string()),
            ..Default::default()
        };
        assert_eq!(state.view(), ListView::Loading);

        state.is_loading = false;
        assert_eq!(state.view(), ListView::Error("boom"));

        state.error = None;
        assert_eq!(state.view(), ListView::Empty(NO_PRODUCTS_AVAILABLE));

        state.is_searching = true;
        assert_eq!(state.view(), ListView::Empty(NO_PRODUCTS_FOUND));

        state.products = vec![product(1)];
        assert!(matches!(state.view(), ListView::Products(p) if p.len() == 1));
    }

    #[test]
    fn test_detail_view_priority() {
        let mut state = DetailUiState::default();
        assert_eq!(state.view(), DetailView::Idle);

        state.is_loading = true;
        assert_eq!(state.view(), DetailView::Loading);

        state.is_loading = false;
        state.error = Some("Failed to load product".to_string());
        assert_eq!(state.view(), DetailView::Error("Failed to load product"));

        state.error = None;
        state.product = Some(product(7));
        assert!(matches!(state.view(), DetailView::Product(p) if p.id == 7));
    }

    #[test]
    fn test_state_serializes_for_inspection() {
        let state = DetailUiState {
            product: None,
            is_loading: true,
            error: None,
        };
        let json = serde_json::to_value(&state).unwrap_or_default();
        assert_eq!(json["is_loading"], serde_json::Value::Bool(true));
    }
}
