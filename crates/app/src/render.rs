//! Plain-text screen rendering.

use std::fmt::Write;

use storefront_domain::{DetailUiState, DetailView, ListUiState, ListView, Product};
use storefront_ui::Screen;

/// Renders the list screen.
#[must_use]
pub fn render_list(state: &ListUiState) -> String {
    let mut out = String::new();
    if !state.search_query.is_empty() {
        let _ = writeln!(out, "search: {}", state.search_query);
    }
    match state.view() {
        ListView::Loading => out.push_str("Loading..."),
        ListView::Error(message) => {
            let _ = write!(out, "Error: {message}\n(type `retry` to try again)");
        }
        ListView::Empty(message) => out.push_str(message),
        ListView::Products(products) => {
            let lines: Vec<String> = products.iter().map(list_line).collect();
            out.push_str(&lines.join("\n"));
        }
    }
    if state.is_searching {
        out.push_str("\nSearching...");
    }
    out
}

fn list_line(product: &Product) -> String {
    format!(
        "[{}] {} | {} | {} | {} ({})",
        product.id,
        product.title,
        product.brand,
        product.display_price(),
        product.category,
        product.display_rating()
    )
}

/// Renders the detail screen.
#[must_use]
pub fn render_detail(state: &DetailUiState) -> String {
    match state.view() {
        DetailView::Loading => "Loading...".to_string(),
        DetailView::Error(message) => {
            format!("Error: {message}\n(type `retry` to try again, `back` to return)")
        }
        DetailView::Idle => "No product selected".to_string(),
        DetailView::Product(product) => detail_text(product),
    }
}

fn detail_text(product: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", product.title);
    let _ = writeln!(out, "Brand: {}", product.brand);
    let _ = writeln!(out, "Category: {}", product.category);
    let _ = writeln!(out, "Price: {}", product.display_price());
    let _ = writeln!(out, "Discount: {}", product.display_discount());
    let _ = writeln!(out, "Rating: {}", product.display_rating());
    let _ = writeln!(out, "Stock: {}", product.display_stock());
    let _ = write!(out, "\n{}", product.description);
    if !product.images.is_empty() {
        let _ = write!(out, "\n\nImages: {}", product.images.len());
    }
    out
}

/// Renders whichever screen is current.
#[must_use]
pub fn render_screen(screen: Screen, list: &ListUiState, detail: &DetailUiState) -> String {
    match screen {
        Screen::ProductList => render_list(list),
        Screen::ProductDetail { .. } => render_detail(detail),
    }
}
