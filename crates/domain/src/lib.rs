//! Storefront Domain - Core catalog types
//!
//! This crate defines the domain model for the Storefront product browser.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod format;
pub mod product;
pub mod state;

pub use error::{
    DomainError, DomainResult, is_blank, validate_category, validate_search_query,
};
pub use format::{format_one_decimal, format_two_decimals};
pub use product::{Product, ProductId, ProductsResponse, UNKNOWN_BRAND};
pub use state::{
    DetailUiState, DetailView, ListUiState, ListView, NO_PRODUCTS_AVAILABLE, NO_PRODUCTS_FOUND,
};
