//! Product catalog domain model.
//!
//! These types are the stable in-process representation of catalog data.
//! They carry no knowledge of the remote API's JSON shape; mapping from
//! the wire format happens once, at the repository boundary.

use serde::{Deserialize, Serialize};

use crate::format::{format_one_decimal, format_two_decimals};

/// Identifier of a product within the catalog.
pub type ProductId = u32;

/// Brand substituted when the catalog omits one.
pub const UNKNOWN_BRAND: &str = "Unknown Brand";

/// A single catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique key within a result set.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Discount in percent (0-100).
    pub discount_percentage: f64,
    /// Average rating.
    pub rating: f64,
    /// Units in stock.
    pub stock: i32,
    /// Brand name, never empty after mapping.
    pub brand: String,
    /// Category slug.
    pub category: String,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Gallery image URLs, in display order.
    pub images: Vec<String>,
}

impl Product {
    /// Price formatted for display, e.g. `$99.99`.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("${}", format_two_decimals(self.price))
    }

    /// Rating formatted with one decimal.
    #[must_use]
    pub fn display_rating(&self) -> String {
        format_one_decimal(self.rating)
    }

    /// Discount formatted as a percentage, e.g. `10.5%`.
    #[must_use]
    pub fn display_discount(&self) -> String {
        format!("{}%", format_one_decimal(self.discount_percentage))
    }

    /// Stock formatted for display.
    #[must_use]
    pub fn display_stock(&self) -> String {
        format!("{} units", self.stock)
    }
}

/// A page of products plus the server's pagination metadata.
///
/// `total`, `skip` and `limit` are passed through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductsResponse {
    /// Products in server order.
    pub products: Vec<Product>,
    /// Total number of matching products on the server.
    pub total: i32,
    /// Offset of this page.
    pub skip: i32,
    /// Page size requested by the server.
    pub limit: i32,
}

impl ProductsResponse {
    /// Creates a response with the given products and metadata.
    #[must_use]
    pub const fn new(products: Vec<Product>, total: i32, skip: i32, limit: i32) -> Self {
        Self {
            products,
            total,
            skip,
            limit,
        }
    }

    /// Returns the number of products on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if this page has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
