//! Product repository port.

use std::future::Future;

use storefront_domain::{Product, ProductId, ProductsResponse};

use crate::ApplicationResult;

/// Repository for catalog queries.
///
/// Implementations never fail by unwinding: every outcome, including
/// transport and decode failures, comes back as an [`ApplicationResult`].
/// Returned data is not filtered or reordered.
pub trait ProductRepository: Send + Sync {
    /// Fetches the default product listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be reached or decoded.
    fn get_all_products(&self) -> impl Future<Output = ApplicationResult<ProductsResponse>> + Send;

    /// Fetches a single product.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the catalog fails.
    fn get_product_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = ApplicationResult<Product>> + Send;

    /// Fetches products matching a free-text query.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be reached or decoded.
    fn search_products(
        &self,
        query: &str,
    ) -> impl Future<Output = ApplicationResult<ProductsResponse>> + Send;

    /// Fetches the products of one category.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be reached or decoded.
    fn get_products_by_category(
        &self,
        category: &str,
    ) -> impl Future<Output = ApplicationResult<ProductsResponse>> + Send;
}
