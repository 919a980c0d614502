//! Get products by category use case.

use std::sync::Arc;

use storefront_domain::{ProductsResponse, validate_category};
use tracing::debug;

use crate::ApplicationResult;
use crate::ports::ProductRepository;

/// Use case for listing one category.
pub struct GetProductsByCategory<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> GetProductsByCategory<R> {
    /// Creates a new `GetProductsByCategory` use case.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists the products in `category`.
    ///
    /// # Errors
    /// - Returns a validation error for a blank category, without touching
    ///   the repository
    /// - Propagates the repository failure unchanged
    pub async fn execute(&self, category: &str) -> ApplicationResult<ProductsResponse> {
        if let Err(error) = validate_category(category) {
            debug!(%error, "rejected blank category");
            return Err(error.into());
        }
        self.repository.get_products_by_category(category).await
    }
}
