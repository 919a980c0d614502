//! Search products use case.

use std::sync::Arc;

use storefront_domain::{ProductsResponse, validate_search_query};
use tracing::debug;

use crate::ApplicationResult;
use crate::ports::ProductRepository;

/// Use case for free-text product search.
pub struct SearchProducts<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> SearchProducts<R> {
    /// Creates a new `SearchProducts` use case.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Searches the catalog.
    ///
    /// # Errors
    /// - Returns a validation error for a blank query, without touching
    ///   the repository
    /// - Propagates the repository failure unchanged
    pub async fn execute(&self, query: &str) -> ApplicationResult<ProductsResponse> {
        if let Err(error) = validate_search_query(query) {
            debug!(%error, "rejected blank query");
            return Err(error.into());
        }
        self.repository.search_products(query).await
    }
}
