//! Get products use case.

use std::sync::Arc;

use storefront_domain::ProductsResponse;

use crate::ApplicationResult;
use crate::ports::ProductRepository;

/// Use case for loading the default product listing.
pub struct GetProducts<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> GetProducts<R> {
    /// Creates a new `GetProducts` use case.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Loads all products.
    ///
    /// # Errors
    /// Propagates the repository failure unchanged.
    pub async fn execute(&self) -> ApplicationResult<ProductsResponse> {
        self.repository.get_all_products().await
    }
}
