//! Get product by id use case.

use std::sync::Arc;

use storefront_domain::{Product, ProductId};

use crate::ApplicationResult;
use crate::ports::ProductRepository;

/// Use case for loading a single product.
///
/// The id is not range-checked; an unknown id surfaces as the
/// repository's not-found failure.
pub struct GetProductById<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> GetProductById<R> {
    /// Creates a new `GetProductById` use case.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Loads the product with the given id.
    ///
    /// # Errors
    /// Propagates the repository failure unchanged.
    pub async fn execute(&self, id: ProductId) -> ApplicationResult<Product> {
        self.repository.get_product_by_id(id).await
    }
}
