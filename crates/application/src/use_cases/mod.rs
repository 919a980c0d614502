//! Application use cases (business logic orchestration).

mod get_product_by_id;
mod get_products;
mod get_products_by_category;
mod search_products;

use std::sync::Arc;

pub use get_product_by_id::*;
pub use get_products::*;
pub use get_products_by_category::*;
pub use search_products::*;

use crate::ports::ProductRepository;

/// All catalog use cases, sharing one repository.
pub struct ProductUseCases<R: ProductRepository> {
    /// Full listing.
    pub get_products: Arc<GetProducts<R>>,
    /// Single product lookup.
    pub get_product_by_id: Arc<GetProductById<R>>,
    /// Free-text search.
    pub search_products: Arc<SearchProducts<R>>,
    /// Category listing.
    pub get_products_by_category: Arc<GetProductsByCategory<R>>,
}

impl<R: ProductRepository> ProductUseCases<R> {
    /// Builds every use case over the same repository.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            get_products: Arc::new(GetProducts::new(Arc::clone(&repository))),
            get_product_by_id: Arc::new(GetProductById::new(Arc::clone(&repository))),
            search_products: Arc::new(SearchProducts::new(Arc::clone(&repository))),
            get_products_by_category: Arc::new(GetProductsByCategory::new(repository)),
        }
    }
}
