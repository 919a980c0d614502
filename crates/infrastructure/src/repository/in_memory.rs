//! In-process product repository.
//!
//! Serves a fixed set of products with the same matching rules as the
//! remote catalog's demo data. Useful for tests and offline demos.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use storefront_application::{ApplicationError, ApplicationResult, ProductRepository};
use storefront_domain::{Product, ProductId, ProductsResponse};
use tracing::debug;

/// Page size reported in listing metadata.
const PAGE_LIMIT: i32 = 30;

/// Repository backed by a fixed product list.
///
/// Every call is counted, and a failure message can be injected so the
/// next calls fail the way a broken network would.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
    failure: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl InMemoryProductRepository {
    /// Creates a repository serving `products` in the given order.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            failure: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Makes every following call fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock() = Some(message.into());
    }

    /// Clears an injected failure.
    pub fn recover(&self) {
        *self.failure.lock() = None;
    }

    /// Returns how many repository calls have been made.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self, operation: &'static str) -> ApplicationResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        debug!(operation, "in-memory catalog call");
        match self.failure.lock().as_ref() {
            Some(message) => Err(ApplicationError::http(message.clone())),
            None => Ok(()),
        }
    }

    fn page(&self, keep: impl Fn(&Product) -> bool) -> ProductsResponse {
        let products: Vec<Product> = self.products.iter().filter(|&p| keep(p)).cloned().collect();
        let total = i32::try_from(products.len()).unwrap_or(i32::MAX);
        ProductsResponse::new(products, total, 0, PAGE_LIMIT)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl ProductRepository for InMemoryProductRepository {
    async fn get_all_products(&self) -> ApplicationResult<ProductsResponse> {
        self.enter("get_all_products")?;
        Ok(self.page(|_| true))
    }

    async fn get_product_by_id(&self, id: ProductId) -> ApplicationResult<Product> {
        self.enter("get_product_by_id")?;
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApplicationError::ProductNotFound(id))
    }

    async fn search_products(&self, query: &str) -> ApplicationResult<ProductsResponse> {
        self.enter("search_products")?;
        let needle = query.to_lowercase();
        Ok(self.page(|p| {
            contains_ignore_case(&p.title, &needle)
                || contains_ignore_case(&p.description, &needle)
                || contains_ignore_case(&p.brand, &needle)
        }))
    }

    async fn get_products_by_category(&self, category: &str) -> ApplicationResult<ProductsResponse> {
        self.enter("get_products_by_category")?;
        let category = category.to_lowercase();
        Ok(self.page(|p| p.category.to_lowercase() == category))
    }
}
