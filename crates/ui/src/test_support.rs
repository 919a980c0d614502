//! Fixtures shared by view-model tests.

use std::sync::Arc;

use storefront_application::{ApplicationResult, ProductRepository, ProductUseCases};
use storefront_domain::{Product, ProductId, ProductsResponse};
use storefront_infrastructure::InMemoryProductRepository;
use tokio::sync::Notify;

pub fn product(id: ProductId, title: &str, price: f64, brand: &str, category: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: format!("{brand} {category}"),
        price,
        discount_percentage: 10.0,
        rating: 4.5,
        stock: 100,
        brand: brand.to_string(),
        category: category.to_string(),
        thumbnail: format!("https://cdn.example.com/{id}/thumb.jpg"),
        images: Vec::new(),
    }
}

/// Two products: "Test Product" and "iPhone".
pub fn catalog() -> InMemoryProductRepository {
    InMemoryProductRepository::new(vec![
        product(1, "Test Product", 99.99, "Test Brand", "test"),
        product(2, "iPhone", 999.99, "Apple", "smartphones"),
    ])
}

pub fn use_cases<R: ProductRepository>(repository: R) -> ProductUseCases<R> {
    ProductUseCases::new(Arc::new(repository))
}

/// Holds back requests for one key until the gate is opened.
///
/// The key is compared against search queries and product ids.
pub struct GatedRepository {
    inner: InMemoryProductRepository,
    key: String,
    gate: Arc<Notify>,
}

impl GatedRepository {
    pub fn new(inner: InMemoryProductRepository, key: &str) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let repository = Self {
            inner,
            key: key.to_string(),
            gate: Arc::clone(&gate),
        };
        (repository, gate)
    }

    async fn hold(&self, key: &str) {
        if key == self.key {
            self.gate.notified().await;
        }
    }
}

impl ProductRepository for GatedRepository {
    async fn get_all_products(&self) -> ApplicationResult<ProductsResponse> {
        self.inner.get_all_products().await
    }

    async fn get_product_by_id(&self, id: ProductId) -> ApplicationResult<Product> {
        self.hold(&id.to_string()).await;
        self.inner.get_product_by_id(id).await
    }

    async fn search_products(&self, query: &str) -> ApplicationResult<ProductsResponse> {
        self.hold(query).await;
        self.inner.search_products(query).await
    }

    async fn get_products_by_category(&self, category: &str) -> ApplicationResult<ProductsResponse> {
        self.inner.get_products_by_category(category).await
    }
}
