//! Catalog-backed product repository.

use storefront_application::{ApplicationError, ApplicationResult, ProductRepository};
use storefront_domain::{Product, ProductId, ProductsResponse};
use tracing::warn;

use crate::api::{ApiError, ProductApi};

/// Repository that reads from the remote catalog.
///
/// API failures are converted once, here, into [`ApplicationError`]
/// values carrying the original message; successful responses are mapped
/// field-for-field into domain models without filtering or reordering.
#[derive(Debug, Clone)]
pub struct ApiProductRepository<A: ProductApi> {
    api: A,
}

impl<A: ProductApi> ApiProductRepository<A> {
    /// Creates a repository over the given catalog client.
    #[must_use]
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    fn failure(operation: &'static str, error: &ApiError) -> ApplicationError {
        warn!(operation, %error, "catalog call failed");
        ApplicationError::http(error.to_string())
    }
}

impl<A: ProductApi> ProductRepository for ApiProductRepository<A> {
    async fn get_all_products(&self) -> ApplicationResult<ProductsResponse> {
        self.api
            .fetch_all()
            .await
            .map(ProductsResponse::from)
            .map_err(|e| Self::failure("get_all_products", &e))
    }

    async fn get_product_by_id(&self, id: ProductId) -> ApplicationResult<Product> {
        match self.api.fetch_by_id(id).await {
            Ok(dto) => Ok(Product::from(dto)),
            Err(e) if e.is_not_found() => {
                warn!(id, "product not found");
                Err(ApplicationError::ProductNotFound(id))
            }
            Err(e) => Err(Self::failure("get_product_by_id", &e)),
        }
    }

    async fn search_products(&self, query: &str) -> ApplicationResult<ProductsResponse> {
        self.api
            .search(query)
            .await
            .map(ProductsResponse::from)
            .map_err(|e| Self::failure("search_products", &e))
    }

    async fn get_products_by_category(&self, category: &str) -> ApplicationResult<ProductsResponse> {
        self.api
            .fetch_by_category(category)
            .await
            .map(ProductsResponse::from)
            .map_err(|e| Self::failure("get_products_by_category", &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ProductDto, ProductsResponseDto};
    use pretty_assertions::assert_eq;

    /// Catalog stand-in serving two fixed products.
    struct FakeProductApi {
        products: Vec<ProductDto>,
        failure: Option<ApiError>,
    }

    impl FakeProductApi {
        fn new() -> Self {
            Self {
                products: vec![
                    dto(1, "Test Product", 99.99, Some("Test Brand"), "Test Category"),
                    dto(2, "iPhone", 999.99, Some("Apple"), "smartphones"),
                ],
                failure: None,
            }
        }

        fn failing(error: ApiError) -> Self {
            Self {
                failure: Some(error),
                ..Self::new()
            }
        }

        fn check(&self) -> Result<(), ApiError> {
            self.failure.clone().map_or(Ok(()), Err)
        }

        fn page(&self, keep: impl Fn(&ProductDto) -> bool) -> ProductsResponseDto {
            let products: Vec<_> = self.products.iter().filter(|&p| keep(p)).cloned().collect();
            ProductsResponseDto {
                total: i32::try_from(products.len()).unwrap_or(i32::MAX),
                products,
                skip: 0,
                limit: 30,
            }
        }
    }

    fn dto(id: u32, title: &str, price: f64, brand: Option<&str>, category: &str) -> ProductDto {
        ProductDto {
            id,
            title: title.to_string(),
            description: format!("{title} description"),
            price,
            discount_percentage: 10.0,
            rating: 4.5,
            stock: 100,
            brand: brand.map(str::to_string),
            category: category.to_string(),
            thumbnail: format!("{id}-thumbnail.jpg"),
            images: vec![format!("{id}-1.jpg"), format!("{id}-2.jpg")],
        }
    }

    impl ProductApi for FakeProductApi {
        async fn fetch_all(&self) -> Result<ProductsResponseDto, ApiError> {
            self.check()?;
            Ok(self.page(|_| true))
        }

        async fn fetch_by_id(&self, id: ProductId) -> Result<ProductDto, ApiError> {
            self.check()?;
            self.products
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| ApiError::Status {
                    status: 404,
                    url: format!("https://dummyjson.com/products/{id}"),
                })
        }

        async fn search(&self, query: &str) -> Result<ProductsResponseDto, ApiError> {
            self.check()?;
            let needle = query.to_lowercase();
            Ok(self.page(|p| p.title.to_lowercase().contains(&needle)))
        }

        async fn fetch_by_category(&self, category: &str) -> Result<ProductsResponseDto, ApiError> {
            self.check()?;
            Ok(self.page(|p| p.category == category))
        }
    }

    #[tokio::test]
    async fn test_get_all_products_maps_response() {
        let repository = ApiProductRepository::new(FakeProductApi::new());

        let response = repository.get_all_products().await.expect("listing");

        assert_eq!(response.products.len(), 2);
        assert_eq!(response.products[0].title, "Test Product");
        assert_eq!(response.products[0].price, 99.99);
        assert_eq!(response.products[0].brand, "Test Brand");
        assert_eq!((response.total, response.skip, response.limit), (2, 0, 30));
    }

    #[tokio::test]
    async fn test_get_all_products_failure_keeps_message() {
        let repository = ApiProductRepository::new(FakeProductApi::failing(ApiError::Transport(
            "Network error".to_string(),
        )));

        let result = repository.get_all_products().await;

        assert_eq!(result, Err(ApplicationError::http("Network error")));
    }

    #[tokio::test]
    async fn test_get_product_by_id() {
        let repository = ApiProductRepository::new(FakeProductApi::new());

        let product = repository.get_product_by_id(1).await.expect("product");

        assert_eq!(product.id, 1);
        assert_eq!(product.title, "Test Product");
        assert_eq!(product.price, 99.99);
    }

    #[tokio::test]
    async fn test_get_product_by_id_not_found() {
        let repository = ApiProductRepository::new(FakeProductApi::new());

        let result = repository.get_product_by_id(999).await;

        assert_eq!(result, Err(ApplicationError::ProductNotFound(999)));
    }

    #[tokio::test]
    async fn test_other_status_errors_stay_http() {
        let repository = ApiProductRepository::new(FakeProductApi::failing(ApiError::Status {
            status: 500,
            url: "https://dummyjson.com/products/1".to_string(),
        }));

        let error = repository.get_product_by_id(1).await.expect_err("server error");

        assert_eq!(
            error.to_string(),
            "HTTP 500 from https://dummyjson.com/products/1"
        );
    }

    #[tokio::test]
    async fn test_search_products() {
        let repository = ApiProductRepository::new(FakeProductApi::new());

        let response = repository.search_products("iPhone").await.expect("results");

        assert_eq!(response.products.len(), 1);
        assert_eq!(response.products[0].title, "iPhone");
        assert_eq!(response.products[0].brand, "Apple");
    }

    #[tokio::test]
    async fn test_category_and_brand_default() {
        let mut api = FakeProductApi::new();
        api.products.push(dto(3, "Apples", 1.99, None, "groceries"));
        let repository = ApiProductRepository::new(api);

        let response = repository
            .get_products_by_category("groceries")
            .await
            .expect("results");

        assert_eq!(response.products.len(), 1);
        assert_eq!(response.products[0].brand, "Unknown Brand");
    }
}
