//! Wire-shape records for the catalog's JSON responses.

use serde::{Deserialize, Serialize};
use storefront_domain::{Product, ProductId, ProductsResponse, UNKNOWN_BRAND};

/// A product as the catalog sends it.
///
/// `brand` stays optional here; the default is applied when mapping to the
/// domain model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    /// Product id.
    pub id: ProductId,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Discount in percent.
    pub discount_percentage: f64,
    /// Average rating.
    pub rating: f64,
    /// Units in stock.
    pub stock: i32,
    /// Brand, absent for some products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Category slug.
    pub category: String,
    /// Thumbnail URL.
    pub thumbnail: String,
    /// Image URLs.
    pub images: Vec<String>,
}

/// A page of products as the catalog sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsResponseDto {
    /// Products on this page.
    pub products: Vec<ProductDto>,
    /// Total matches on the server.
    pub total: i32,
    /// Page offset.
    pub skip: i32,
    /// Page size.
    pub limit: i32,
}

impl ProductDto {
    /// Fills in defaults for optional wire fields.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.brand.is_none() {
            self.brand = Some(UNKNOWN_BRAND.to_string());
        }
        self
    }
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        let dto = dto.normalize();
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            price: dto.price,
            discount_percentage: dto.discount_percentage,
            rating: dto.rating,
            stock: dto.stock,
            brand: dto.brand.unwrap_or_default(),
            category: dto.category,
            thumbnail: dto.thumbnail,
            images: dto.images,
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.price,
            discount_percentage: product.discount_percentage,
            rating: product.rating,
            stock: product.stock,
            brand: Some(product.brand),
            category: product.category,
            thumbnail: product.thumbnail,
            images: product.images,
        }
    }
}

impl From<ProductsResponseDto> for ProductsResponse {
    fn from(dto: ProductsResponseDto) -> Self {
        Self {
            products: dto.products.into_iter().map(Product::from).collect(),
            total: dto.total,
            skip: dto.skip,
            limit: dto.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::from_json;
    use pretty_assertions::assert_eq;

    const IPHONE: &str = r#"{
        "id": 2,
        "title": "iPhone",
        "description": "Apple iPhone",
        "price": 999.99,
        "discountPercentage": 5.0,
        "rating": 4.8,
        "stock": 50,
        "brand": "Apple",
        "category": "smartphones",
        "thumbnail": "iphone-thumbnail.jpg",
        "images": ["iphone1.jpg", "iphone2.jpg"],
        "sku": "APL-IPH-15",
        "tags": ["phones"]
    }"#;

    fn full_dto() -> ProductDto {
        ProductDto {
            id: 1,
            title: "Test Product".to_string(),
            description: "Test Description".to_string(),
            price: 99.99,
            discount_percentage: 10.0,
            rating: 4.5,
            stock: 100,
            brand: Some("Test Brand".to_string()),
            category: "Test Category".to_string(),
            thumbnail: "test-thumbnail.jpg".to_string(),
            images: vec![
                "image1.jpg".to_string(),
                "image2.jpg".to_string(),
                "image3.jpg".to_string(),
            ],
        }
    }

    #[test]
    fn test_decodes_catalog_product_ignoring_unknown_fields() {
        let dto: ProductDto = from_json(IPHONE).expect("decode");
        assert_eq!(dto.id, 2);
        assert_eq!(dto.brand.as_deref(), Some("Apple"));
        assert_eq!(dto.discount_percentage, 5.0);
        assert_eq!(dto.images, vec!["iphone1.jpg", "iphone2.jpg"]);
    }

    #[test]
    fn test_mapping_round_trip_preserves_every_field() {
        let dto = full_dto();
        let product = Product::from(dto.clone());

        assert_eq!(product.id, 1);
        assert_eq!(product.title, "Test Product");
        assert_eq!(product.price, 99.99);
        assert_eq!(product.brand, "Test Brand");
        assert_eq!(product.images[2], "image3.jpg");
        assert_eq!(ProductDto::from(product), dto);
    }

    #[test]
    fn test_missing_brand_defaults() {
        let json = IPHONE.replace(r#""brand": "Apple","#, "");
        let dto: ProductDto = from_json(&json).expect("decode");
        assert_eq!(dto.brand, None);

        let product = Product::from(dto);
        assert_eq!(product.brand, "Unknown Brand");
    }

    #[test]
    fn test_null_brand_defaults() {
        let json = IPHONE.replace(r#""brand": "Apple""#, r#""brand": null"#);
        let product = Product::from(from_json::<ProductDto>(&json).expect("decode"));
        assert_eq!(product.brand, UNKNOWN_BRAND);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let json = IPHONE.replace(r#""title": "iPhone","#, "");
        assert!(from_json::<ProductDto>(&json).is_err());
    }

    #[test]
    fn test_response_mapping_keeps_order_and_metadata() {
        let json = format!(
            r#"{{"products": [{IPHONE}, {IPHONE}], "total": 194, "skip": 30, "limit": 2}}"#
        );
        let mut dto: ProductsResponseDto = from_json(&json).expect("decode");
        dto.products[1].id = 3;

        let response = ProductsResponse::from(dto);
        assert_eq!(response.products.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!((response.total, response.skip, response.limit), (194, 30, 2));
    }

    #[test]
    fn test_negative_counts_pass_through() {
        let json = format!(
            r#"{{"products": [{}], "total": -1, "skip": 0, "limit": -1}}"#,
            IPHONE.replace(r#""stock": 50"#, r#""stock": -3"#)
        );
        let response = ProductsResponse::from(from_json::<ProductsResponseDto>(&json).expect("decode"));

        assert_eq!(response.products[0].stock, -3);
        assert_eq!((response.total, response.limit), (-1, -1));
    }
}
