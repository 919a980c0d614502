//! Storefront Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus the catalog wire format.

pub mod adapters;
pub mod api;
pub mod config;
pub mod repository;
pub mod serialization;

pub use adapters::ReqwestProductApi;
pub use api::{ApiError, ProductApi, ProductDto, ProductsResponseDto};
pub use config::{BASE_URL_ENV, ClientConfig, ConfigError, DEFAULT_BASE_URL, TIMEOUT_ENV};
pub use repository::{ApiProductRepository, InMemoryProductRepository};
pub use serialization::{SerializationError, from_json, from_json_bytes};
