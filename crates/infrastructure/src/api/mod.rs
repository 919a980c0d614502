//! Catalog API client port and transport types.
//!
//! The [`ProductApi`] trait is the single seam between the repository and
//! the network. [`crate::adapters::ReqwestProductApi`] is the production
//! implementation; tests substitute their own.

mod dto;

use std::future::Future;

use storefront_domain::ProductId;
use thiserror::Error;

pub use dto::{ProductDto, ProductsResponseDto};

/// Errors raised at the catalog API boundary.
///
/// Messages are forwarded unchanged to the UI by the repository.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out")]
    Timeout {
        /// Requested URL.
        url: String,
    },

    /// Connection, TLS or body transfer failure.
    #[error("{0}")]
    Transport(String),

    /// The catalog answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status {
        /// Response status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The response body was not the expected JSON.
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    /// Returns true if the catalog reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Port for the remote product catalog.
///
/// One HTTP GET per call; no retries.
pub trait ProductApi: Send + Sync {
    /// `GET /products`
    fn fetch_all(&self) -> impl Future<Output = Result<ProductsResponseDto, ApiError>> + Send;

    /// `GET /products/{id}`
    fn fetch_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<ProductDto, ApiError>> + Send;

    /// `GET /products/search?q={query}`
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<ProductsResponseDto, ApiError>> + Send;

    /// `GET /products/category/{category}`
    fn fetch_by_category(
        &self,
        category: &str,
    ) -> impl Future<Output = Result<ProductsResponseDto, ApiError>> + Send;
}
