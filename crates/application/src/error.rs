//! Application error types

use storefront_domain::{DomainError, ProductId};
use thiserror::Error;

/// Application-level errors.
///
/// Every variant displays as the exact message the UI shows, so view-models
/// can write `error.to_string()` straight into screen state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Request validation failed before reaching the repository.
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// The catalog request failed; carries the transport's message verbatim.
    #[error("{0}")]
    Http(String),

    /// The requested product does not exist.
    #[error("Product with id {0} not found")]
    ProductNotFound(ProductId),
}

impl ApplicationError {
    /// Creates an HTTP error from any displayable failure.
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http(message.into())
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
