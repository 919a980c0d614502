//! Domain error types

use thiserror::Error;

/// Domain-level errors raised by request validation.
///
/// The display text is shown to the user as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A search query was empty or whitespace only.
    #[error("Search query cannot be empty")]
    EmptySearchQuery,

    /// A category filter was empty or whitespace only.
    #[error("Category cannot be empty")]
    EmptyCategory,
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Checks that a search query contains something other than whitespace.
///
/// # Errors
///
/// Returns [`DomainError::EmptySearchQuery`] for a blank query.
pub fn validate_search_query(query: &str) -> DomainResult<()> {
    if is_blank(query) {
        return Err(DomainError::EmptySearchQuery);
    }
    Ok(())
}

/// Checks that a category contains something other than whitespace.
///
/// # Errors
///
/// Returns [`DomainError::EmptyCategory`] for a blank category.
pub fn validate_category(category: &str) -> DomainResult<()> {
    if is_blank(category) {
        return Err(DomainError::EmptyCategory);
    }
    Ok(())
}

/// Returns true if the text is empty or consists solely of whitespace.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
