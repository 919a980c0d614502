//! `ProductRepository` implementations.

mod api_repository;
mod in_memory;

pub use api_repository::ApiProductRepository;
pub use in_memory::InMemoryProductRepository;
