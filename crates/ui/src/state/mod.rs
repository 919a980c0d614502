//! Observable UI state.

mod store;

pub use store::StateStore;
