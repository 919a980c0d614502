//! Storefront UI - Presentation layer
//!
//! This crate holds the screen logic of the Storefront product browser:
//! observable state containers, one view-model per screen, and the
//! controller that routes user commands between them. It is independent
//! of any rendering toolkit.

pub mod bridge;
pub mod state;
pub mod view_model;

#[cfg(test)]
mod test_support;

pub use bridge::{AppController, Screen, UiCommand};
pub use state::StateStore;
pub use view_model::{
    LOAD_ALL_FALLBACK, LOAD_PRODUCT_FALLBACK, ProductDetailViewModel, ProductListViewModel,
    RequestSequence, SEARCH_FALLBACK, TaskScope, Ticket,
};
