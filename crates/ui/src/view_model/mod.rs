//! View-models: one per screen.
//!
//! A view-model owns its screen's [`StateStore`](crate::state::StateStore),
//! turns user actions into use-case calls on background tasks, and writes
//! the outcome back as a new state snapshot. Failures end here: they become
//! a message in the state, never an error returned to the caller.

mod detail;
mod list;
mod scope;

pub use detail::{LOAD_PRODUCT_FALLBACK, ProductDetailViewModel};
pub use list::{LOAD_ALL_FALLBACK, ProductListViewModel, SEARCH_FALLBACK};
pub use scope::{RequestSequence, TaskScope, Ticket};

use storefront_application::ApplicationError;

/// Returns the failure's message, or `fallback` if it has none.
fn failure_message(error: &ApplicationError, fallback: &str) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
