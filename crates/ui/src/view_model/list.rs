//! Product list view-model.

use std::sync::Arc;

use storefront_application::{
    ApplicationResult, GetProducts, ProductRepository, ProductUseCases, SearchProducts,
};
use storefront_domain::{ListUiState, ProductsResponse, is_blank};
use tokio::sync::watch;
use tracing::debug;

use super::failure_message;
use super::scope::{RequestSequence, TaskScope, Ticket};
use crate::state::StateStore;

/// Error shown when a full-list load fails without a message.
pub const LOAD_ALL_FALLBACK: &str = "Unknown error occurred";

/// Error shown when a search fails without a message.
pub const SEARCH_FALLBACK: &str = "Search failed";

const LOAD: usize = 0;
const SEARCH: usize = 1;

struct ListCore<R: ProductRepository> {
    get_products: Arc<GetProducts<R>>,
    search_products: Arc<SearchProducts<R>>,
    store: StateStore<ListUiState>,
    sequence: RequestSequence<2>,
}

/// Drives the product list screen.
///
/// Full loads and searches write the same product list. Results are fenced
/// by request order: only the most recently issued action may replace the
/// products or the error, so a slow response can never overwrite a newer
/// one. A superseded action still clears its own progress flag when no
/// newer action of the same kind is pending.
pub struct ProductListViewModel<R: ProductRepository + 'static> {
    core: Arc<ListCore<R>>,
    scope: TaskScope,
}

impl<R: ProductRepository + 'static> ProductListViewModel<R> {
    /// Creates the view-model and immediately starts a full-list load.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn new(get_products: Arc<GetProducts<R>>, search_products: Arc<SearchProducts<R>>) -> Self {
        let view_model = Self {
            core: Arc::new(ListCore {
                get_products,
                search_products,
                store: StateStore::default(),
                sequence: RequestSequence::default(),
            }),
            scope: TaskScope::default(),
        };
        view_model.load_all();
        view_model
    }

    /// Creates the view-model from the shared use case bundle.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn from_use_cases(use_cases: &ProductUseCases<R>) -> Self {
        Self::new(
            Arc::clone(&use_cases.get_products),
            Arc::clone(&use_cases.search_products),
        )
    }

    /// Returns the current screen state.
    #[must_use]
    pub fn state(&self) -> ListUiState {
        self.core.store.snapshot()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ListUiState> {
        self.core.store.subscribe()
    }

    /// Reloads the full product list.
    pub fn load_all(&self) {
        let ticket = self.core.sequence.issue(LOAD);
        debug!(seq = ticket.seq(), "load all products");
        self.core.store.update(|state| {
            state.is_loading = true;
            state.error = None;
        });

        let core = Arc::clone(&self.core);
        self.scope.spawn(async move {
            let result = core.get_products.execute().await;
            core.finish_load(ticket, result);
        });
    }

    /// Searches the catalog.
    ///
    /// A blank query reloads the full list instead, leaving the stored
    /// query untouched.
    pub fn search(&self, query: impl Into<String>) {
        let query = query.into();
        if is_blank(&query) {
            self.load_all();
            return;
        }

        let ticket = self.core.sequence.issue(SEARCH);
        debug!(seq = ticket.seq(), %query, "search products");
        self.core.store.update(|state| {
            state.search_query.clone_from(&query);
            state.is_searching = true;
            state.error = None;
        });

        let core = Arc::clone(&self.core);
        self.scope.spawn(async move {
            let result = core.search_products.execute(&query).await;
            core.finish_search(ticket, result);
        });
    }

    /// Clears the search query and reloads the full list.
    pub fn clear_search(&self) {
        self.core.store.update(|state| state.search_query.clear());
        self.load_all();
    }

    /// Waits for every in-flight action to finish.
    pub async fn wait_idle(&self) {
        self.scope.wait_idle().await;
    }
}

impl<R: ProductRepository> ListCore<R> {
    fn finish_load(&self, ticket: Ticket, result: ApplicationResult<ProductsResponse>) {
        self.store.update(|state| {
            if self.sequence.is_latest_of_kind(ticket) {
                state.is_loading = false;
            }
            if !self.sequence.is_latest(ticket) {
                debug!(seq = ticket.seq(), "discarding superseded product list");
                return;
            }
            match result {
                Ok(response) => {
                    state.products = response.products;
                    state.error = None;
                }
                Err(error) => state.error = Some(failure_message(&error, LOAD_ALL_FALLBACK)),
            }
        });
    }

    fn finish_search(&self, ticket: Ticket, result: ApplicationResult<ProductsResponse>) {
        self.store.update(|state| {
            if self.sequence.is_latest_of_kind(ticket) {
                state.is_searching = false;
            }
            if !self.sequence.is_latest(ticket) {
                debug!(seq = ticket.seq(), "discarding superseded search results");
                return;
            }
            match result {
                Ok(response) => {
                    state.products = response.products;
                    state.error = None;
                }
                Err(error) => state.error = Some(failure_message(&error, SEARCH_FALLBACK)),
            }
        });
    }
}
