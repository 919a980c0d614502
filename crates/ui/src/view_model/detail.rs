//! Product detail view-model.

use std::sync::Arc;

use storefront_application::{ApplicationResult, GetProductById, ProductRepository, ProductUseCases};
use storefront_domain::{DetailUiState, Product, ProductId};
use tokio::sync::watch;
use tracing::debug;

use super::failure_message;
use super::scope::{RequestSequence, TaskScope, Ticket};
use crate::state::StateStore;

/// Error shown when a product load fails without a message.
pub const LOAD_PRODUCT_FALLBACK: &str = "Failed to load product";

const LOAD: usize = 0;

struct DetailCore<R: ProductRepository> {
    get_product_by_id: Arc<GetProductById<R>>,
    store: StateStore<DetailUiState>,
    sequence: RequestSequence<1>,
}

/// Drives the product detail screen.
///
/// Nothing is loaded until [`load_product`](Self::load_product) is called.
/// Only the most recent load may write its outcome.
pub struct ProductDetailViewModel<R: ProductRepository + 'static> {
    core: Arc<DetailCore<R>>,
    scope: TaskScope,
}

impl<R: ProductRepository + 'static> ProductDetailViewModel<R> {
    /// Creates an idle view-model.
    #[must_use]
    pub fn new(get_product_by_id: Arc<GetProductById<R>>) -> Self {
        Self {
            core: Arc::new(DetailCore {
                get_product_by_id,
                store: StateStore::default(),
                sequence: RequestSequence::default(),
            }),
            scope: TaskScope::default(),
        }
    }

    /// Creates the view-model from the shared use case bundle.
    #[must_use]
    pub fn from_use_cases(use_cases: &ProductUseCases<R>) -> Self {
        Self::new(Arc::clone(&use_cases.get_product_by_id))
    }

    /// Returns the current screen state.
    #[must_use]
    pub fn state(&self) -> DetailUiState {
        self.core.store.snapshot()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DetailUiState> {
        self.core.store.subscribe()
    }

    /// Loads the product with `id`.
    ///
    /// A previously shown product stays in the state while loading and
    /// after a failure; the error takes precedence when rendering.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn load_product(&self, id: ProductId) {
        let ticket = self.core.sequence.issue(LOAD);
        debug!(seq = ticket.seq(), id, "load product");
        self.core.store.update(|state| {
            state.is_loading = true;
            state.error = None;
        });

        let core = Arc::clone(&self.core);
        self.scope.spawn(async move {
            let result = core.get_product_by_id.execute(id).await;
            core.finish(ticket, result);
        });
    }

    /// Waits for every in-flight load to finish.
    pub async fn wait_idle(&self) {
        self.scope.wait_idle().await;
    }
}

impl<R: ProductRepository> DetailCore<R> {
    fn finish(&self, ticket: Ticket, result: ApplicationResult<Product>) {
        if !self.sequence.is_latest(ticket) {
            debug!(seq = ticket.seq(), "discarding superseded product");
            return;
        }
        self.store.update(|state| {
            state.is_loading = false;
            match result {
                Ok(product) => {
                    state.product = Some(product);
                    state.error = None;
                }
                Err(error) => state.error = Some(failure_message(&error, LOAD_PRODUCT_FALLBACK)),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{GatedRepository, catalog, use_cases};
    use pretty_assertions::assert_eq;
    use storefront_domain::DetailView;
    use storefront_infrastructure::InMemoryProductRepository;

    fn view_model(
        repository: &Arc<InMemoryProductRepository>,
    ) -> ProductDetailViewModel<InMemoryProductRepository> {
        ProductDetailViewModel::from_use_cases(&ProductUseCases::new(Arc::clone(repository)))
    }

    #[tokio::test]
    async fn test_starts_idle() {
        let repository = Arc::new(catalog());
        let vm = view_model(&repository);

        assert_eq!(vm.state(), DetailUiState::default());
        assert_eq!(vm.state().view(), DetailView::Idle);
        assert_eq!(repository.calls(), 0);
    }

    #[tokio::test]
    async fn test_load_product_success() {
        let repository = Arc::new(catalog());
        let vm = view_model(&repository);

        vm.load_product(1);
        assert!(vm.state().is_loading);
        vm.wait_idle().await;

        let state = vm.state();
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        let product = state.product.as_ref().map(|p| (p.id, p.title.as_str()));
        assert_eq!(product, Some((1, "Test Product")));
    }

    #[tokio::test]
    async fn test_missing_product_reports_not_found() {
        let repository = Arc::new(catalog());
        let vm = view_model(&repository);

        vm.load_product(999);
        vm.wait_idle().await;

        let state = vm.state();
        assert!(!state.is_loading);
        assert!(state.product.is_none());
        assert_eq!(state.error.as_deref(), Some("Product with id 999 not found"));
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_product_but_shows_error() {
        let repository = Arc::new(catalog());
        let vm = view_model(&repository);
        vm.load_product(1);
        vm.wait_idle().await;

        repository.fail_with("");
        vm.load_product(2);
        vm.wait_idle().await;

        let state = vm.state();
        assert_eq!(state.error.as_deref(), Some(LOAD_PRODUCT_FALLBACK));
        assert_eq!(state.product.as_ref().map(|p| p.id), Some(1));
        assert_eq!(state.view(), DetailView::Error(LOAD_PRODUCT_FALLBACK));
    }

    #[tokio::test]
    async fn test_stale_load_is_discarded() {
        let (repository, gate) = GatedRepository::new(catalog(), "1");
        let vm = ProductDetailViewModel::from_use_cases(&use_cases(repository));

        vm.load_product(1);
        vm.load_product(2);
        let mut rx = vm.subscribe();
        rx.wait_for(|s| !s.is_loading).await.expect("view-model alive");

        gate.notify_one();
        vm.wait_idle().await;

        let state = vm.state();
        assert_eq!(state.product.as_ref().map(|p| p.id), Some(2));
        assert!(!state.is_loading);
    }
}
