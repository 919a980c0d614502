//! UI Bridge Module
//!
//! Defines the commands a front end sends and the controller that routes
//! them to the view-models.

use storefront_application::{ProductRepository, ProductUseCases};
use storefront_domain::ProductId;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::state::StateStore;
use crate::view_model::{ProductDetailViewModel, ProductListViewModel};

/// The screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The product list with search.
    #[default]
    ProductList,

    /// Details of one product.
    ProductDetail {
        /// Product being shown.
        product_id: ProductId,
    },
}

/// Commands sent from the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Reload the full product list.
    LoadAll,

    /// User submitted a search.
    Search(String),

    /// User cleared the search field.
    ClearSearch,

    /// User tapped a product.
    OpenProduct(ProductId),

    /// User navigated back.
    Back,

    /// User pressed the retry action of the current screen.
    Retry,
}

/// Routes [`UiCommand`]s to the view-models and tracks navigation.
pub struct AppController<R: ProductRepository + 'static> {
    list: ProductListViewModel<R>,
    detail: ProductDetailViewModel<R>,
    screen: StateStore<Screen>,
}

impl<R: ProductRepository + 'static> AppController<R> {
    /// Creates the controller on the list screen.
    ///
    /// The list view-model starts its initial load right away.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn new(use_cases: &ProductUseCases<R>) -> Self {
        Self {
            list: ProductListViewModel::from_use_cases(use_cases),
            detail: ProductDetailViewModel::from_use_cases(use_cases),
            screen: StateStore::default(),
        }
    }

    /// Returns the current screen.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen.snapshot()
    }

    /// Subscribes to navigation changes.
    #[must_use]
    pub fn subscribe_screen(&self) -> watch::Receiver<Screen> {
        self.screen.subscribe()
    }

    /// The list screen's view-model.
    #[must_use]
    pub const fn list(&self) -> &ProductListViewModel<R> {
        &self.list
    }

    /// The detail screen's view-model.
    #[must_use]
    pub const fn detail(&self) -> &ProductDetailViewModel<R> {
        &self.detail
    }

    /// Handles one command.
    pub fn dispatch(&self, command: UiCommand) {
        debug!(?command, "dispatch");
        match command {
            UiCommand::LoadAll => self.list.load_all(),
            UiCommand::Search(query) => self.list.search(query),
            UiCommand::ClearSearch => self.list.clear_search(),
            UiCommand::OpenProduct(product_id) => {
                info!(product_id, "open product");
                self.screen
                    .update(|screen| *screen = Screen::ProductDetail { product_id });
                self.detail.load_product(product_id);
            }
            UiCommand::Back => {
                self.screen.update(|screen| *screen = Screen::ProductList);
            }
            UiCommand::Retry => match self.screen() {
                Screen::ProductList => self.list.load_all(),
                Screen::ProductDetail { product_id } => self.detail.load_product(product_id),
            },
        }
    }

    /// Waits until both screens have no work in flight.
    pub async fn wait_idle(&self) {
        tokio::join!(self.list.wait_idle(), self.detail.wait_idle());
    }
}
