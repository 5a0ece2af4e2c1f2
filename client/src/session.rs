//! The session - one grid, one loader, one logical task queue.
//!
//! A session owns a [`Controller`] and a [`PageLoader`] and serializes all
//! commands through `&mut self`, so state mutation happens on a single
//! logical queue and no locks are needed. Fetch effects returned by the
//! engine are executed here; their completions are fed straight back as
//! commands carrying the issuing generation, which is what lets the engine
//! discard stale responses.

use crate::PageLoader;
use datagrid_engine::{Command, Controller, Effect, GridView, PageIndex, RecordId, RowCount};

/// An interactive grid session.
#[derive(Debug)]
pub struct Session<L> {
    controller: Controller,
    loader: L,
}

impl<L: PageLoader> Session<L> {
    /// Create a session. No page is requested until [`start`](Self::start).
    pub fn new(loader: L, page_size: RowCount) -> Self {
        Self {
            controller: Controller::new(page_size),
            loader,
        }
    }

    /// Mount the grid: request page 1.
    pub async fn start(&mut self) {
        self.navigate(1).await;
    }

    /// Navigate to a page, fetching it if the engine asks for it.
    pub async fn navigate(&mut self, page: PageIndex) {
        let effect = self.controller.apply(Command::Navigate(page));
        self.run(effect).await;
    }

    /// Flip one row's selection.
    pub fn toggle_row(&mut self, id: RecordId) {
        self.controller.apply(Command::ToggleRow(id));
    }

    /// Header checkbox: select the whole current page or clear everything.
    pub fn select_all_current_page(&mut self, checked: bool) {
        self.controller.apply(Command::SelectAllCurrentPage(checked));
    }

    /// Select the first `count` rows of the dataset. Applies to the current
    /// page immediately; later pages drain as they are visited, without
    /// eager prefetching.
    pub fn submit_bulk(&mut self, count: i64) {
        tracing::info!(count, "bulk selection submitted");
        self.controller.apply(Command::SubmitBulk(count));
    }

    /// Snapshot for the render surface.
    pub fn view(&self) -> GridView<'_> {
        self.controller.view()
    }

    /// The underlying controller, for inspection.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    async fn run(&mut self, effect: Effect) {
        let Effect::Load { page, generation } = effect else {
            return;
        };

        let command = match self.loader.load(page).await {
            Ok(loaded) => {
                tracing::debug!(page, rows = loaded.len(), total = loaded.total, "page loaded");
                Command::PageLoaded {
                    generation,
                    page: loaded,
                }
            }
            Err(error) => {
                tracing::warn!(page, %error, "page load failed");
                Command::PageLoadFailed { generation, error }
            }
        };

        // Load completions never fan out into further fetches.
        let follow_up = self.controller.apply(command);
        debug_assert!(!follow_up.is_load());
    }
}
