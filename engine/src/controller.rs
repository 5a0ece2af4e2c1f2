//! The selection controller - the grid's state machine.
//!
//! The controller owns all selection state and reconciles deferred bulk
//! requests against pages as they load. It applies commands one at a time
//! and never performs IO: fetches are returned as effects for the driver
//! to execute, and their completions come back as commands. Because all
//! mutation happens through [`Controller::apply`] on one logical queue,
//! no locking is needed.

use crate::{
    reconcile, BulkPlan, Command, Effect, Generation, LoadError, Page, PageIndex, Record,
    RecordId, RowCount, SelectionState,
};
use serde::{Deserialize, Serialize};

/// Controller lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Mounted, nothing requested yet
    #[default]
    Idle,
    /// A page load is in flight
    Loading,
    /// A load completed (or failed) and the grid is interactive
    Ready,
}

/// The selection controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Controller {
    /// Rows per page, fixed for the controller's lifetime
    page_size: RowCount,
    phase: Phase,
    /// Generation of the most recently issued load. Completions carrying
    /// an older generation are stale and discarded.
    generation: Generation,
    /// Page index of the most recently issued load (0 = none yet)
    requested_page: PageIndex,
    /// The currently loaded page, if any
    current: Option<Page>,
    /// Last seen dataset total; refreshed from every loaded page
    total: RowCount,
    /// Error from the most recent failed load, cleared on navigation
    last_error: Option<LoadError>,
    selection: SelectionState,
    plan: BulkPlan,
}

/// Read-only snapshot handed to the render surface.
#[derive(Debug, Clone, PartialEq)]
pub struct GridView<'a> {
    /// Rows of the current page, in server order
    pub rows: &'a [Record],
    /// 1-based index of the current (or in-flight) page; 0 before mount
    pub page: PageIndex,
    /// Dataset total row count
    pub total: RowCount,
    /// A load is in flight
    pub loading: bool,
    /// The most recent load failed
    pub load_failed: bool,
    /// Header checkbox: checked iff the current page is non-empty and
    /// every row on it is selected
    pub header_checkbox: bool,
}

impl Controller {
    /// Create a controller in the idle phase.
    pub fn new(page_size: RowCount) -> Self {
        Self {
            page_size,
            phase: Phase::Idle,
            generation: 0,
            requested_page: 0,
            current: None,
            total: 0,
            last_error: None,
            selection: SelectionState::new(),
            plan: BulkPlan::new(),
        }
    }

    /// Apply one command and return the effect the driver must perform.
    ///
    /// Total over all inputs: invalid pages and counts are ignored or
    /// clamped, stale completions are discarded, and nothing here fails.
    pub fn apply(&mut self, command: Command) -> Effect {
        match command {
            Command::Navigate(page) => self.navigate(page),
            Command::ToggleRow(id) => {
                self.selection.toggle(id);
                Effect::None
            }
            Command::SelectAllCurrentPage(checked) => {
                self.select_all_current_page(checked);
                Effect::None
            }
            Command::SubmitBulk(count) => {
                self.submit_bulk(count);
                Effect::None
            }
            Command::PageLoaded { generation, page } => {
                self.page_loaded(generation, page);
                Effect::None
            }
            Command::PageLoadFailed { generation, error } => {
                self.page_load_failed(generation, error);
                Effect::None
            }
        }
    }

    fn navigate(&mut self, page: PageIndex) -> Effect {
        // Page indices are 1-based; 0 is not a page.
        if page == 0 {
            return Effect::None;
        }
        // Ignore re-entry for the index already in flight.
        if self.phase == Phase::Loading && self.requested_page == page {
            return Effect::None;
        }

        self.phase = Phase::Loading;
        self.requested_page = page;
        self.last_error = None;
        self.generation += 1;
        Effect::Load {
            page,
            generation: self.generation,
        }
    }

    fn page_loaded(&mut self, generation: Generation, page: Page) {
        if generation != self.generation {
            // A newer load was issued after this one; last requested wins.
            return;
        }
        self.phase = Phase::Ready;
        self.total = page.total;
        self.last_error = None;
        self.current = Some(page);
        self.reconcile_current();
    }

    fn page_load_failed(&mut self, generation: Generation, error: LoadError) {
        if generation != self.generation {
            return;
        }
        // Degrade to an empty page; selection and the pending plan are left
        // untouched so a manual revisit can still apply the plan entry.
        self.phase = Phase::Ready;
        self.last_error = Some(error);
        self.current = Some(Page::empty(self.requested_page, self.total));
    }

    fn select_all_current_page(&mut self, checked: bool) {
        if checked {
            // Replaces, not unions: selections made on other pages are
            // dropped. Observed behavior of the header checkbox.
            let ids: Vec<RecordId> = self
                .current
                .as_ref()
                .map(|p| p.row_ids().collect())
                .unwrap_or_default();
            self.selection.replace_with(ids);
        } else {
            self.selection.clear_selected();
        }
    }

    fn submit_bulk(&mut self, count: i64) {
        let clamped = (count.max(0) as RowCount).min(self.total);
        if clamped == 0 {
            return;
        }
        // Newest submission supersedes any unfinished plan.
        let start = self.requested_page.max(1);
        self.plan = BulkPlan::partition(clamped, start, self.page_size);
        self.reconcile_current();
    }

    /// Apply the plan entry for the current page, if the page is loaded.
    fn reconcile_current(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }
        // After a failed load the current page is a degraded empty one;
        // draining a quota against it would select nothing. Leave the entry
        // pending so a retry can still apply it.
        if self.last_error.is_some() {
            return;
        }
        if let Some(page) = self.current.as_ref() {
            reconcile(page, &mut self.plan, &mut self.selection);
        }
    }

    /// Check whether a row is selected.
    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selection.is_selected(id)
    }

    /// Snapshot for the render surface.
    pub fn view(&self) -> GridView<'_> {
        let rows: &[Record] = self
            .current
            .as_ref()
            .map(|p| p.rows.as_slice())
            .unwrap_or_default();
        let header_checkbox = self
            .current
            .as_ref()
            .is_some_and(|p| !p.is_empty() && p.row_ids().all(|id| self.selection.is_selected(id)));

        GridView {
            rows,
            page: self
                .current
                .as_ref()
                .map(|p| p.index)
                .unwrap_or(self.requested_page),
            total: self.total,
            loading: self.phase == Phase::Loading,
            load_failed: self.last_error.is_some(),
            header_checkbox,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rows per page.
    pub fn page_size(&self) -> RowCount {
        self.page_size
    }

    /// Last seen dataset total.
    pub fn total(&self) -> RowCount {
        self.total
    }

    /// The currently loaded page, if any.
    pub fn current_page(&self) -> Option<&Page> {
        self.current.as_ref()
    }

    /// The selection sets.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The undrained remainder of the latest bulk submission.
    pub fn pending_plan(&self) -> &BulkPlan {
        &self.plan
    }

    /// Error from the most recent failed load, if any.
    pub fn last_error(&self) -> Option<&LoadError> {
        self.last_error.as_ref()
    }
}
