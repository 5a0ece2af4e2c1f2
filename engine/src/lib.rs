//! # Datagrid Engine
//!
//! A deterministic selection engine for paginated data grids.
//!
//! This crate provides the core logic for tracking row selection across a
//! paginated, asynchronously loaded dataset where only one page of rows is
//! resident in memory at a time. It reconciles row-level toggles, a
//! "select all on current page" action, and a deferred "select the first N
//! rows total" bulk request as pages arrive.
//!
//! ## Design Principles
//!
//! - **No IO**: The engine has no knowledge of HTTP, tasks, or rendering
//! - **Deterministic**: The same command sequence always produces the same state
//! - **Testable**: Pure logic, no mocks needed
//! - **Total**: Public operations never fail; invalid inputs clamp to no-ops
//!
//! ## Core Concepts
//!
//! ### Commands and Effects
//!
//! All mutation goes through [`Controller::apply`] with a [`Command`]:
//! - [`Command::Navigate`] - Request a page
//! - [`Command::ToggleRow`] - Flip one row's selection
//! - [`Command::SelectAllCurrentPage`] - Header checkbox
//! - [`Command::SubmitBulk`] - Select the first N rows of the dataset
//! - [`Command::PageLoaded`] / [`Command::PageLoadFailed`] - Load completion
//!
//! `apply` returns an [`Effect`] describing the fetch the caller must
//! perform, if any. The engine never fetches; the driver owns the single
//! suspension point and feeds the result back as a command.
//!
//! ### Selection sets
//!
//! [`SelectionState`] holds the ids the user selected and the ids the user
//! explicitly deselected. An explicit deselection always wins over a pending
//! bulk request. The two sets are disjoint at all times.
//!
//! ### Bulk plans
//!
//! A bulk submission is partitioned into per-page quotas ([`BulkPlan`]) and
//! drained one entry at a time as the targeted pages become current. Entries
//! are consumed exactly once.
//!
//! ### Staleness
//!
//! Every issued load carries a monotonically increasing generation. A
//! completion for a superseded generation is silently discarded, giving
//! last-requested-page-wins semantics without cancellation.
//!
//! ## Quick Start
//!
//! ```rust
//! use datagrid_engine::{Command, Controller, Effect, Page, Record};
//! use serde_json::json;
//!
//! let mut grid = Controller::new(12);
//!
//! // Mount: request page 1. The engine hands back a fetch effect.
//! let effect = grid.apply(Command::Navigate(1));
//! let Effect::Load { page, generation } = effect else { panic!() };
//!
//! // The driver performs the fetch and feeds the page back.
//! let rows = (1..=12).map(|id| Record::new(id, json!({}))).collect();
//! grid.apply(Command::PageLoaded {
//!     generation,
//!     page: Page::new(page, rows, 50),
//! });
//!
//! grid.apply(Command::ToggleRow(3));
//! assert!(grid.is_selected(3));
//!
//! // Select the first 25 rows of the whole dataset. Page 1's quota of 12
//! // applies immediately; pages 2 and 3 drain as they are visited.
//! grid.apply(Command::SubmitBulk(25));
//! assert_eq!(grid.selection().selected_len(), 12);
//! ```

pub mod command;
pub mod controller;
pub mod error;
pub mod plan;
pub mod reconcile;
pub mod record;
pub mod selection;

// Re-export main types at crate root
pub use command::{Command, Effect};
pub use controller::{Controller, GridView, Phase};
pub use error::LoadError;
pub use plan::{BulkEntry, BulkPlan};
pub use reconcile::{reconcile, ReconcileOutcome};
pub use record::{Page, Record};
pub use selection::SelectionState;

/// Type aliases for clarity
pub type RecordId = u64;
pub type PageIndex = u64;
pub type RowCount = u64;
pub type Generation = u64;

/// Page size of the reference deployment.
pub const DEFAULT_PAGE_SIZE: RowCount = 12;
