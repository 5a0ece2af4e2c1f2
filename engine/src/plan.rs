//! Bulk selection plans.
//!
//! A "select the first N rows" request may span pages that are not loaded
//! yet. The request is partitioned up front into per-page quotas; each entry
//! waits until its page becomes current and is then drained exactly once.

use crate::{PageIndex, RowCount};
use serde::{Deserialize, Serialize};

/// One page's share of a bulk selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkEntry {
    /// 1-based page index this entry targets
    pub page: PageIndex,
    /// Number of rows to select on that page
    pub rows: RowCount,
}

/// A pending bulk selection request, partitioned across consecutive pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkPlan {
    entries: Vec<BulkEntry>,
}

impl BulkPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Partition `count` rows into consecutive page-sized chunks starting at
    /// `start_page`.
    ///
    /// The sum of all entry quotas equals `count`. `count` must already be
    /// clamped to the dataset total by the caller. A zero `count` or a zero
    /// `page_size` yields an empty plan.
    pub fn partition(count: RowCount, start_page: PageIndex, page_size: RowCount) -> Self {
        let mut entries = Vec::new();
        if page_size == 0 {
            return Self { entries };
        }

        let mut remaining = count;
        let mut page = start_page;
        while remaining > 0 {
            let rows = remaining.min(page_size);
            entries.push(BulkEntry { page, rows });
            remaining -= rows;
            page += 1;
        }
        Self { entries }
    }

    /// Remove and return the quota for the given page, if planned.
    ///
    /// Removal makes draining one-shot: a second call for the same page
    /// returns `None`.
    pub fn take(&mut self, page: PageIndex) -> Option<RowCount> {
        let pos = self.entries.iter().position(|e| e.page == page)?;
        Some(self.entries.remove(pos).rows)
    }

    /// Quota planned for the given page, without draining it.
    pub fn quota(&self, page: PageIndex) -> Option<RowCount> {
        self.entries.iter().find(|e| e.page == page).map(|e| e.rows)
    }

    /// Check whether any entries remain.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total rows still planned across all remaining entries.
    pub fn remaining(&self) -> RowCount {
        self.entries.iter().map(|e| e.rows).sum()
    }

    /// Remaining entries, in page order.
    pub fn entries(&self) -> &[BulkEntry] {
        &self.entries
    }
}
