//! Record and page types.
//!
//! A record is an opaque row: a unique integer id plus display fields the
//! engine never inspects. A page is one fetched batch of rows together with
//! the dataset's total row count.

use crate::{PageIndex, RecordId, RowCount};
use serde::{Deserialize, Serialize};

/// A single row of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique identifier for this row
    pub id: RecordId,
    /// Display fields (title, artist, dates, ...) - opaque to the engine
    #[serde(default)]
    pub fields: serde_json::Value,
}

impl Record {
    /// Create a new record.
    pub fn new(id: RecordId, fields: serde_json::Value) -> Self {
        Self { id, fields }
    }

    /// Create a record with no display fields. Handy in tests.
    pub fn bare(id: RecordId) -> Self {
        Self {
            id,
            fields: serde_json::Value::Null,
        }
    }
}

/// One fetched batch of rows plus the dataset's total row count.
///
/// Rows keep the server-returned order; reconciliation and rendering both
/// depend on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// 1-based page index
    pub index: PageIndex,
    /// Rows in server-returned order
    pub rows: Vec<Record>,
    /// Total row count of the whole dataset
    pub total: RowCount,
}

impl Page {
    /// Create a new page.
    pub fn new(index: PageIndex, rows: Vec<Record>, total: RowCount) -> Self {
        Self { index, rows, total }
    }

    /// Create a page with no rows, used when a load fails.
    pub fn empty(index: PageIndex, total: RowCount) -> Self {
        Self {
            index,
            rows: Vec::new(),
            total,
        }
    }

    /// Number of rows on this page.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row ids in page order.
    pub fn row_ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.rows.iter().map(|r| r.id)
    }

    /// Check whether a row with the given id is on this page.
    pub fn contains(&self, id: RecordId) -> bool {
        self.rows.iter().any(|r| r.id == id)
    }
}
