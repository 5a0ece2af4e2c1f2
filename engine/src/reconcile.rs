//! Reconciliation of a pending bulk plan against a loaded page.
//!
//! This runs whenever a page finishes loading and whenever a bulk request
//! is newly submitted against an already-loaded page.
//!
//! # Algorithm
//!
//! 1. Drain the plan entry whose page index matches the loaded page;
//!    no entry means nothing to do.
//! 2. Build the candidate list: the page's row ids in server order,
//!    excluding explicitly deselected ids and already-selected ids.
//! 3. Take the first `quota` candidates and union them into the selection.
//!    Fewer candidates than quota is accepted silently.

use crate::{BulkPlan, Page, PageIndex, RecordId, RowCount, SelectionState};
use serde::{Deserialize, Serialize};

/// What one reconciliation pass did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileOutcome {
    /// The page the drained entry targeted
    pub page: PageIndex,
    /// Rows the entry asked for
    pub quota: RowCount,
    /// Ids actually added to the selection, in page order
    pub selected: Vec<RecordId>,
}

/// Apply the plan entry for `page`, if one exists.
///
/// The matched entry is removed from the plan before candidates are chosen,
/// so a revisit of the same page is a no-op. An explicit deselection always
/// wins over the bulk request.
pub fn reconcile(
    page: &Page,
    plan: &mut BulkPlan,
    selection: &mut SelectionState,
) -> Option<ReconcileOutcome> {
    let quota = plan.take(page.index)?;

    let picked: Vec<RecordId> = page
        .row_ids()
        .filter(|&id| !selection.is_deselected(id))
        .filter(|&id| !selection.is_selected(id))
        .take(quota as usize)
        .collect();

    selection.extend(picked.iter().copied());

    Some(ReconcileOutcome {
        page: page.index,
        quota,
        selected: picked,
    })
}
