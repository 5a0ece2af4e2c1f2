//! Selection sets accumulated across pages.
//!
//! Two sets are tracked: ids the user selected and ids the user explicitly
//! deselected. The deselected set exists only so an explicit deselection can
//! override a pending bulk request that would otherwise re-select the row.
//! Every mutator maintains the invariant that the two sets are disjoint.

use crate::RecordId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Row selection state, persisted across page navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    /// Ids explicitly selected, across all pages
    selected: HashSet<RecordId>,
    /// Ids explicitly deselected by direct user action
    deselected: HashSet<RecordId>,
}

impl SelectionState {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether an id is selected.
    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selected.contains(&id)
    }

    /// Check whether an id was explicitly deselected.
    pub fn is_deselected(&self, id: RecordId) -> bool {
        self.deselected.contains(&id)
    }

    /// Flip one row's selection.
    ///
    /// A selected row moves to the deselected set; any other row moves to
    /// the selected set. Calling twice restores the prior state.
    pub fn toggle(&mut self, id: RecordId) {
        if self.selected.remove(&id) {
            self.deselected.insert(id);
        } else {
            self.deselected.remove(&id);
            self.selected.insert(id);
        }
    }

    /// Add ids to the selected set, clearing any matching deselections.
    pub fn extend(&mut self, ids: impl IntoIterator<Item = RecordId>) {
        for id in ids {
            self.deselected.remove(&id);
            self.selected.insert(id);
        }
    }

    /// Replace the entire selected set with the given ids.
    ///
    /// This is the header-checkbox "select all" action. It is page-scoped
    /// by the caller and *replaces* rather than unions: selections made on
    /// other pages are dropped. Matching deselections are cleared so the
    /// sets stay disjoint.
    pub fn replace_with(&mut self, ids: impl IntoIterator<Item = RecordId>) {
        self.selected.clear();
        self.extend(ids);
    }

    /// Clear the selected set entirely. Deselections are left in place.
    pub fn clear_selected(&mut self) {
        self.selected.clear();
    }

    /// Number of selected ids.
    pub fn selected_len(&self) -> usize {
        self.selected.len()
    }

    /// Number of explicitly deselected ids.
    pub fn deselected_len(&self) -> usize {
        self.deselected.len()
    }

    /// Iterate over selected ids (unordered).
    pub fn selected_ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.selected.iter().copied()
    }
}
