//! Commands and effects for the controller.
//!
//! User interactions and load completions are expressed as discrete
//! commands applied to the controller, never as direct mutations. The
//! controller answers with an effect describing the fetch the driver must
//! perform, keeping the engine free of IO.

use crate::{Generation, LoadError, Page, PageIndex, RecordId};
use serde::{Deserialize, Serialize};

/// A discrete event applied to the [`Controller`](crate::Controller).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Command {
    /// Request the given 1-based page.
    Navigate(PageIndex),
    /// Flip one row's selection.
    ToggleRow(RecordId),
    /// Header checkbox: select every row on the current page, or clear
    /// the selection entirely.
    SelectAllCurrentPage(bool),
    /// Select the first N rows of the whole dataset. Signed so that
    /// out-of-range input from the UI clamps instead of failing.
    SubmitBulk(i64),
    /// A page load finished. `generation` is the value issued with the
    /// matching [`Effect::Load`]; stale completions are discarded.
    #[serde(rename_all = "camelCase")]
    PageLoaded { generation: Generation, page: Page },
    /// A page load failed.
    #[serde(rename_all = "camelCase")]
    PageLoadFailed {
        generation: Generation,
        error: LoadError,
    },
}

/// What the driver must do after applying a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    /// Nothing to do.
    None,
    /// Fetch the given page and feed the result back as
    /// [`Command::PageLoaded`] or [`Command::PageLoadFailed`], tagged with
    /// this generation.
    #[serde(rename_all = "camelCase")]
    Load {
        page: PageIndex,
        generation: Generation,
    },
}

impl Effect {
    /// Check whether this effect requires a fetch.
    pub fn is_load(&self) -> bool {
        matches!(self, Effect::Load { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effect_is_load() {
        assert!(Effect::Load {
            page: 1,
            generation: 1
        }
        .is_load());
        assert!(!Effect::None.is_load());
    }

    #[test]
    fn serialization_navigate() {
        let cmd = Command::Navigate(3);
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"navigate\""));

        let parsed: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, parsed);
    }

    #[test]
    fn serialization_page_loaded() {
        let cmd = Command::PageLoaded {
            generation: 2,
            page: Page::empty(1, 50),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"pageLoaded\""));

        let parsed: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, parsed);
    }

    #[test]
    fn serialization_load_failed() {
        let cmd = Command::PageLoadFailed {
            generation: 4,
            error: LoadError::Status(500),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let parsed: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, parsed);
    }
}
