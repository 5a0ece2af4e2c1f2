//! Error types for the page-loader boundary.
//!
//! The engine itself never fails: every public operation is total over
//! valid inputs, and invalid inputs clamp to no-ops. [`LoadError`] exists
//! because a failed page load crosses the loader boundary as data, inside
//! [`Command::PageLoadFailed`](crate::Command::PageLoadFailed), and is
//! surfaced to the render layer as a flag plus the recorded error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A page load failure reported by the page loader.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "lowercase")]
pub enum LoadError {
    /// The transport failed before a response arrived.
    #[error("transport failure: {0}")]
    Transport(String),

    /// A response arrived but its body could not be decoded.
    #[error("malformed page payload: {0}")]
    Decode(String),

    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Status(u16),
}
