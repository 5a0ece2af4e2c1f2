//! Datagrid Client - async glue around the selection engine.
//!
//! This crate supplies the two collaborators the engine deliberately does
//! not contain: a page loader that fetches pages over HTTP/JSON, and a
//! [`Session`] that owns the engine plus a loader and pumps commands
//! through them on one logical task. The engine stays pure; everything
//! that can suspend lives here.

pub mod config;
pub mod loader;
pub mod session;

pub use config::{Config, ConfigError};
pub use loader::{HttpPageLoader, PageLoader};
pub use session::Session;
