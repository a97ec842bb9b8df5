//! Model list query
//!
//! Reads the local model list from the backend and keeps it fresh.

pub mod poller;
pub mod source;

pub use poller::{ModelQuery, DEFAULT_REFRESH_INTERVAL};
pub use source::{FetchError, HttpModelSource, ModelSource};
