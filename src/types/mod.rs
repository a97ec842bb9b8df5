//! Shared type definitions
//!
//! Data types used across the query service and the UI.

pub mod model;
pub mod query;
