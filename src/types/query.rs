//! Query state types
//!
//! Snapshot of the model list query published to the UI.

use crate::types::model::ModelDescriptor;
use chrono::{DateTime, Utc};

/// Latest result of the model list query
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    /// Last successfully fetched list, empty until the first success
    pub data: Vec<ModelDescriptor>,
    /// True until the first read settles
    pub is_loading: bool,
    /// True while any read is in flight
    pub is_fetching: bool,
    /// Time of the last successful read
    pub updated_at: Option<DateTime<Utc>>,
    /// Consecutive failed reads
    pub failure_count: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            is_loading: true,
            is_fetching: false,
            updated_at: None,
            failure_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_loading() {
        let state = QueryState::default();
        assert!(state.is_loading);
        assert!(!state.is_fetching);
        assert!(state.data.is_empty());
        assert!(state.updated_at.is_none());
        assert_eq!(state.failure_count, 0);
    }
}
