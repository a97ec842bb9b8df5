//! Model list polling
//!
//! Background task that re-reads the model list on a fixed interval and
//! publishes every result through a watch channel.

use crate::query::source::ModelSource;
use crate::types::query::QueryState;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Default delay between two automatic reads
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(1);

struct Inner {
    state: Arc<watch::Sender<QueryState>>,
    wake: Arc<Notify>,
    task: JoinHandle<()>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("Model list polling stopped");
    }
}

/// Handle to the polling task
///
/// Clones share the same task. The task is aborted when the last clone is
/// dropped.
#[derive(Clone)]
pub struct ModelQuery {
    inner: Arc<Inner>,
}

impl ModelQuery {
    /// Start polling `source`. The first read is issued immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(source: Arc<dyn ModelSource>, interval: Duration) -> Self {
        let interval = interval.max(MIN_REFRESH_INTERVAL);
        let state = Arc::new(watch::Sender::new(QueryState::default()));
        let wake = Arc::new(Notify::new());

        let task = tokio::spawn(poll_loop(source, state.clone(), wake.clone(), interval));
        tracing::info!("Polling local models every {}s", interval.as_secs());

        Self {
            inner: Arc::new(Inner {
                state,
                wake,
                task,
            }),
        }
    }

    /// Current state of the query
    pub fn snapshot(&self) -> QueryState {
        self.inner.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.inner.state.subscribe()
    }

    /// Ask for an immediate read.
    ///
    /// Marks the query as fetching right away. Does nothing while a read is
    /// already in flight, so repeated calls collapse into a single read.
    pub fn refetch(&self) {
        let requested = self.inner.state.send_if_modified(|state| {
            if state.is_fetching {
                return false;
            }
            state.is_fetching = true;
            true
        });

        if requested {
            self.inner.wake.notify_one();
        } else {
            tracing::debug!("Refetch skipped, a read is already in flight");
        }
    }
}

async fn poll_loop(
    source: Arc<dyn ModelSource>,
    tx: Arc<watch::Sender<QueryState>>,
    wake: Arc<Notify>,
    interval: Duration,
) {
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = wake.notified() => ticker.reset(),
        }
        read_once(source.as_ref(), &tx).await;
    }
}

async fn read_once(source: &dyn ModelSource, tx: &watch::Sender<QueryState>) {
    tx.send_modify(|state| state.is_fetching = true);

    match source.fetch().await {
        Ok(models) => {
            tracing::debug!("Fetched {} local models", models.len());
            tx.send_modify(|state| {
                state.data = models;
                state.is_loading = false;
                state.is_fetching = false;
                state.updated_at = Some(chrono::Utc::now());
                state.failure_count = 0;
            });
        }
        Err(e) => {
            // Keep the last list we managed to read
            tracing::warn!("Failed to fetch local models: {}", e);
            tx.send_modify(|state| {
                state.is_loading = false;
                state.is_fetching = false;
                state.failure_count = state.failure_count.saturating_add(1);
            });
        }
    }
}
