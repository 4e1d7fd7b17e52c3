//! Index-readiness polling.
//!
//! The store exposes no push notification for index builds, so readiness is
//! established by pulling: a minimal probe query against one representative
//! index succeeds once the build has caught up, and times out or errors
//! while the build is still running. Probe failures are the expected steady
//! state, never a migration failure. After each failed probe the active
//! task list is consulted to report approximate build progress.

use crate::doc;
use crate::error::{MigrateError, Result};
use crate::names;
use crate::progress::IndexProgress;
use crate::store::DocumentStore;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Configuration for index-readiness polling.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between probe attempts for view indexes.
    pub interval: Duration,
    /// Delay between probe attempts when only search indexes are declared.
    /// Search index tasks register in the active task list later than view
    /// builds, so the default is longer.
    pub search_interval: Duration,
    /// Optional wall-clock ceiling for the whole wait. `None` polls until
    /// readiness or cancellation; index builds are unbounded in duration
    /// and the operator is expected to watch progress.
    pub timeout: Option<Duration>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(3),
            search_interval: Duration::from_secs(10),
            timeout: None,
        }
    }
}

/// Which index the poller probes for readiness.
enum Probe<'a> {
    View(&'a str),
    Search(&'a str),
}

/// Wait until the indexes declared by `staged` (written at `staged_id`)
/// have finished building.
///
/// Readiness is a successful response from a minimal probe query against
/// the first declared view or, failing that, the first declared search
/// index. A document that declares neither is immediately ready — there is
/// nothing to build, and no probe is made.
///
/// `cancel` is checked between attempts; on cancellation or timeout the
/// staged documents are left in place for the caller to inspect.
/// `on_progress` is invoked with the aggregated task counters after every
/// failed probe.
pub async fn wait_for_indexes<S>(
    store: &S,
    staged_id: &str,
    staged: &Value,
    config: &PollConfig,
    cancel: &AtomicBool,
    mut on_progress: impl FnMut(&IndexProgress),
) -> Result<()>
where
    S: DocumentStore + ?Sized,
{
    let probe = match (doc::first_view(staged), doc::first_search_index(staged)) {
        (Some(view), _) => Probe::View(view),
        (None, Some(index)) => Probe::Search(index),
        (None, None) => {
            info!(staged = %staged_id, "no views or search indexes declared, nothing to build");
            return Ok(());
        }
    };

    let design = names::design_basename(staged_id);
    let interval = match probe {
        Probe::View(_) => config.interval,
        Probe::Search(_) => config.search_interval,
    };
    let started = Instant::now();

    loop {
        if cancel.load(Ordering::Relaxed) {
            return Err(MigrateError::Cancelled);
        }

        // The probe itself nudges the indexer along; give the build a head
        // start before the first ask, and space out the rest.
        tokio::time::sleep(interval).await;

        if cancel.load(Ordering::Relaxed) {
            return Err(MigrateError::Cancelled);
        }
        if let Some(ceiling) = config.timeout {
            if started.elapsed() >= ceiling {
                return Err(MigrateError::BuildTimeout {
                    elapsed: started.elapsed(),
                });
            }
        }

        let outcome = match probe {
            Probe::View(view) => store.query_view(design, view, 1).await.map(drop),
            Probe::Search(index) => store.query_search(design, index, "*:*").await.map(drop),
        };

        match outcome {
            Ok(()) => {
                info!(staged = %staged_id, "index is queryable");
                return Ok(());
            }
            Err(e) => {
                // Expected steady state during a long build: the probe times
                // out or errors until the index catches up.
                debug!(staged = %staged_id, error = %e, "index not ready yet");
                report_progress(store, staged_id, &mut on_progress).await;
            }
        }
    }
}

/// Best-effort progress introspection; a failed task listing only logs.
async fn report_progress<S>(
    store: &S,
    staged_id: &str,
    on_progress: &mut impl FnMut(&IndexProgress),
) where
    S: DocumentStore + ?Sized,
{
    match store.active_tasks().await {
        Ok(tasks) => {
            let progress = IndexProgress::aggregate(&tasks, store.database(), staged_id);
            match progress.percent() {
                Some(pct) => info!(staged = %staged_id, "indexing progress: {pct}%"),
                None => debug!(staged = %staged_id, "no matching index tasks reported yet"),
            }
            on_progress(&progress);
        }
        Err(e) => debug!(staged = %staged_id, error = %e, "active task introspection failed"),
    }
}
