//! The migration orchestrator.
//!
//! Composes the comparator, staging primitives, and index-readiness poller
//! into one strictly sequential pipeline: existence check, no-op detection,
//! backup, stage, readiness wait, promote, cleanup. There is no automatic
//! rollback — when promotion fails after staging succeeded, the `_OLD`
//! backup remains available for manual recovery.

use crate::compare;
use crate::doc;
use crate::error::{MigrateError, Result};
use crate::names;
use crate::poller::{self, PollConfig};
use crate::progress::IndexProgress;
use crate::staging;
use crate::store::DocumentStore;
use serde_json::Value;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

/// Terminal outcome of a migration that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The candidate design document was staged, built, and is now live;
    /// the staging copies were removed.
    Completed,
    /// The candidate is structurally identical to the live document;
    /// nothing was written.
    NoOpSkipped,
}

/// Options for a migration run.
#[derive(Debug, Clone)]
pub struct MigrateOptions {
    /// Poller configuration: probe intervals and optional timeout ceiling.
    pub poll: PollConfig,
    /// Cooperative cancellation flag, checked between poll attempts.
    pub cancel: Arc<AtomicBool>,
}

impl Default for MigrateOptions {
    fn default() -> Self {
        Self {
            poll: PollConfig::default(),
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }
}

/// Replace the live design document with `candidate`.
///
/// Steps, strictly ordered, each blocking the next:
///
/// 1. confirm the database exists (fatal if not — the one failure that is
///    never swallowed)
/// 2. fetch the live document and short-circuit with
///    [`MigrationOutcome::NoOpSkipped`] when the candidate is structurally
///    identical
/// 3. back up the live document to `<id>_OLD` (no-op when absent)
/// 4. stage the candidate at `<id>_NEW`, reusing any pre-existing revision
/// 5. wait for the staged index build to become queryable
/// 6. promote `<id>_NEW` onto `<id>`
/// 7. delete both staging copies
///
/// Steps 3–7 swallow "document not found" as a normal condition; write
/// conflicts and transport failures abort the remaining sequence, leaving
/// partial state (the `_OLD` backup, the staged `_NEW`) for operator
/// recovery.
pub async fn migrate<S>(
    store: &S,
    mut candidate: Value,
    options: &MigrateOptions,
    on_progress: impl FnMut(&IndexProgress),
) -> Result<MigrationOutcome>
where
    S: DocumentStore + ?Sized,
{
    // A stale revision in the input must not leak into staging writes;
    // write_doc refetches the current revision itself.
    doc::remove_rev(&mut candidate);

    let name = doc::doc_id(&candidate)
        .ok_or(MigrateError::MissingId)?
        .to_string();
    let stage = names::staging_names(&name);
    let db = store.database().to_string();

    info!(db = %db, name = %name, "checking database exists");
    if !store.database_exists().await? {
        return Err(MigrateError::DatabaseNotFound(db));
    }

    info!(name = %name, "comparing candidate against live document");
    if let Some(live) = store.get(&name).await? {
        if compare::same(&live, &candidate) {
            info!(name = %name, "design document is unchanged, skipping migration");
            return Ok(MigrationOutcome::NoOpSkipped);
        }
    }

    info!(from = %name, to = %stage.old, "backing up live document");
    staging::copy_doc(store, &name, &stage.old).await?;

    info!(to = %stage.new, "staging candidate");
    staging::write_doc(store, &candidate, &stage.new).await?;

    info!(staged = %stage.new, "waiting for staged index build");
    poller::wait_for_indexes(
        store,
        &stage.new,
        &candidate,
        &options.poll,
        &options.cancel,
        on_progress,
    )
    .await?;

    info!(from = %stage.new, to = %name, "promoting staged document");
    staging::copy_doc(store, &stage.new, &name).await?;

    info!(name = %name, "cleaning up staging documents");
    staging::delete_doc(store, &stage.old).await?;
    staging::delete_doc(store, &stage.new).await?;

    info!(name = %name, "migration complete");
    Ok(MigrationOutcome::Completed)
}
