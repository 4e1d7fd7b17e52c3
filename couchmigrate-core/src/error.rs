//! Error types for design-document migration

use crate::store::StoreError;
use std::time::Duration;
use thiserror::Error;

/// Errors from a migration run.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Target database does not exist. Checked before any mutation.
    #[error("database '{0}' not found")]
    DatabaseNotFound(String),

    /// Candidate design document has no `_id` field.
    #[error("design document has no _id field")]
    MissingId,

    /// Write conflict or transport failure from the document store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Index build did not complete within the configured ceiling.
    /// The `_OLD` and `_NEW` staging documents are left in place for
    /// manual inspection.
    #[error("index build did not complete within {elapsed:?}")]
    BuildTimeout {
        /// Wall-clock time spent waiting before giving up.
        elapsed: Duration,
    },

    /// Migration cancelled between poll attempts. The `_OLD` and `_NEW`
    /// staging documents are left in place.
    #[error("migration cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, MigrateError>;
