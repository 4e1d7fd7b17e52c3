//! Design-document migration core for CouchDB/Cloudant.
//!
//! Replaces a live design document with a new version without ever leaving
//! the database without a queryable index: the previous definition is copied
//! to a `_OLD` backup, the candidate is staged under `_NEW`, the staged
//! index build is polled until it is queryable, and only then is the staged
//! document promoted over the live identifier and the staging copies removed.
//!
//! # Architecture
//!
//! - [`store`]: the [`DocumentStore`] capability trait the migration consumes
//! - [`names`]: staging identifier derivation (`_OLD` / `_NEW`)
//! - [`doc`]: design-document field helpers
//! - [`compare`]: structural equality ignoring volatile identity fields
//! - [`staging`]: copy/write/delete document primitives
//! - [`progress`]: active-task progress aggregation
//! - [`poller`]: index-readiness polling
//! - [`migrate`]: the orchestrator pipeline
//! - [`error`]: error types
//!
//! The HTTP client lives in `couchmigrate-client`; this crate never talks to
//! the network directly, which keeps the whole protocol testable against an
//! in-memory store.

pub mod compare;
pub mod doc;
pub mod error;
pub mod migrate;
pub mod names;
pub mod poller;
pub mod progress;
pub mod staging;
pub mod store;

pub use error::{MigrateError, Result};
pub use migrate::{migrate, MigrateOptions, MigrationOutcome};
pub use poller::{wait_for_indexes, PollConfig};
pub use progress::IndexProgress;
pub use store::{DocumentStore, IndexTask, StoreError, TaskKind};
