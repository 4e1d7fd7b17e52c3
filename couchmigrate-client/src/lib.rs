//! CouchDB/Cloudant HTTP client for design-document migration.
//!
//! Implements the `couchmigrate-core` [`DocumentStore`] contract over the
//! database's REST API: document get/put/delete with optimistic-concurrency
//! revisions, view and search index probes, database existence checks, and
//! cluster-wide `_active_tasks` introspection.
//!
//! [`DocumentStore`]: couchmigrate_core::DocumentStore

pub mod client;
pub mod error;
mod store_impl;

pub use client::CouchClient;
pub use error::{ClientError, Result};
