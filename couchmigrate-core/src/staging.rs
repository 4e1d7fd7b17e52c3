//! Document copy/write/delete primitives with staging semantics.
//!
//! All three primitives treat "document not found" as a normal condition:
//! the `_OLD`/`_NEW` staging copies legitimately may not exist on a first
//! run, and cleanup of an absent document is already done. Write conflicts
//! and transport failures always propagate.

use crate::doc;
use crate::error::Result;
use crate::store::DocumentStore;
use serde_json::Value;
use tracing::debug;

/// Copy the document at `from` onto `to`, overwriting `to` if present.
///
/// The destination keeps its own revision token, fetched fresh to satisfy
/// optimistic concurrency; when the destination is absent the write is a
/// fresh create. A missing source is a no-op, not an error.
pub async fn copy_doc<S>(store: &S, from: &str, to: &str) -> Result<()>
where
    S: DocumentStore + ?Sized,
{
    let Some(mut source) = store.get(from).await? else {
        debug!(from = %from, to = %to, "copy source missing, nothing to copy");
        return Ok(());
    };
    let dest = store.get(to).await?;

    doc::set_id(&mut source, to);
    match dest.as_ref().and_then(doc::doc_rev) {
        Some(rev) => doc::set_rev(&mut source, rev),
        None => doc::remove_rev(&mut source),
    }

    let rev = store.put(&source).await?;
    debug!(from = %from, to = %to, rev = %rev, "copied document");
    Ok(())
}

/// Write `body` at `id`, reusing the current revision when the document
/// already exists so that repeated writes against the same identifier never
/// conflict.
pub async fn write_doc<S>(store: &S, body: &Value, id: &str) -> Result<()>
where
    S: DocumentStore + ?Sized,
{
    let existing = store.get(id).await?;

    let mut doc = body.clone();
    doc::set_id(&mut doc, id);
    match existing.as_ref().and_then(doc::doc_rev) {
        Some(rev) => doc::set_rev(&mut doc, rev),
        None => doc::remove_rev(&mut doc),
    }

    let rev = store.put(&doc).await?;
    debug!(id = %id, rev = %rev, "wrote document");
    Ok(())
}

/// Delete the document at `id` if it exists. Absence, including a racing
/// delete between the fetch and the delete, is success.
pub async fn delete_doc<S>(store: &S, id: &str) -> Result<()>
where
    S: DocumentStore + ?Sized,
{
    let Some(existing) = store.get(id).await? else {
        debug!(id = %id, "nothing to delete");
        return Ok(());
    };
    let Some(rev) = doc::doc_rev(&existing) else {
        debug!(id = %id, "document has no revision, skipping delete");
        return Ok(());
    };

    match store.delete(id, rev).await {
        Ok(()) => {
            debug!(id = %id, rev = %rev, "deleted document");
            Ok(())
        }
        Err(e) if e.is_not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}
