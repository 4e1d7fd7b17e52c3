//! Design-document field helpers.
//!
//! Documents are schemaless [`serde_json::Value`] objects; these helpers
//! centralize the few fields the migration cares about: the stable `_id`,
//! the volatile `_rev`, and the `views` / `indexes` index declarations.

use serde_json::Value;

/// Document identifier field. Stable across a migration.
pub const ID_FIELD: &str = "_id";
/// Revision token field. Changes on every successful write and must be
/// refetched before any subsequent write to the same identifier.
pub const REV_FIELD: &str = "_rev";

/// The document's `_id`, if present and a string.
pub fn doc_id(doc: &Value) -> Option<&str> {
    doc.get(ID_FIELD).and_then(Value::as_str)
}

/// The document's `_rev`, if present and a string.
pub fn doc_rev(doc: &Value) -> Option<&str> {
    doc.get(REV_FIELD).and_then(Value::as_str)
}

/// Set the document identifier in place.
pub fn set_id(doc: &mut Value, id: &str) {
    if let Some(map) = doc.as_object_mut() {
        map.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
    }
}

/// Set the revision token in place.
pub fn set_rev(doc: &mut Value, rev: &str) {
    if let Some(map) = doc.as_object_mut() {
        map.insert(REV_FIELD.to_string(), Value::String(rev.to_string()));
    }
}

/// Drop the revision token, making the next write a fresh create.
pub fn remove_rev(doc: &mut Value) {
    if let Some(map) = doc.as_object_mut() {
        map.remove(REV_FIELD);
    }
}

/// Remove both volatile identity fields in place.
pub fn strip_volatile(doc: &mut Value) {
    if let Some(map) = doc.as_object_mut() {
        map.remove(ID_FIELD);
        map.remove(REV_FIELD);
    }
}

/// First named view, if the document declares any.
pub fn first_view(doc: &Value) -> Option<&str> {
    doc.get("views")
        .and_then(Value::as_object)
        .and_then(|views| views.keys().next())
        .map(String::as_str)
}

/// First named search index, if the document declares any.
pub fn first_search_index(doc: &Value) -> Option<&str> {
    doc.get("indexes")
        .and_then(Value::as_object)
        .and_then(|indexes| indexes.keys().next())
        .map(String::as_str)
}
