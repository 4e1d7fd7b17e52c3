//! Structural equality between document bodies, ignoring volatile fields.

use crate::doc;
use serde_json::Value;

/// True when `a` and `b` are structurally identical apart from `_id`/`_rev`.
///
/// Object key order does not matter (`serde_json::Value` map equality);
/// array order does. Used once, before migration starts, to short-circuit a
/// no-op update. Pure function.
pub fn same(a: &Value, b: &Value) -> bool {
    let mut a = a.clone();
    let mut b = b.clone();
    doc::strip_volatile(&mut a);
    doc::strip_volatile(&mut b);
    a == b
}
