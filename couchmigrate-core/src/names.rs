//! Staging identifier derivation.
//!
//! Staging copies live beside the target document in the same database,
//! under fixed suffixes. Known limitation: a production design document
//! whose real identifier already ends in `_OLD` or `_NEW` collides with the
//! staging namespace; no avoidance strategy is attempted.

/// Suffix of the pre-migration backup copy.
pub const OLD_SUFFIX: &str = "_OLD";
/// Suffix of the staged candidate copy.
pub const NEW_SUFFIX: &str = "_NEW";

/// The staging identifiers derived from a target document id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingNames {
    /// Backup of the pre-migration live document.
    pub old: String,
    /// Staged candidate, whose indexes are built before promotion.
    pub new: String,
}

/// Derive the staging identifiers for `id`.
pub fn staging_names(id: &str) -> StagingNames {
    StagingNames {
        old: format!("{id}{OLD_SUFFIX}"),
        new: format!("{id}{NEW_SUFFIX}"),
    }
}

/// Strip the `_design/` prefix: view and search query endpoints address a
/// design document by its bare name.
pub fn design_basename(id: &str) -> &str {
    id.strip_prefix("_design/").unwrap_or(id)
}
