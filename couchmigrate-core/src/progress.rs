//! Aggregate index-build progress from active-task introspection.

use crate::store::IndexTask;

/// Approximate completion of one design document's index build, summed
/// across the matching shard tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexProgress {
    /// Number of matching shard tasks.
    pub tasks: usize,
    /// Changes indexed so far, summed across shards.
    pub changes_done: u64,
    /// Total changes expected, summed across shards.
    pub total_changes: u64,
}

impl IndexProgress {
    /// Aggregate the tasks building `design_id` in `db`.
    ///
    /// Filters to index-build kinds (`indexer`, `search_indexer`) owned by
    /// the database and design document, then sums the change counters.
    pub fn aggregate<'a, I>(tasks: I, db: &str, design_id: &str) -> Self
    where
        I: IntoIterator<Item = &'a IndexTask>,
    {
        let mut agg = IndexProgress::default();
        for task in tasks {
            if task.is_index_build()
                && task.is_for_database(db)
                && task.design_document == design_id
            {
                agg.tasks += 1;
                agg.changes_done += task.changes_done;
                agg.total_changes += task.total_changes;
            }
        }
        agg
    }

    /// Completion percent: floor of summed changes over summed totals.
    ///
    /// `None` when no matching tasks were found or the totals are zero —
    /// progress is unknown, never a division by zero.
    pub fn percent(&self) -> Option<u8> {
        if self.tasks == 0 || self.total_changes == 0 {
            return None;
        }
        Some(((self.changes_done * 100 / self.total_changes).min(100)) as u8)
    }
}
