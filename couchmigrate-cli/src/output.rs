use comfy_table::{ContentArrangement, Table};
use couchmigrate_core::store::IndexTask;

/// Render active index-build tasks as a table.
pub fn format_task_table(tasks: &[&IndexTask]) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "type",
        "design document",
        "changes done",
        "total changes",
        "progress",
    ]);

    for task in tasks {
        let progress = if task.total_changes == 0 {
            "-".to_string()
        } else {
            format!("{}%", task.changes_done * 100 / task.total_changes)
        };
        table.add_row(vec![
            task.kind.as_str().to_string(),
            task.design_document.clone(),
            task.changes_done.to_string(),
            task.total_changes.to_string(),
            progress,
        ]);
    }

    table.to_string()
}
