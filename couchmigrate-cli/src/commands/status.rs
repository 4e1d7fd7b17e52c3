use crate::error::CliResult;
use crate::{context, output};
use couchmigrate_core::store::IndexTask;

/// Show the active index-build tasks for a database.
pub async fn run(database: &str, url: &str) -> CliResult<()> {
    let client = context::build_client(url, database)?;
    let tasks = client.active_tasks().await?;

    let building: Vec<&IndexTask> = tasks
        .iter()
        .filter(|t| t.is_index_build() && t.is_for_database(database))
        .collect();

    if building.is_empty() {
        println!("No active index build tasks for '{database}'");
        return Ok(());
    }

    println!("{}", output::format_task_table(&building));
    Ok(())
}
