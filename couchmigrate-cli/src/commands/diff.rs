use crate::error::{CliError, CliResult, EXIT_ERROR, EXIT_SUCCESS};
use crate::{context, input};
use colored::Colorize;
use couchmigrate_core::{compare, doc};
use std::path::Path;

/// Compare a candidate design document against the live one.
///
/// diff(1) convention: exit 0 when identical, 1 when different, 2 on trouble.
pub async fn run(
    database: &str,
    url: &str,
    design_doc: Option<&Path>,
    expr: Option<&str>,
) -> CliResult<i32> {
    let candidate = input::load_design_doc(expr, design_doc)?;
    let name = doc::doc_id(&candidate)
        .ok_or_else(|| CliError::Input("design document has no _id field".to_string()))?
        .to_string();

    let client = context::build_client(url, database)?;
    match client.get_doc(&name).await? {
        None => {
            println!("live document '{name}' does not exist");
            Ok(EXIT_ERROR)
        }
        Some(live) => {
            if compare::same(&live, &candidate) {
                println!("{} '{name}' is identical to the live document", "ok:".green().bold());
                Ok(EXIT_SUCCESS)
            } else {
                println!("'{name}' differs from the live document");
                Ok(EXIT_ERROR)
            }
        }
    }
}
