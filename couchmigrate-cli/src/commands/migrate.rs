use crate::error::{CliError, CliResult, EXIT_NOOP, EXIT_SUCCESS};
use crate::{context, input};
use colored::Colorize;
use couchmigrate_core::{migrate, MigrateOptions, MigrationOutcome};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    database: &str,
    url: &str,
    design_doc: Option<&Path>,
    expr: Option<&str>,
    poll_interval_secs: Option<u64>,
    timeout_secs: Option<u64>,
    quiet: bool,
) -> CliResult<i32> {
    let candidate = input::load_design_doc(expr, design_doc)?;
    let store = context::build_client(url, database)?;

    let mut options = MigrateOptions::default();
    if let Some(secs) = poll_interval_secs {
        let interval = Duration::from_secs(secs.max(1));
        options.poll.interval = interval;
        options.poll.search_interval = interval;
    }
    options.poll.timeout = timeout_secs.map(Duration::from_secs);

    // Ctrl-C aborts between poll attempts, leaving _OLD/_NEW staged.
    let cancel = Arc::clone(&options.cancel);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("interrupt received, stopping after the current step");
            cancel.store(true, Ordering::Relaxed);
        }
    });

    let bar = if quiet {
        ProgressBar::with_draw_target(Some(100), ProgressDrawTarget::hidden())
    } else {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::with_template(
                "{prefix:10} {spinner:.dim} [{bar:25}] {percent:>3}%  {msg}",
            )
            .unwrap()
            .tick_strings(&["|", "/", "-", "\\", " "])
            .progress_chars("=>-"),
        );
        bar.set_prefix(format!("{}", "Indexing".green().bold()));
        bar.enable_steady_tick(Duration::from_millis(120));
        bar
    };

    let outcome = {
        let bar = bar.clone();
        migrate(&store, candidate, &options, move |progress| {
            match progress.percent() {
                Some(pct) => {
                    bar.set_position(u64::from(pct));
                    bar.set_message(format!("{} shard task(s)", progress.tasks));
                }
                None => bar.set_message("waiting for the index build to report progress"),
            }
        })
        .await
    };
    bar.finish_and_clear();

    match outcome {
        Ok(MigrationOutcome::Completed) => {
            println!(
                "{} design document migrated in '{database}'",
                "ok:".green().bold()
            );
            Ok(EXIT_SUCCESS)
        }
        Ok(MigrationOutcome::NoOpSkipped) => {
            println!(
                "{} design document is unchanged, nothing to migrate",
                "ok:".green().bold()
            );
            Ok(EXIT_NOOP)
        }
        Err(e) => Err(CliError::Migrate(e)),
    }
}
