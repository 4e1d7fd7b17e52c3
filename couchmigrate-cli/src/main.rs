mod cli;
mod commands;
mod context;
mod error;
mod input;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use error::exit_with_error;

fn init_tracing(cli: &Cli) {
    // CLI tracing policy:
    //   --quiet  → always "off" (no logs, no matter what)
    //   --verbose → "info" level (step-by-step migration diagnostics)
    //   default  → "off" (clean terminal, progress bar only)
    //   RUST_LOG → honoured only with --verbose, so developer env vars
    //              don't leak log lines into the user-facing output.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Disable color when --no-color or NO_COLOR is set. Errors go to stderr,
    // so piping stdout should not strip color from terminal error output.
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => exit_with_error(e),
    }
}

async fn run(cli: Cli) -> error::CliResult<i32> {
    match cli.command {
        Commands::Migrate {
            database,
            url,
            design_doc,
            expr,
            poll_interval_secs,
            timeout_secs,
        } => {
            commands::migrate::run(
                &database,
                &url,
                design_doc.as_deref(),
                expr.as_deref(),
                poll_interval_secs,
                timeout_secs,
                cli.quiet,
            )
            .await
        }

        Commands::Diff {
            database,
            url,
            design_doc,
            expr,
        } => commands::diff::run(&database, &url, design_doc.as_deref(), expr.as_deref()).await,

        Commands::Status { database, url } => {
            commands::status::run(&database, &url).await?;
            Ok(error::EXIT_SUCCESS)
        }

        Commands::Completions { shell } => {
            commands::completions::run(shell);
            Ok(error::EXIT_SUCCESS)
        }
    }
}
