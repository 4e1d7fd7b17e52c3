use colored::Colorize;
use std::fmt;
use std::process;

/// Exit codes for the CLI.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;
/// The candidate is identical to the live document; no migration performed.
pub const EXIT_NOOP: i32 = 3;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Error from the migration core (database missing, conflict, timeout).
    Migrate(couchmigrate_core::MigrateError),
    /// Error from the CouchDB client outside a migration run.
    Client(couchmigrate_client::ClientError),
    /// Bad file path, unreadable input, parse failure.
    Input(String),
    /// Bad service URL or client construction failure.
    Config(String),
    /// Argument / usage errors.
    Usage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Migrate(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Client(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Input(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Config(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Usage(msg) => write!(f, "{} {msg}", "error:".red().bold()),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<couchmigrate_core::MigrateError> for CliError {
    fn from(e: couchmigrate_core::MigrateError) -> Self {
        CliError::Migrate(e)
    }
}

impl From<couchmigrate_client::ClientError> for CliError {
    fn from(e: couchmigrate_client::ClientError) -> Self {
        CliError::Client(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Input(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Input(format!("JSON parse error: {e}"))
    }
}

/// Print the error and exit with the appropriate code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    let code = match &err {
        CliError::Usage(_) => EXIT_USAGE,
        _ => EXIT_ERROR,
    };
    process::exit(code)
}

pub type CliResult<T> = std::result::Result<T, CliError>;
