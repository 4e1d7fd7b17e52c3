use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "couchmigrate",
    about = "CouchDB/Cloudant design document migration CLI",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Migrate a design document through _OLD/_NEW staging
    ///
    /// The live document is backed up to <id>_OLD, the candidate staged at
    /// <id>_NEW, and only once the staged index build is queryable is the
    /// candidate promoted over the live identifier. Exits 3 when the
    /// candidate is identical to the live document (nothing to do).
    Migrate {
        /// Name of the database
        #[arg(long, short = 'd', visible_alias = "db")]
        database: String,

        /// URL of the CouchDB/Cloudant service
        #[arg(long, short = 'u', env = "COUCH_URL")]
        url: String,

        /// Design document file (JSON); stdin is read when neither this
        /// nor --expr is given
        #[arg(long = "designdoc", short = 'f', visible_alias = "dd", value_name = "FILE")]
        design_doc: Option<PathBuf>,

        /// Inline design document JSON
        #[arg(short = 'e', long = "expr")]
        expr: Option<String>,

        /// Seconds between index readiness probes
        /// (defaults: 3 for view indexes, 10 for search indexes)
        #[arg(long, value_name = "SECS")]
        poll_interval_secs: Option<u64>,

        /// Give up on the index build after this many seconds, leaving the
        /// _OLD/_NEW staging documents in place for inspection
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,
    },

    /// Compare a candidate design document against the live one
    ///
    /// Exits 0 when structurally identical (ignoring _id/_rev), 1 when
    /// different, 2 on trouble — the diff(1) convention.
    Diff {
        /// Name of the database
        #[arg(long, short = 'd', visible_alias = "db")]
        database: String,

        /// URL of the CouchDB/Cloudant service
        #[arg(long, short = 'u', env = "COUCH_URL")]
        url: String,

        /// Design document file (JSON); stdin is read when neither this
        /// nor --expr is given
        #[arg(long = "designdoc", short = 'f', visible_alias = "dd", value_name = "FILE")]
        design_doc: Option<PathBuf>,

        /// Inline design document JSON
        #[arg(short = 'e', long = "expr")]
        expr: Option<String>,
    },

    /// Show active index build tasks for a database
    Status {
        /// Name of the database
        #[arg(long, short = 'd', visible_alias = "db")]
        database: String,

        /// URL of the CouchDB/Cloudant service
        #[arg(long, short = 'u', env = "COUCH_URL")]
        url: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
