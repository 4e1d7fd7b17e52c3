use crate::error::{CliError, CliResult};
use couchmigrate_client::CouchClient;

/// Build the store client from the service URL and database arguments.
pub fn build_client(url: &str, database: &str) -> CliResult<CouchClient> {
    CouchClient::new(url, database).map_err(|e| CliError::Config(e.to_string()))
}
