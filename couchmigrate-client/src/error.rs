//! Error types for CouchDB/Cloudant HTTP operations

use thiserror::Error;

/// Errors from CouchDB/Cloudant HTTP operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or connection error, including request timeouts.
    #[error("network error: {0}")]
    Network(String),

    /// 401 Unauthorized. Credentials in the service URL are wrong or
    /// expired.
    #[error("authentication failed (401); check the credentials in the service URL")]
    Unauthorized,

    /// 403 Forbidden.
    #[error("access denied (403)")]
    Forbidden,

    /// 404 Not Found (includes the requested resource).
    #[error("not found: {0}")]
    NotFound(String),

    /// 409 Conflict: a stale revision was supplied on a write or delete.
    #[error("document update conflict on '{0}'")]
    Conflict(String),

    /// 400 Bad Request (includes the server's error message).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// 5xx server error.
    #[error("server error: {0}")]
    ServerError(String),

    /// Response body could not be parsed as expected.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The service URL could not be parsed.
    #[error("invalid service URL: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
