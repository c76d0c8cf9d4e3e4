//! Remote client errors
//!
//! Only failures to *complete* a call land here. An in-range non-2xx
//! status (a clean 404 in particular) is a normal outcome and is reported
//! through `RemoteResponse`, never as an error.

use thiserror::Error;

/// Errors from talking to the vehicle registry.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Timeout, DNS failure, connection refused, broken stream.
    #[error("registry transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The registry answered 2xx but the body did not decode.
    #[error("registry returned a malformed body: {0}")]
    Decode(String),
}

/// Result type alias for RemoteError
pub type RemoteResult<T> = Result<T, RemoteError>;

impl RemoteError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
