//! Error types for the webhdfs library.

use thiserror::Error;

use crate::api::error::RemoteException;
use crate::api::Operation;

/// Main error type for webhdfs operations.
#[derive(Error, Debug)]
pub enum WebHdfsError {
    /// Connection, TLS or timeout failure reported by the HTTP client.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The NameNode answered with a non-2xx status.
    #[error("Remote error ({status}): {message}")]
    Remote {
        status: u16,
        message: String,
        exception: Option<RemoteException>,
    },

    /// A 2xx body did not match the envelope the operation mandates.
    #[error("Decode error for {op}: {source}")]
    Decode {
        op: Operation,
        #[source]
        source: serde_json::Error,
    },

    /// Caller passed an argument the operation cannot accept.
    #[error("Invalid argument: {0}")]
    Usage(String),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl WebHdfsError {
    pub fn is_transport(&self) -> bool {
        matches!(self, WebHdfsError::Transport(_))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, WebHdfsError::Remote { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, WebHdfsError::Decode { .. })
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, WebHdfsError::Usage(_))
    }

    /// HTTP status of a remote error.
    pub fn status(&self) -> Option<u16> {
        match self {
            WebHdfsError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parsed `RemoteException` payload of a remote error, if the body carried one.
    pub fn remote_exception(&self) -> Option<&RemoteException> {
        match self {
            WebHdfsError::Remote { exception, .. } => exception.as_ref(),
            _ => None,
        }
    }
}

/// Result type alias for webhdfs operations.
pub type Result<T> = std::result::Result<T, WebHdfsError>;
