//! Remote exception payloads and HTTP status classification.

use serde::Deserialize;
use tracing::warn;

use crate::error::{Result, WebHdfsError};

/// The `RemoteException` object a NameNode returns with a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteException {
    /// Short exception name, e.g. "FileNotFoundException"
    pub exception: String,
    /// Fully qualified Java class of the exception
    #[serde(default)]
    pub java_class_name: String,
    /// Server-side message
    #[serde(default)]
    pub message: String,
}

impl RemoteException {
    pub fn kind(&self) -> RemoteExceptionKind {
        RemoteExceptionKind::from(self.exception.as_str())
    }
}

#[derive(Deserialize)]
struct RemoteExceptionEnvelope {
    #[serde(rename = "RemoteException")]
    remote_exception: RemoteException,
}

/// Well-known WebHDFS remote exceptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteExceptionKind {
    /// Path does not exist
    FileNotFound,
    /// Permission denied
    AccessControl,
    /// Target already exists
    FileAlreadyExists,
    /// Bad request argument
    IllegalArgument,
    /// Authentication failed
    Security,
    /// NameNode is in safe mode
    SafeMode,
    /// A parent path component is a file
    ParentNotDirectory,
    /// Operation not supported by the server
    UnsupportedOperation,
    /// Generic I/O failure
    Io,
    /// Unknown exception
    Unknown,
}

impl From<&str> for RemoteExceptionKind {
    fn from(name: &str) -> Self {
        match name {
            "FileNotFoundException" => RemoteExceptionKind::FileNotFound,
            "AccessControlException" => RemoteExceptionKind::AccessControl,
            "FileAlreadyExistsException" => RemoteExceptionKind::FileAlreadyExists,
            "IllegalArgumentException" => RemoteExceptionKind::IllegalArgument,
            "SecurityException" => RemoteExceptionKind::Security,
            "SafeModeException" => RemoteExceptionKind::SafeMode,
            "ParentNotDirectoryException" => RemoteExceptionKind::ParentNotDirectory,
            "UnsupportedOperationException" => RemoteExceptionKind::UnsupportedOperation,
            "IOException" => RemoteExceptionKind::Io,
            _ => RemoteExceptionKind::Unknown,
        }
    }
}

impl RemoteExceptionKind {
    /// Get human-readable description of the exception.
    pub fn description(&self) -> &'static str {
        match self {
            RemoteExceptionKind::FileNotFound => "File not found",
            RemoteExceptionKind::AccessControl => "Access denied",
            RemoteExceptionKind::FileAlreadyExists => "File already exists",
            RemoteExceptionKind::IllegalArgument => "Illegal argument",
            RemoteExceptionKind::Security => "Security error",
            RemoteExceptionKind::SafeMode => "NameNode in safe mode",
            RemoteExceptionKind::ParentNotDirectory => "Parent is not a directory",
            RemoteExceptionKind::UnsupportedOperation => "Unsupported operation",
            RemoteExceptionKind::Io => "I/O error",
            RemoteExceptionKind::Unknown => "Unknown error",
        }
    }
}

/// Parse a `{"RemoteException": {...}}` body, if that is what it is.
pub fn parse_remote_exception(body: &str) -> Option<RemoteException> {
    serde_json::from_str::<RemoteExceptionEnvelope>(body)
        .ok()
        .map(|envelope| envelope.remote_exception)
}

/// Classify a response by status: 2xx hands the body on for decoding,
/// anything else becomes a [`WebHdfsError::Remote`].
pub fn classify(status: u16, body: String) -> Result<String> {
    if (200..300).contains(&status) {
        return Ok(body);
    }

    let exception = parse_remote_exception(&body);
    let message = match &exception {
        Some(e) if !e.message.is_empty() => e.message.clone(),
        Some(e) => e.kind().description().to_string(),
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => format!("HTTP status {}", status),
    };
    warn!(status, message = %message, "webhdfs remote error");

    Err(WebHdfsError::Remote {
        status,
        message,
        exception,
    })
}
