//! Response envelopes and decoding.
//!
//! Every operation has exactly one envelope type; the caller picks it from the
//! operation, never from the body. Unknown fields are ignored so newer
//! NameNodes can add fields without breaking older clients.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::api::Operation;
use crate::error::{Result, WebHdfsError};
use crate::fs::{ContentSummary, FileChecksum, FileStatus, Path};

/// A top-level JSON wrapper and the value it carries.
pub trait Envelope: DeserializeOwned {
    type Output;

    fn into_output(self) -> Self::Output;
}

/// `{"Boolean": true}`
#[derive(Debug, Deserialize)]
pub struct BooleanEnvelope {
    #[serde(rename = "Boolean")]
    value: bool,
}

impl Envelope for BooleanEnvelope {
    type Output = bool;

    fn into_output(self) -> bool {
        self.value
    }
}

/// `{"FileStatus": {...}}`
#[derive(Debug, Deserialize)]
pub struct FileStatusEnvelope {
    #[serde(rename = "FileStatus")]
    status: FileStatus,
}

impl Envelope for FileStatusEnvelope {
    type Output = FileStatus;

    fn into_output(self) -> FileStatus {
        self.status
    }
}

#[derive(Debug, Deserialize)]
struct FileStatusList {
    #[serde(rename = "FileStatus")]
    entries: Vec<FileStatus>,
}

/// `{"FileStatuses": {"FileStatus": [...]}}`
#[derive(Debug, Deserialize)]
pub struct FileStatusesEnvelope {
    #[serde(rename = "FileStatuses")]
    statuses: FileStatusList,
}

impl Envelope for FileStatusesEnvelope {
    type Output = Vec<FileStatus>;

    fn into_output(self) -> Vec<FileStatus> {
        self.statuses.entries
    }
}

/// `{"ContentSummary": {...}}`
#[derive(Debug, Deserialize)]
pub struct ContentSummaryEnvelope {
    #[serde(rename = "ContentSummary")]
    summary: ContentSummary,
}

impl Envelope for ContentSummaryEnvelope {
    type Output = ContentSummary;

    fn into_output(self) -> ContentSummary {
        self.summary
    }
}

/// `{"FileChecksum": {...}}`
#[derive(Debug, Deserialize)]
pub struct FileChecksumEnvelope {
    #[serde(rename = "FileChecksum")]
    checksum: FileChecksum,
}

impl Envelope for FileChecksumEnvelope {
    type Output = FileChecksum;

    fn into_output(self) -> FileChecksum {
        self.checksum
    }
}

/// `{"Path": "/user/webuser"}`
#[derive(Debug, Deserialize)]
pub struct PathEnvelope {
    #[serde(rename = "Path")]
    path: String,
}

impl Envelope for PathEnvelope {
    type Output = Path;

    fn into_output(self) -> Path {
        Path::new(self.path)
    }
}

/// Decode `body` as the envelope `E` that `op` mandates.
pub fn decode<E: Envelope>(op: Operation, body: &str) -> Result<E::Output> {
    serde_json::from_str::<E>(body)
        .map(E::into_output)
        .map_err(|source| WebHdfsError::Decode { op, source })
}

/// Like [`decode`], but an empty (or whitespace-only) body yields `None`.
pub fn decode_optional<E: Envelope>(op: Operation, body: &str) -> Result<Option<E::Output>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    decode::<E>(op, body).map(Some)
}
