//! Typed results of metadata operations.

use serde::{Deserialize, Serialize};

/// Entry type reported in a `FileStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    /// Regular file
    File,
    /// Directory
    Directory,
    /// Symbolic link
    Symlink,
}

impl FileType {
    pub fn is_file(&self) -> bool {
        *self == FileType::File
    }

    pub fn is_dir(&self) -> bool {
        *self == FileType::Directory
    }

    pub fn is_symlink(&self) -> bool {
        *self == FileType::Symlink
    }
}

/// Snapshot of a path's metadata, as returned by GETFILESTATUS and LISTSTATUS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStatus {
    /// Last access, epoch millis
    pub access_time: i64,
    pub block_size: i64,
    pub group: String,
    /// File size in bytes (0 for directories)
    pub length: i64,
    /// Last modification, epoch millis
    pub modification_time: i64,
    pub owner: String,
    /// Name relative to the listed directory; empty for GETFILESTATUS
    pub path_suffix: String,
    /// Octal permission string, e.g. "644"
    pub permission: String,
    pub replication: i32,
    #[serde(rename = "type")]
    pub file_type: FileType,
    /// Inode id (Hadoop 2.x and later)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_num: Option<i32>,
    /// Link target, present for symlinks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symlink: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_policy: Option<i32>,
}

impl FileStatus {
    pub fn is_file(&self) -> bool {
        self.file_type.is_file()
    }

    pub fn is_dir(&self) -> bool {
        self.file_type.is_dir()
    }

    /// Permission bits parsed from the octal string.
    pub fn permission_bits(&self) -> Option<u16> {
        u16::from_str_radix(&self.permission, 8).ok()
    }
}

/// Aggregate usage of a directory tree (GETCONTENTSUMMARY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSummary {
    pub directory_count: i64,
    pub file_count: i64,
    pub length: i64,
    /// Namespace quota, -1 when unset
    pub quota: i64,
    pub space_consumed: i64,
    /// Space quota in bytes, -1 when unset
    pub space_quota: i64,
}

impl ContentSummary {
    pub fn has_quota(&self) -> bool {
        self.quota >= 0
    }

    pub fn has_space_quota(&self) -> bool {
        self.space_quota >= 0
    }
}

/// File checksum (GETFILECHECKSUM).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChecksum {
    /// e.g. "MD5-of-1MD5-of-512CRC32"
    pub algorithm: String,
    /// Digest as reported by the server, kept opaque
    pub bytes: String,
    /// Length of the checksum descriptor, not of the file
    pub length: i32,
}
