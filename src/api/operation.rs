//! WebHDFS operation catalog.

use std::fmt;
use std::str::FromStr;

use reqwest::Method;

use crate::error::WebHdfsError;

/// A query parameter an operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Query key as the protocol spells it.
    pub key: &'static str,
    /// Whether the request is rejected when the parameter is absent.
    pub required: bool,
}

const fn required(key: &'static str) -> ParamSpec {
    ParamSpec {
        key,
        required: true,
    }
}

const fn optional(key: &'static str) -> ParamSpec {
    ParamSpec {
        key,
        required: false,
    }
}

/// WebHDFS operations supported by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Rename a file or directory
    Rename,
    /// Create a directory and its missing parents
    Mkdirs,
    /// Create a symbolic link
    CreateSymlink,
    /// Delete a file or directory
    Delete,
    /// Set permission bits
    SetPermission,
    /// Set owner and/or group
    SetOwner,
    /// Set the replication factor of a file
    SetReplication,
    /// Set modification and access times
    SetTimes,
    /// Truncate a file to a new length
    Truncate,
    /// Concatenate source files onto a target
    Concat,
    /// Stat a single path
    GetFileStatus,
    /// List a directory
    ListStatus,
    /// Summarize a directory tree
    GetContentSummary,
    /// Checksum of a file
    GetFileChecksum,
    /// Home directory of the calling user
    GetHomeDirectory,
}

impl Operation {
    /// Every operation in the catalog.
    pub const ALL: [Operation; 15] = [
        Operation::Rename,
        Operation::Mkdirs,
        Operation::CreateSymlink,
        Operation::Delete,
        Operation::SetPermission,
        Operation::SetOwner,
        Operation::SetReplication,
        Operation::SetTimes,
        Operation::Truncate,
        Operation::Concat,
        Operation::GetFileStatus,
        Operation::ListStatus,
        Operation::GetContentSummary,
        Operation::GetFileChecksum,
        Operation::GetHomeDirectory,
    ];

    /// Op code sent as the `op` query parameter.
    pub fn code(&self) -> &'static str {
        match self {
            Operation::Rename => "RENAME",
            Operation::Mkdirs => "MKDIRS",
            Operation::CreateSymlink => "CREATESYMLINK",
            Operation::Delete => "DELETE",
            Operation::SetPermission => "SETPERMISSION",
            Operation::SetOwner => "SETOWNER",
            Operation::SetReplication => "SETREPLICATION",
            Operation::SetTimes => "SETTIMES",
            Operation::Truncate => "TRUNCATE",
            Operation::Concat => "CONCAT",
            Operation::GetFileStatus => "GETFILESTATUS",
            Operation::ListStatus => "LISTSTATUS",
            Operation::GetContentSummary => "GETCONTENTSUMMARY",
            Operation::GetFileChecksum => "GETFILECHECKSUM",
            Operation::GetHomeDirectory => "GETHOMEDIRECTORY",
        }
    }

    /// HTTP verb the protocol binds to this operation.
    ///
    /// Mutating operations use PUT with three exceptions: DELETE is sent as
    /// HTTP DELETE, and TRUNCATE and CONCAT as POST, which is what NameNodes
    /// accept for them.
    pub fn method(&self) -> Method {
        match self {
            Operation::Rename
            | Operation::Mkdirs
            | Operation::CreateSymlink
            | Operation::SetPermission
            | Operation::SetOwner
            | Operation::SetReplication
            | Operation::SetTimes => Method::PUT,
            Operation::Delete => Method::DELETE,
            Operation::Truncate | Operation::Concat => Method::POST,
            Operation::GetFileStatus
            | Operation::ListStatus
            | Operation::GetContentSummary
            | Operation::GetFileChecksum
            | Operation::GetHomeDirectory => Method::GET,
        }
    }

    /// Parameters this operation accepts, in the order they are sent.
    pub fn params(&self) -> &'static [ParamSpec] {
        const DESTINATION: &[ParamSpec] = &[required("destination")];
        const PERMISSION: &[ParamSpec] = &[required("permission")];
        const SYMLINK: &[ParamSpec] = &[required("destination"), required("createParent")];
        const RECURSIVE: &[ParamSpec] = &[required("recursive")];
        const OWNER: &[ParamSpec] = &[optional("owner"), optional("group")];
        const REPLICATION: &[ParamSpec] = &[required("replication")];
        const TIMES: &[ParamSpec] = &[required("modificationtime"), required("accesstime")];
        const NEW_LENGTH: &[ParamSpec] = &[required("newlength")];
        const SOURCES: &[ParamSpec] = &[required("sources")];

        match self {
            Operation::Rename => DESTINATION,
            Operation::Mkdirs | Operation::SetPermission => PERMISSION,
            Operation::CreateSymlink => SYMLINK,
            Operation::Delete => RECURSIVE,
            Operation::SetOwner => OWNER,
            Operation::SetReplication => REPLICATION,
            Operation::SetTimes => TIMES,
            Operation::Truncate => NEW_LENGTH,
            Operation::Concat => SOURCES,
            Operation::GetFileStatus
            | Operation::ListStatus
            | Operation::GetContentSummary
            | Operation::GetFileChecksum
            | Operation::GetHomeDirectory => &[],
        }
    }

    /// Whether the operation changes namespace state on the NameNode.
    pub fn is_mutating(&self) -> bool {
        self.method() != Method::GET
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Operation {
    type Err = WebHdfsError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.code() == code)
            .ok_or_else(|| WebHdfsError::Config(format!("Unknown operation: {}", code)))
    }
}
