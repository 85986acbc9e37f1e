//! Read-only metadata queries.

use crate::api::response::{
    decode, ContentSummaryEnvelope, FileChecksumEnvelope, FileStatusEnvelope,
    FileStatusesEnvelope, PathEnvelope,
};
use crate::api::Operation;
use crate::error::Result;
use crate::fs::{ContentSummary, FileChecksum, FileStatus, FileSystem, Path};

impl FileSystem {
    /// Get the status of a single path.
    pub async fn get_file_status(&self, path: &Path) -> Result<FileStatus> {
        let op = Operation::GetFileStatus;
        let body = self.call(op, path, &[]).await?;
        decode::<FileStatusEnvelope>(op, &body)
    }

    /// List a directory, in the order the server returns entries.
    ///
    /// Listing a file yields a single entry with an empty `path_suffix`.
    pub async fn list_status(&self, path: &Path) -> Result<Vec<FileStatus>> {
        let op = Operation::ListStatus;
        let body = self.call(op, path, &[]).await?;
        decode::<FileStatusesEnvelope>(op, &body)
    }

    pub async fn get_content_summary(&self, path: &Path) -> Result<ContentSummary> {
        let op = Operation::GetContentSummary;
        let body = self.call(op, path, &[]).await?;
        decode::<ContentSummaryEnvelope>(op, &body)
    }

    pub async fn get_file_checksum(&self, path: &Path) -> Result<FileChecksum> {
        let op = Operation::GetFileChecksum;
        let body = self.call(op, path, &[]).await?;
        decode::<FileChecksumEnvelope>(op, &body)
    }

    /// Home directory of the configured user (or the server's default user).
    pub async fn get_home_directory(&self) -> Result<Path> {
        let op = Operation::GetHomeDirectory;
        let body = self.call(op, &Path::new("/"), &[]).await?;
        decode::<PathEnvelope>(op, &body)
    }
}
