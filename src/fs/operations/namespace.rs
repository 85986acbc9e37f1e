//! Namespace mutations: rename, mkdirs, symlinks, delete and attribute setters.

use crate::api::request::Param;
use crate::api::response::{decode, decode_optional, BooleanEnvelope};
use crate::api::Operation;
use crate::error::{Result, WebHdfsError};
use crate::fs::{FileSystem, Path};

impl FileSystem {
    /// Rename `source` to `destination`.
    ///
    /// Returns the server's flag; `false` usually means the source is missing
    /// or the destination already exists.
    pub async fn rename(&self, source: &Path, destination: &Path) -> Result<bool> {
        let op = Operation::Rename;
        let body = self
            .call(op, source, &[Param::Destination(destination.clone())])
            .await?;
        decode::<BooleanEnvelope>(op, &body)
    }

    /// Create `path` and any missing parents with the given permission bits (e.g. `0o744`).
    pub async fn mkdirs(&self, path: &Path, permission: u16) -> Result<bool> {
        let op = Operation::Mkdirs;
        let body = self.call(op, path, &[Param::Permission(permission)]).await?;
        decode::<BooleanEnvelope>(op, &body)
    }

    /// [`mkdirs`](Self::mkdirs) with the configured default permission.
    pub async fn mkdirs_default(&self, path: &Path) -> Result<bool> {
        self.mkdirs(path, self.config().default_permission()).await
    }

    /// Create a symlink at `link` pointing to `target`.
    ///
    /// Servers answer either with an empty body or a `Boolean` envelope; an
    /// empty 2xx body counts as success.
    pub async fn create_symlink(&self, target: &Path, link: &Path, create_parent: bool) -> Result<bool> {
        let op = Operation::CreateSymlink;
        let body = self
            .call(
                op,
                link,
                &[
                    Param::Destination(target.clone()),
                    Param::CreateParent(create_parent),
                ],
            )
            .await?;
        Ok(decode_optional::<BooleanEnvelope>(op, &body)?.unwrap_or(true))
    }

    /// Delete `path`; non-empty directories need `recursive`.
    pub async fn delete(&self, path: &Path, recursive: bool) -> Result<bool> {
        let op = Operation::Delete;
        let body = self.call(op, path, &[Param::Recursive(recursive)]).await?;
        decode::<BooleanEnvelope>(op, &body)
    }

    pub async fn set_permission(&self, path: &Path, permission: u16) -> Result<()> {
        self.call(Operation::SetPermission, path, &[Param::Permission(permission)])
            .await?;
        Ok(())
    }

    /// Change owner and/or group. At least one must be given.
    pub async fn set_owner(&self, path: &Path, owner: Option<&str>, group: Option<&str>) -> Result<()> {
        if owner.is_none() && group.is_none() {
            return Err(WebHdfsError::Usage(
                "set_owner needs an owner or a group".to_string(),
            ));
        }
        let mut params = Vec::with_capacity(2);
        if let Some(owner) = owner {
            params.push(Param::Owner(owner.to_string()));
        }
        if let Some(group) = group {
            params.push(Param::Group(group.to_string()));
        }
        self.call(Operation::SetOwner, path, &params).await?;
        Ok(())
    }

    pub async fn set_replication(&self, path: &Path, replication: u16) -> Result<bool> {
        let op = Operation::SetReplication;
        let body = self
            .call(op, path, &[Param::Replication(replication)])
            .await?;
        decode::<BooleanEnvelope>(op, &body)
    }

    /// Set modification and access times (epoch millis); `None` leaves a value unchanged.
    pub async fn set_times(
        &self,
        path: &Path,
        modification_time: Option<i64>,
        access_time: Option<i64>,
    ) -> Result<()> {
        self.call(
            Operation::SetTimes,
            path,
            &[
                Param::ModificationTime(modification_time.unwrap_or(-1)),
                Param::AccessTime(access_time.unwrap_or(-1)),
            ],
        )
        .await?;
        Ok(())
    }

    /// Truncate a file to `new_length` bytes.
    ///
    /// `true` means the truncate completed; `false` means block recovery is
    /// still in progress on the server.
    pub async fn truncate(&self, path: &Path, new_length: u64) -> Result<bool> {
        let op = Operation::Truncate;
        let body = self.call(op, path, &[Param::NewLength(new_length)]).await?;
        decode::<BooleanEnvelope>(op, &body)
    }

    /// Append the contents of `sources` to `target`, removing the sources.
    pub async fn concat(&self, target: &Path, sources: &[Path]) -> Result<()> {
        self.call(Operation::Concat, target, &[Param::Sources(sources.to_vec())])
            .await?;
        Ok(())
    }
}
