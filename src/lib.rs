//! # webhdfs
//!
//! Rust client library for the WebHDFS REST protocol.
//!
//! ## Features
//!
//! - **Namespace operations**: rename, `mkdirs`, symlinks, delete, and setters
//!   for permission, owner, replication and times.
//! - **Metadata queries**: file status, directory listing, content summary,
//!   file checksum and home directory.
//! - **Typed results**: every response envelope decodes into its own struct;
//!   failures are split into transport, remote, decode and usage errors.
//!
//! Each call is exactly one HTTP round trip. Nothing is cached and nothing is
//! retried; wrap calls yourself if you need either.
//!
//! ## Example: Basic Usage
//!
//! ```no_run
//! use webhdfs::{Configuration, FileSystem, Path};
//!
//! # async fn example() -> webhdfs::Result<()> {
//! let fs = FileSystem::new(Configuration::new("namenode:9870").with_user("hadoop"))?;
//!
//! fs.mkdirs(&Path::new("/tmp/reports"), 0o755).await?;
//! fs.rename(&Path::new("/tmp/out.csv"), &Path::new("/tmp/reports/out.csv"))
//!     .await?;
//!
//! let status = fs.get_file_status(&Path::new("/tmp/reports/out.csv")).await?;
//! println!("{} bytes, permission {}", status.length, status.permission);
//!
//! let summary = fs.get_content_summary(&Path::new("/tmp")).await?;
//! println!("{} files using {} bytes", summary.file_count, summary.space_consumed);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod fs;
pub mod http;

// Re-export commonly used types
pub use api::{Operation, RemoteException, RemoteExceptionKind};
pub use config::Configuration;
pub use error::{Result, WebHdfsError};
pub use fs::{ContentSummary, FileChecksum, FileStatus, FileSystem, FileType, Path};
