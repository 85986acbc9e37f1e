//! Filesystem facade and the values it exchanges.

mod filesystem;
mod operations;
pub(crate) mod path;
pub(crate) mod status;

pub use filesystem::FileSystem;
pub use path::Path;
pub use status::{ContentSummary, FileChecksum, FileStatus, FileType};
