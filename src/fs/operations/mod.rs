//! Filesystem operations split by family.

mod metadata;
mod namespace;
