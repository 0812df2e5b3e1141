//! Repository error taxonomy
//!
//! Every component reports failures through [`RepositoryError`]. Lower-level
//! I/O failures are wrapped together with a description of what was being
//! attempted, so a caller always knows which area of the repository failed.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The operation needs an initialized repository (with an object store)
    #[error("not a mygit repository: {}", .0.display())]
    NotARepository(PathBuf),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Directories and paths outside of the working tree cannot be staged
    #[error("unsupported path: {}", .0.display())]
    UnsupportedPath(PathBuf),

    #[error("nothing to commit: the staging index is empty")]
    NothingToCommit,

    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),

    #[error("failed to read object {oid}: {reason}")]
    ObjectReadFailure { oid: ObjectId, reason: String },

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("corrupt index at line {line}: {reason}")]
    CorruptIndex { line: usize, reason: String },

    #[error("corrupt ref file {}: {reason}", .path.display())]
    CorruptRef { path: PathBuf, reason: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Attach a description to a raw I/O failure
pub trait IoContext<T> {
    fn io_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn io_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|source| RepositoryError::Io {
            context: context().into(),
            source,
        })
    }
}
